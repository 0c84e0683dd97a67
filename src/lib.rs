//! Encodes shipping labels as ESC/P command streams for Brother QL label
//! printers and sends them over raw TCP.

pub mod encoder;
pub mod job;
pub mod label;
pub mod parity;
pub mod shipping;
pub mod transport;
pub mod units;
