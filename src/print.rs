use crate::args::Print;
use labelcast::shipping::{today, ShippingLabel};
use labelcast::{encoder, transport};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub type Result<T> = std::result::Result<T, PrintError>;

/// Encodes the shipping label and sends it to the printer.
#[tracing::instrument(skip(opts), fields(ip = %opts.ip, port = opts.port))]
pub fn print(opts: &Print) -> Result<()> {
    let timeout = timeout(opts.timeout_secs)?;
    let print_date = opts.date.clone().unwrap_or_else(today);

    let job = ShippingLabel {
        basket_number: &opts.basket_number,
        delivery_note_number: &opts.delivery_note_number,
        print_date: &print_date,
    }
    .encode(opts.label(), opts.bold_policy())?;

    transport::send_with_timeout(&opts.ip, opts.port, job.as_bytes(), timeout)?;
    info!(
        "Printed label for basket {basket} and delivery note {note}",
        basket = opts.basket_number,
        note = opts.delivery_note_number
    );

    Ok(())
}

fn timeout(timeout_secs: Option<f64>) -> Result<Option<Duration>> {
    match timeout_secs {
        None => Ok(None),
        Some(secs) if secs.is_finite() && secs > 0.0 && secs <= u32::MAX as f64 => {
            Ok(Some(Duration::from_secs_f64(secs)))
        }
        Some(secs) => Err(PrintError::Timeout { secs }),
    }
}

#[derive(Error, Debug)]
pub enum PrintError {
    #[error("Timeout must be a positive number of seconds, got: {secs}")]
    Timeout { secs: f64 },
    #[error("Could not encode label: {0}")]
    Encode(#[from] encoder::Error),
    #[error("{0}")]
    Transport(#[from] transport::Error),
}
