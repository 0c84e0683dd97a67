//! Raw printing: one TCP connection per job, the whole job written, closed.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, Error>;

/// Port of the raw printing service.
pub const DEFAULT_PORT: u16 = 9100;

/// Sends `payload` to the printer, blocking until it has been written or
/// connecting or writing fails.
pub fn send(ip: &str, port: u16, payload: &[u8]) -> Result<()> {
    send_with_timeout(ip, port, payload, None)
}

/// Like [send], but gives up connecting, and each write, after `timeout`.
#[tracing::instrument(skip(payload), fields(len = payload.len()))]
pub fn send_with_timeout(
    ip: &str,
    port: u16,
    payload: &[u8],
    timeout: Option<Duration>,
) -> Result<()> {
    info!("Sending {} bytes to printer at {}:{}", payload.len(), ip, port);
    debug!("Payload: {:02X?}", payload);

    let mut stream = connect(ip, port, timeout)?;
    stream
        .set_write_timeout(timeout)
        .map_err(|e| Error::io(e, ip, port))?;
    stream
        .write_all(payload)
        .and_then(|_| stream.flush())
        .map_err(|e| Error::io(e, ip, port))?;
    // the job is delivered at this point, the stream is closed when dropped
    if let Err(e) = stream.shutdown(Shutdown::Both) {
        debug!("Could not shut down connection to {}:{}: {}", ip, port, e);
    }

    debug!("Payload sent, connection closed");
    Ok(())
}

fn connect(ip: &str, port: u16, timeout: Option<Duration>) -> Result<TcpStream> {
    let addrs: Vec<SocketAddr> = (ip, port)
        .to_socket_addrs()
        .map_err(|e| Error::connection(e, ip, port))?
        .collect();

    let mut last_err = None;
    for addr in addrs {
        let attempt = match timeout {
            Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
            None => TcpStream::connect(addr),
        };
        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!("Could not connect to {}: {}", addr, e);
                last_err = Some(e)
            }
        }
    }

    let source = last_err.unwrap_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::AddrNotAvailable,
            "address did not resolve to anything",
        )
    });
    Err(Error::connection(source, ip, port))
}

/// Whether the connection could not be established or the job could not be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not connect to printer at {ip}:{port}, due to error: {source}")]
    Connection {
        source: std::io::Error,
        ip: String,
        port: u16,
    },
    #[error("Could not send print job to printer at {ip}:{port}, due to I/O error: {source}")]
    IO {
        source: std::io::Error,
        ip: String,
        port: u16,
    },
}

impl Error {
    fn connection(source: std::io::Error, ip: &str, port: u16) -> Self {
        Self::Connection {
            source,
            ip: ip.into(),
            port,
        }
    }

    fn io(source: std::io::Error, ip: &str, port: u16) -> Self {
        Self::IO {
            source,
            ip: ip.into(),
            port,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection { .. } => ErrorKind::Connection,
            Error::IO { .. } => ErrorKind::Io,
        }
    }
}
