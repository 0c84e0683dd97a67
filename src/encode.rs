use crate::args::Encode;
use labelcast::encoder;
use labelcast::shipping::{today, ShippingLabel};
use std::fs::write;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

pub type Result<T> = std::result::Result<T, EncodeError>;

/// Encodes the shipping label and writes the commands to a file, e.g. for
/// sending them later with `nc <printer> 9100 < label.bin`.
#[tracing::instrument(skip(opts), fields(output = ?opts.output))]
pub fn encode(opts: &Encode) -> Result<()> {
    let print_date = opts.date.clone().unwrap_or_else(today);
    let job = ShippingLabel {
        basket_number: &opts.basket_number,
        delivery_note_number: &opts.delivery_note_number,
        print_date: &print_date,
    }
    .encode(opts.label(), opts.bold_policy())?;
    debug!("Encoded label: {:?}", job);

    write(&opts.output, job.as_bytes()).map_err(|e| EncodeError::write(e, &opts.output))?;
    info!("Wrote {} bytes to {}", job.len(), opts.output.display());

    Ok(())
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("Could not encode label: {0}")]
    Encode(#[from] encoder::Error),
    #[error("Could not write printer commands to {path:?}, due to I/O error: {source}")]
    Write {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl EncodeError {
    fn write(source: std::io::Error, path: &std::path::Path) -> Self {
        Self::Write {
            source,
            path: path.into(),
        }
    }
}
