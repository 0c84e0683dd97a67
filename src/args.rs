use labelcast::encoder::BoldPolicy;
use labelcast::label::Label;
use labelcast::transport::DEFAULT_PORT;
use argh::FromArgs;
use serde::Deserialize;
use std::path::PathBuf;

/// Print shipping labels on an ESC/P label printer over raw TCP.
#[derive(FromArgs)]
pub struct TopLevel {
    /// log debug output, including the bytes sent to the printer.
    #[argh(switch, short = 'v')]
    pub verbose: bool,
    #[argh(subcommand)]
    pub invocation: Invocation,
}

/// Inner top-level command.
#[derive(FromArgs, Deserialize)]
#[argh(subcommand)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    #[serde(skip)]
    Run(Run),
    Print(Print),
    Encode(Encode),
}

/// Take run parameters from a specified YAML configuration file.
#[derive(FromArgs)]
#[argh(subcommand, name = "run")]
pub struct Run {
    #[argh(positional)]
    pub config: PathBuf,
}

/// Print a shipping label with the given ware basket and delivery note numbers.
#[derive(FromArgs, Deserialize)]
#[argh(subcommand, name = "print")]
pub struct Print {
    /// number of the ware basket, printed in bold and encoded as QR code.
    #[argh(positional)]
    pub basket_number: String,
    /// number of the delivery note.
    #[argh(positional)]
    pub delivery_note_number: String,
    /// address or host name of the printer, e.g. 192.168.1.135.
    #[argh(option, short = 'i')]
    pub ip: String,
    /// port of the raw printing service, defaults to 9100.
    #[argh(option, short = 'p', default = "DEFAULT_PORT")]
    #[serde(default = "default_port")]
    pub port: u16,
    /// give up connecting to or writing to the printer after this many seconds.
    #[argh(option, short = 't')]
    #[serde(default)]
    pub timeout_secs: Option<f64>,
    /// print date to use instead of today, e.g. 16.10.2026.
    #[argh(option, short = 'd')]
    #[serde(default)]
    pub date: Option<String>,
    /// fail instead of emitting unbalanced bold commands.
    #[argh(switch)]
    #[serde(default)]
    pub strict_bold: bool,
    /// label length in mm, defaults to 29.
    #[argh(option, default = "29.0")]
    #[serde(default = "default_length_mm")]
    pub length_mm: f64,
    /// label width in mm, defaults to 62.
    #[argh(option, default = "62.0")]
    #[serde(default = "default_width_mm")]
    pub width_mm: f64,
    /// left and right margin in mm, defaults to 3.
    #[argh(option, default = "3.0")]
    #[serde(default = "default_lr_margin_mm")]
    pub lr_margin_mm: f64,
    /// top and bottom margin in mm, defaults to 1.5.
    #[argh(option, default = "1.5")]
    #[serde(default = "default_tb_margin_mm")]
    pub tb_margin_mm: f64,
}

impl Print {
    pub fn label(&self) -> Label {
        Label::new(
            self.length_mm,
            self.width_mm,
            self.lr_margin_mm,
            self.tb_margin_mm,
        )
    }

    pub fn bold_policy(&self) -> BoldPolicy {
        bold_policy(self.strict_bold)
    }
}

/// Write the commands for a shipping label to a file instead of printing it.
#[derive(FromArgs, Deserialize)]
#[argh(subcommand, name = "encode")]
pub struct Encode {
    /// number of the ware basket, printed in bold and encoded as QR code.
    #[argh(positional)]
    pub basket_number: String,
    /// number of the delivery note.
    #[argh(positional)]
    pub delivery_note_number: String,
    /// file to write the printer commands to.
    #[argh(option, short = 'o')]
    pub output: PathBuf,
    /// print date to use instead of today, e.g. 16.10.2026.
    #[argh(option, short = 'd')]
    #[serde(default)]
    pub date: Option<String>,
    /// fail instead of emitting unbalanced bold commands.
    #[argh(switch)]
    #[serde(default)]
    pub strict_bold: bool,
    /// label length in mm, defaults to 29.
    #[argh(option, default = "29.0")]
    #[serde(default = "default_length_mm")]
    pub length_mm: f64,
    /// label width in mm, defaults to 62.
    #[argh(option, default = "62.0")]
    #[serde(default = "default_width_mm")]
    pub width_mm: f64,
    /// left and right margin in mm, defaults to 3.
    #[argh(option, default = "3.0")]
    #[serde(default = "default_lr_margin_mm")]
    pub lr_margin_mm: f64,
    /// top and bottom margin in mm, defaults to 1.5.
    #[argh(option, default = "1.5")]
    #[serde(default = "default_tb_margin_mm")]
    pub tb_margin_mm: f64,
}

impl Encode {
    pub fn label(&self) -> Label {
        Label::new(
            self.length_mm,
            self.width_mm,
            self.lr_margin_mm,
            self.tb_margin_mm,
        )
    }

    pub fn bold_policy(&self) -> BoldPolicy {
        bold_policy(self.strict_bold)
    }
}

fn bold_policy(strict_bold: bool) -> BoldPolicy {
    if strict_bold {
        BoldPolicy::Balanced
    } else {
        BoldPolicy::Unchecked
    }
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_length_mm() -> f64 {
    Label::default().length_mm()
}

fn default_width_mm() -> f64 {
    Label::default().width_mm()
}

fn default_lr_margin_mm() -> f64 {
    Label::default().lr_margin_mm()
}

fn default_tb_margin_mm() -> f64 {
    Label::default().tb_margin_mm()
}
