use crate::args::{Invocation, Run};
use serde_yaml::from_reader;
use std::fs::File;
use thiserror::Error;

pub fn run(invocation: Invocation) -> Result<(), String> {
    match invocation {
        Invocation::Run(run) => run_yaml(run).map_err(|e| format!("{}", e)),
        Invocation::Print(print) => crate::print::print(&print).map_err(|e| format!("{}", e)),
        Invocation::Encode(encode) => crate::encode::encode(&encode).map_err(|e| format!("{}", e)),
    }
}

fn run_yaml(opts: Run) -> Result<(), RunError> {
    let file = File::open(opts.config)?;
    let invocation = from_reader(file)?;
    run(invocation).map_err(RunError::Cmd)
}

#[derive(Error, Debug)]
pub enum RunError {
    #[error("Could not open specified YAML configuration file: {0}")]
    IO(#[from] std::io::Error),
    #[error("Could not parse specified YAML configuration file: {0}")]
    Deserialize(#[from] serde_yaml::Error),
    #[error("{0}")]
    Cmd(String),
}
