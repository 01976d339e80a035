use std::{ffi::OsString, process::ExitCode};

use anyhow::Result;

use crate::selection::{self, SelectionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> ExitCode {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

fn reject(err: &SelectionError) -> ExitStatus {
    error!("Rejected selection: {err:?}");
    eprintln!("{err:}");
    ExitStatus::Failure
}

/// Resolves `selection` and runs the scenario it names.
///
/// `Failure` means a configuration error only. A scenario that trips its
/// checker never comes back here.
pub fn run(selection: Option<OsString>, argc: usize) -> Result<ExitStatus> {
    let key = match selection::read_key(selection) {
        Ok(key) => key,
        Err(err) => return Ok(reject(&err)),
    };
    println!("Env. param is: {key}");

    let scenario = match selection::resolve(&key) {
        Ok(scenario) => scenario,
        Err(err) => return Ok(reject(&err)),
    };

    scenario.trigger(argc)?;

    println!("Hello world!");
    Ok(ExitStatus::Success)
}
