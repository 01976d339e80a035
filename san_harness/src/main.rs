mod args;
mod dispatch;
mod logger;
mod sanitizer;
mod scenario;
mod selection;

#[macro_use]
extern crate log;
extern crate simplelog;

use std::{env, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use strum::IntoEnumIterator;

use crate::{
    args::{Args, ScenarioArgs},
    logger::Logger,
    scenario::Scenario,
    selection::SELECTION_VAR,
};

fn list() {
    for scenario in Scenario::iter() {
        let sanitizer = scenario.sanitizer();
        println!(
            "{scenario}\t{sanitizer}\t{}\t{}",
            scenario.defect(),
            sanitizer.rustc_flag().unwrap_or("-")
        );
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    Logger::init(&args)?;

    info!("Started san_harness...");

    info!("Args: {args:#?}");

    if args.list {
        list();
        return Ok(ExitCode::SUCCESS);
    }

    let selection = env::var_os(SELECTION_VAR);
    info!("{SELECTION_VAR}: {selection:?}");

    let argc = args.argc();
    debug!("Scenario argc: {argc}");
    let status = dispatch::run(selection, argc)?;

    info!("Finished: {status:?}");
    Ok(status.into())
}
