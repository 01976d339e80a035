use std::fs::File;

use anyhow::{Result, anyhow};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::args::LogArgs;

pub struct Logger;

impl Logger {
    /// Logs only ever go to the log file. stdout and stderr belong to the
    /// scenario output that sanitizer drivers match on.
    pub fn init(args: &impl LogArgs) -> Result<()> {
        let filter: LevelFilter = args.log_level().into();
        if filter == LevelFilter::Off {
            return Ok(());
        }

        let path = args.log_file();
        let logfile = File::create(&path)
            .map_err(|e| anyhow!("Failed to open log file {}: {e:}", path.display()))?;

        let config = ConfigBuilder::new().set_target_level(LevelFilter::Off).build();

        WriteLogger::init(filter, config, logfile)
            .map_err(|e| anyhow!("Failed to initalize logger: {e:}"))?;
        Ok(())
    }
}
