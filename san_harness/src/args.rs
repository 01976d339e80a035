use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use simplelog::LevelFilter;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> LevelFilter {
        match verbosity {
            Verbosity::Off => LevelFilter::Off,
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warn => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

pub trait LogArgs {
    fn log_file(&self) -> PathBuf;
    fn log_level(&self) -> Verbosity;
}

impl LogArgs for Args {
    fn log_file(&self) -> PathBuf {
        self.log_file.clone()
    }
    fn log_level(&self) -> Verbosity {
        self.log_level
    }
}

pub trait ScenarioArgs {
    /// What a C harness would see as `argc`: the program plus the trailing
    /// scenario arguments. Harness options never count.
    fn argc(&self) -> usize;
}

impl ScenarioArgs for Args {
    fn argc(&self) -> usize {
        1 + self.args.len()
    }
}

/// The scenario itself is selected through `TEST_SANITIZER`, not through
/// these arguments.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
#[command(
    about = "san_harness",
    long_about = "Triggers one deliberate memory, UB or data-race defect, selected by \
                  the TEST_SANITIZER environment variable, for sanitizer validation"
)]
#[readonly::make]
pub struct Args {
    #[arg(
        short,
        long,
        help = "Log file (Requires --log-level)",
        default_value = "san_harness.log",
        requires = "log_level"
    )]
    log_file: PathBuf,

    #[arg(short='L', long, help = "Log level", value_enum, default_value_t = Verbosity::Off)]
    log_level: Verbosity,

    #[arg(long, help = "List the scenario registry and exit")]
    pub list: bool,

    #[arg(last = true, value_parser, num_args = 1.., help = "Arguments counted into the scenario argc")]
    args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use clap::{Parser, error::ErrorKind};
    use simplelog::LevelFilter;

    use super::{Args, LogArgs, ScenarioArgs, Verbosity};

    #[test]
    fn test_defaults_keep_logging_off() {
        let args = Args::try_parse_from(["san_harness"]).unwrap();
        assert!(!args.list);
        assert_eq!(args.log_level(), Verbosity::Off);
        assert_eq!(LevelFilter::from(args.log_level()), LevelFilter::Off);
    }

    #[test]
    fn test_log_file_requires_level() {
        let err = Args::try_parse_from(["san_harness", "--log-file", "x.log"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_log_file_with_level() {
        let args =
            Args::try_parse_from(["san_harness", "-L", "debug", "-l", "/tmp/h.log", "--list"])
                .unwrap();
        assert!(args.list);
        assert_eq!(LevelFilter::from(args.log_level()), LevelFilter::Debug);
        assert_eq!(args.log_file().to_str(), Some("/tmp/h.log"));
    }

    #[test]
    fn test_argc_ignores_harness_options() {
        let plain = Args::try_parse_from(["san_harness"]).unwrap();
        assert_eq!(plain.argc(), 1);

        let logged =
            Args::try_parse_from(["san_harness", "-L", "debug", "-l", "harness.log"]).unwrap();
        assert_eq!(logged.argc(), 1);

        let extra = Args::try_parse_from(["san_harness", "-L", "info", "--", "a", "b"]).unwrap();
        assert_eq!(extra.argc(), 3);
    }
}
