use std::io::Write;

use clap::ValueEnum;
use env_logger::{Builder, Target, WriteStyle};
use log::SetLoggerError;

use crate::Cli;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormat {
    /// `WARN no tour exists`
    Compact,
    /// `WARN tsp_branch_bound: no tour exists`
    Pretty,
}

/// Installs a stderr logger configured from the `--log-*` flags.
pub fn init_logger(cli: &Cli) -> Result<(), SetLoggerError> {
    let format = cli.log_format;
    let timestamp = cli.log_timestamp;

    Builder::new()
        .filter_level(cli.log_level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(move |buf, record| {
            if timestamp {
                write!(buf, "{} ", buf.timestamp_millis())?;
            }
            write!(buf, "{:<5} ", record.level())?;
            if let LogFormat::Pretty = format {
                write!(buf, "{}: ", record.target())?;
            }
            writeln!(buf, "{}", record.args())
        })
        .try_init()
}
