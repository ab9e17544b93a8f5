use anyhow::Result;

use crate::{
    cmd::{Args, LogLevel},
    init::logger,
};

/// Parse the command line and install the logger. Returns the flags and the
/// positional arguments without the executable path.
pub fn init() -> Result<(Args, Vec<String>)> {
    let (mut args, mut remainder) = Args::parse()?;
    let level = args.log_level.take().unwrap_or_default();
    logger::init(level.0, args.colored.unwrap_or(false))?;

    if !remainder.is_empty() {
        remainder.remove(0); // remove the executable path
    }
    log::debug!("{args:?}, {remainder:?}");

    Ok((args, remainder))
}
