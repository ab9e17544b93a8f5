use anyhow::Result;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Logs go to stderr, stdout only carries the response. Record targets are
/// printed from debug level on.
pub fn init(level: LevelFilter, colored: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);
    let with_target = level >= LevelFilter::Debug;

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = if colored {
                colors.color(record.level()).to_string()
            } else {
                record.level().to_string()
            };
            let now = chrono::Utc::now().to_rfc3339();

            if with_target {
                out.finish(format_args!("[{now} {level} {}] {message}", record.target()))
            } else {
                out.finish(format_args!("[{now} {level}] {message}"))
            }
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
