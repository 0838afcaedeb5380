//! Provides the program's logging setup.

use crate::config::Config;
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
pub use log::{debug, error, info, trace, warn};
use std::time::Instant;

/// Sets up the program's logging based on a given program config.
pub fn setup_logging(config: &Config) -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Magenta)
        .warn(Color::Yellow)
        .error(Color::Red);
    let start = Instant::now();

    Dispatch::new()
        .format(move |out, msg, record| {
            out.finish(format_args!(
                "[{: >11.3}] [{: >5}] {{{}}} {}",
                start.elapsed().as_secs_f32(),
                colors.color(record.level()),
                record.target(),
                msg
            ))
        })
        .level(config.log.level.to_level_filter())
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
