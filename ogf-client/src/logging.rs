//! Logger setup.

use ogf_core::config::LogConfig;

use crate::Result;

/// Installs a [`fern`] logger writing to stdout and, if configured, to a
/// log file.
///
/// Lines look like `[2024-01-01 12:00:00.000 INFO ogf_core::mesh] message`.
pub fn init(config: &LogConfig) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter())
        .chain(std::io::stdout());

    if let Some(path) = &config.file {
        dispatch = dispatch.chain(fern::log_file(path).map_err(fern::InitError::Io)?);
    }

    dispatch.apply().map_err(fern::InitError::SetLoggerError)?;
    Ok(())
}
