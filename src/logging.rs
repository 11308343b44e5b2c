use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;
use crate::config::General;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}";

#[derive(Error, Debug)]
#[error("error setting up logging: {0}")]
pub struct LoggingError(pub String);

impl From<std::io::Error> for LoggingError {
    fn from(e: std::io::Error) -> Self { LoggingError(e.to_string()) }
}
impl From<log4rs::config::runtime::ConfigErrors> for LoggingError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self { LoggingError(e.to_string()) }
}
impl From<log::SetLoggerError> for LoggingError {
    fn from(e: log::SetLoggerError) -> Self { LoggingError(e.to_string()) }
}

/// Sets up log4rs with a console and/or file appender.
///
/// Console logging is kept if no file is given, so a run is never silent
///
/// # Arguments
///
/// * 'general' - log path, level and whether to log to stdout
pub fn setup_logger(general: &General) -> Result<Handle, LoggingError> {
    let config = build_config(general)?;

    Ok(log4rs::init_config(config)?)
}

fn build_config(general: &General) -> Result<Config, LoggingError> {
    let mut builder = Config::builder();
    let mut root = Root::builder();

    let log_path = general.log_path.as_deref().filter(|p| !p.trim().is_empty());

    if let Some(path) = log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    if general.log_to_stdout || log_path.is_none() {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    Ok(builder.build(root.build(general.log_level))?)
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use super::*;

    #[test]
    fn console_is_used_without_log_file() {
        let general = General { log_path: None, log_level: LevelFilter::Warn, log_to_stdout: false, debug_mode: false };

        let config = build_config(&general).unwrap();

        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.appenders()[0].name(), "stdout");
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }

    #[test]
    fn file_and_console_when_both_asked_for() {
        let path = std::env::temp_dir().join("dinnercast_logging_test.log");
        let general = General {
            log_path: Some(path.to_string_lossy().to_string()),
            log_level: LevelFilter::Info,
            log_to_stdout: true,
            debug_mode: false,
        };

        let config = build_config(&general).unwrap();

        let names = config.appenders().iter().map(|a| a.name()).collect::<Vec<&str>>();
        assert_eq!(names, vec!["file", "stdout"]);
        assert_eq!(config.root().appenders(), &["file".to_string(), "stdout".to_string()]);
    }
}
