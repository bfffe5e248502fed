use thiserror::Error;

use colresize::ConfigError;

/// Anything that stops the demo from starting or running.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse column file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid column configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
