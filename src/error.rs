/// Startup and serving failures. Request handling itself cannot fail: the
/// inference endpoints accept any body.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
