use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input error: {0}")]
    Input(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}
