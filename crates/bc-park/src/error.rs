use bc_core::BcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParkError {
    #[error("park configuration error: {0}")]
    Config(#[from] BcError),

    #[error("failed to spawn {what} thread: {source}")]
    Spawn {
        what:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("{what} thread panicked: {message}")]
    ActorPanicked {
        what:    String,
        message: String,
    },
}

pub type ParkResult<T> = Result<T, ParkError>;
