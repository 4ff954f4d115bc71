use warmer_walker_core::walk::TrackerError;

pub mod types;
pub mod walk;

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum SessionError {
    #[error("No walk has been started")]
    NotStarted,

    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Tracker(#[from] TrackerError),
}
