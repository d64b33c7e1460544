use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Non-positive mass or non-finite kinematic state; the body must not be integrated.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A required reference (wing mount, nozzle) is missing; the model is a no-op.
    #[error("Model configuration error: {0}")]
    Configuration(String),

    /// Zero-length vector where a direction was required. Produced by
    /// [`unit_direction`](crate::physics::unit_direction) and always handled by the
    /// caller with a fallback direction; never surfaced to the host.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;
