//! Error types for oscillator configuration and evaluation.

use thiserror::Error;

/// Errors that can occur when configuring or driving an oscillator.
///
/// Configuration errors (`InvalidMass`, `InvalidStiffness`, `InvalidDamping`)
/// are raised when a parameter is written, never from inside `evaluate`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OscillatorError {
    /// Mass must be positive and finite.
    #[error("mass must be positive and finite")]
    InvalidMass,
    /// Stiffness must be non-negative and finite.
    #[error("stiffness must be non-negative and finite")]
    InvalidStiffness,
    /// Damping must be non-negative and finite.
    #[error("damping must be non-negative and finite")]
    InvalidDamping,
    /// Delta time must be non-negative and finite.
    #[error("delta time must be non-negative and finite")]
    InvalidDeltaTime,
    /// Step size must be positive and finite.
    #[error("step size must be positive and finite")]
    InvalidStepSize,
    /// The solver is exact and has no step size to configure.
    #[error("{solver} solver has no fixed step size")]
    FixedStepUnsupported { solver: &'static str },
}

impl OscillatorError {
    /// True for errors raised by writing an invalid physical parameter.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            OscillatorError::InvalidMass
                | OscillatorError::InvalidStiffness
                | OscillatorError::InvalidDamping
        )
    }
}
