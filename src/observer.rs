//! Substep observer trait for monitoring oscillator integration.

/// Trait for observing the substeps of a single `evaluate` call.
///
/// Implement this trait to inspect how a solver subdivides a frame (e.g. for
/// plotting or debugging). All methods have default no-op implementations.
pub trait SubstepObserver<F> {
    /// Called after each integration substep with the state it produced.
    fn on_substep(&mut self, _index: usize, _value: F, _velocity: F) {}

    /// Called once the frame has been fully evaluated.
    fn on_evaluate_complete(&mut self, _value: F) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpSubstepObserver;

impl<F> SubstepObserver<F> for NoOpSubstepObserver {}
