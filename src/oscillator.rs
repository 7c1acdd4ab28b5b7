//! The contract shared by every oscillator solver.

use crate::config::{Boundary, OscillatorConfig};
use crate::error::OscillatorError;
use crate::float::Float;
use crate::observer::{NoOpSubstepObserver, SubstepObserver};
use crate::substep::{check_delta_time, sanitize_delta_time};

/// A scalar animated as a damped harmonic oscillator.
///
/// Every solver is constructed in the reset state, so `evaluate` is valid
/// immediately. Writes through [`Oscillator::config_mut`] take effect on the
/// next `evaluate`; writes through [`Oscillator::boundary_mut`] take effect on
/// the next [`Oscillator::reset`].
///
/// ```
/// use oscillo::{Boundary, ClosedForm, Oscillator, OscillatorConfig};
///
/// let mut spring: ClosedForm<f32> = ClosedForm::new(OscillatorConfig::new(), Boundary::new(10.0, 0.0));
/// for _ in 0..120 {
///     spring.evaluate(1.0 / 60.0);
/// }
/// assert!(spring.value().abs() < 0.01);
/// ```
pub trait Oscillator<F: Float> {
    fn config(&self) -> &OscillatorConfig<F>;
    fn config_mut(&mut self) -> &mut OscillatorConfig<F>;
    fn boundary(&self) -> &Boundary<F>;
    fn boundary_mut(&mut self) -> &mut Boundary<F>;

    /// Discard the motion state and restart from the boundary's start value
    /// and initial velocity.
    fn reset(&mut self);

    /// Move the destination to `end` and continue from the current value with
    /// `velocity`. The boundary is rewritten to start at the current value.
    fn retarget_with_velocity(&mut self, end: F, velocity: F);

    /// Advance by `dt` seconds, which the caller guarantees is non-negative
    /// and finite, and return the new value.
    fn integrate<O: SubstepObserver<F>>(&mut self, dt: F, observer: &mut O) -> F;

    /// End value of the motion segment in progress.
    fn target(&self) -> F;
    /// The last computed value.
    fn value(&self) -> F;
    /// The last computed velocity.
    fn velocity(&self) -> F;

    /// Jump to the target at rest.
    fn snap_to_target(&mut self);

    /// The fixed integration step in seconds, `None` for exact solvers.
    fn step_size(&self) -> Option<F>;
    fn set_step_size(&mut self, step_size: F) -> Result<(), OscillatorError>;

    /// Move the destination to `end`, keeping the current velocity.
    fn retarget(&mut self, end: F) {
        let velocity = self.velocity();
        self.retarget_with_velocity(end, velocity);
    }

    /// Advance by `dt` seconds and return the new value.
    ///
    /// Negative, NaN or infinite `dt` is treated as zero.
    #[inline]
    fn evaluate(&mut self, dt: F) -> F {
        self.evaluate_observed(dt, &mut NoOpSubstepObserver)
    }

    /// Like [`Oscillator::evaluate`] but reports each substep to `observer`.
    #[inline]
    fn evaluate_observed<O: SubstepObserver<F>>(&mut self, dt: F, observer: &mut O) -> F {
        let dt = sanitize_delta_time(dt);
        self.integrate(dt, observer)
    }

    /// Like [`Oscillator::evaluate`] but rejects invalid `dt` instead of clamping it.
    fn try_evaluate(&mut self, dt: F) -> Result<F, OscillatorError> {
        let dt = check_delta_time(dt)?;
        Ok(self.integrate(dt, &mut NoOpSubstepObserver))
    }

    /// True once the value is within `eps_pos` of the target and moving
    /// slower than `eps_vel`.
    fn is_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        let offset = self.value() - self.target();
        offset.abs() < eps_pos && self.velocity().abs() < eps_vel
    }
}
