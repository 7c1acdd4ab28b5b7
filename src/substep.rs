//! Subdivision of a frame interval into fixed-length integration substeps.

use crate::error::OscillatorError;
use crate::float::Float;

/// Fraction of a step below which a trailing remainder is folded into the
/// previous substep instead of becoming its own near-zero step.
const SNAP_FRACTION: f32 = 1e-4;

/// Upper bound on substeps per `evaluate` call. A longer frame is cut to
/// `MAX_SUBSTEPS` full steps and the remaining time is dropped.
pub const MAX_SUBSTEPS: usize = 10_000;

/// How one `evaluate(dt)` call is split into substeps.
///
/// Every substep has length `step` except the last, which has length `last`
/// so the substeps sum to exactly `dt`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SubstepPlan<F: Float> {
    pub count: usize,
    pub step: F,
    pub last: F,
}

impl<F: Float> SubstepPlan<F> {
    /// Plan `ceil(dt / step_size)` substeps. `dt` must be non-negative and
    /// `step_size` positive; a zero `dt` yields no substeps, a `dt` shorter
    /// than `step_size` yields a single substep of length `dt`, and a frame
    /// needing more than [`MAX_SUBSTEPS`] is truncated to that many full steps.
    pub fn new(dt: F, step_size: F) -> Self {
        if dt <= F::zero() {
            return SubstepPlan { count: 0, step: step_size, last: F::zero() };
        }
        let ratio = dt / step_size;
        if !(ratio <= F::from_f32(MAX_SUBSTEPS as f32)) {
            tracing::warn!(%dt, %step_size, max = MAX_SUBSTEPS, "frame truncated to substep limit");
            return SubstepPlan { count: MAX_SUBSTEPS, step: step_size, last: step_size };
        }
        let count = (ratio - F::from_f32(SNAP_FRACTION)).ceil().max(F::one());
        let last = dt - (count - F::one()) * step_size;
        SubstepPlan {
            count: count.to_usize(),
            step: step_size,
            last,
        }
    }

    /// Length of substep `index`.
    #[inline]
    pub fn length(&self, index: usize) -> F {
        if index + 1 == self.count { self.last } else { self.step }
    }
}

/// Validate a fixed step size.
pub(crate) fn check_step_size<F: Float>(step_size: F) -> Result<F, OscillatorError> {
    if step_size.is_finite() && step_size > F::zero() {
        Ok(step_size)
    } else {
        tracing::warn!(%step_size, "rejected step size");
        Err(OscillatorError::InvalidStepSize)
    }
}

/// Map `dt` onto the domain `evaluate` accepts: negative, NaN and infinite
/// values become zero.
#[inline]
pub(crate) fn sanitize_delta_time<F: Float>(dt: F) -> F {
    if dt.is_finite() && dt >= F::zero() {
        dt
    } else {
        tracing::warn!(%dt, "clamped invalid delta time to zero");
        F::zero()
    }
}

/// Validate `dt` for `try_evaluate`.
#[inline]
pub(crate) fn check_delta_time<F: Float>(dt: F) -> Result<F, OscillatorError> {
    if dt.is_finite() && dt >= F::zero() {
        Ok(dt)
    } else {
        Err(OscillatorError::InvalidDeltaTime)
    }
}
