//! Exact closed-form solution of the damped harmonic oscillator.
//!
//! Solves `m·x'' + c·x' + k·(x - end) = 0` analytically from the elapsed time
//! since the last reset or retarget. There is no step size and no stability
//! limit: any `dt` lands on the exact state.

use crate::config::{Boundary, DampingMode, OscillatorConfig};
use crate::error::OscillatorError;
use crate::float::Float;
use crate::observer::SubstepObserver;
use crate::oscillator::Oscillator;

/// Analytical oscillator that recomputes its state from elapsed time.
#[derive(Clone, Debug)]
pub struct ClosedForm<F: Float> {
    config: OscillatorConfig<F>,
    boundary: Boundary<F>,
    // current segment, captured at reset and retarget
    target: F,
    offset0: F,
    velocity0: F,
    elapsed: F,
    value: F,
    velocity: F,
}

impl<F: Float> ClosedForm<F> {
    pub fn new(config: OscillatorConfig<F>, boundary: Boundary<F>) -> Self {
        let mut spring = ClosedForm {
            config,
            boundary,
            target: F::zero(),
            offset0: F::zero(),
            velocity0: F::zero(),
            elapsed: F::zero(),
            value: F::zero(),
            velocity: F::zero(),
        };
        spring.reset();
        spring
    }

    /// Seconds since the last reset or retarget.
    pub fn elapsed(&self) -> F { self.elapsed }
}

impl<F: Float> Default for ClosedForm<F> {
    fn default() -> Self {
        Self::new(OscillatorConfig::new(), Boundary::default())
    }
}

/// Offset from the end value and velocity at time `t`, given offset `x0` and
/// velocity `v0` at time zero.
pub fn solve<F: Float>(config: &OscillatorConfig<F>, x0: F, v0: F, t: F) -> (F, F) {
    let w = config.natural_frequency();

    match config.damping_mode() {
        DampingMode::CriticallyDamped => {
            let exp_term = (-w * t).exp();
            let c2 = v0 + x0 * w;
            let x = (x0 + c2 * t) * exp_term;
            let v = (v0 - c2 * w * t) * exp_term;
            (x, v)
        }
        DampingMode::Underdamped { ratio: zeta } => {
            let one = F::one();
            let wd = w * (one - zeta * zeta).sqrt();
            let exp_term = (-zeta * w * t).exp();
            let cos_term = (wd * t).cos();
            let sin_term = (wd * t).sin();

            let a = x0;
            let b = (v0 + x0 * zeta * w) / wd;

            let x = (a * cos_term + b * sin_term) * exp_term;

            let v_cos_coeff = b * wd - a * zeta * w;
            let v_sin_coeff = a * wd + b * zeta * w;
            let v = (v_cos_coeff * cos_term - v_sin_coeff * sin_term) * exp_term;

            (x, v)
        }
        DampingMode::Overdamped { ratio: zeta } => {
            let one = F::one();
            let s = (zeta * zeta - one).sqrt();
            let r1 = -w * (zeta - s);
            let r2 = -w * (zeta + s);
            let denom = one / (r2 - r1);

            let c1 = (x0 * r2 - v0) * denom;
            let c2 = (v0 - x0 * r1) * denom;

            let exp1 = (r1 * t).exp();
            let exp2 = (r2 * t).exp();

            let x = c1 * exp1 + c2 * exp2;
            let v = c1 * r1 * exp1 + c2 * r2 * exp2;

            (x, v)
        }
        DampingMode::Undriven => {
            let c = config.damping();
            if c.is_near_zero(F::from_f32(1e-12)) {
                return (x0 + v0 * t, v0);
            }
            let m = config.mass();
            let decay = (-c * t / m).exp();
            (x0 + v0 * (m / c) * (F::one() - decay), v0 * decay)
        }
    }
}

impl<F: Float> Oscillator<F> for ClosedForm<F> {
    fn config(&self) -> &OscillatorConfig<F> { &self.config }
    fn config_mut(&mut self) -> &mut OscillatorConfig<F> { &mut self.config }
    fn boundary(&self) -> &Boundary<F> { &self.boundary }
    fn boundary_mut(&mut self) -> &mut Boundary<F> { &mut self.boundary }

    fn reset(&mut self) {
        self.target = self.boundary.end_value;
        self.offset0 = self.boundary.start_value - self.target;
        self.velocity0 = self.boundary.initial_velocity;
        self.elapsed = F::zero();
        self.value = self.boundary.start_value;
        self.velocity = self.velocity0;
    }

    fn retarget_with_velocity(&mut self, end: F, velocity: F) {
        self.boundary.start_value = self.value;
        self.boundary.end_value = end;
        self.boundary.initial_velocity = velocity;
        self.target = end;
        self.offset0 = self.value - end;
        self.velocity0 = velocity;
        self.elapsed = F::zero();
        self.velocity = velocity;
    }

    fn integrate<O: SubstepObserver<F>>(&mut self, dt: F, observer: &mut O) -> F {
        self.elapsed = self.elapsed + dt;

        let (offset, velocity) = solve(&self.config, self.offset0, self.velocity0, self.elapsed);

        self.value = self.target + offset;
        self.velocity = velocity;
        observer.on_evaluate_complete(self.value);
        self.value
    }

    fn target(&self) -> F { self.target }
    fn value(&self) -> F { self.value }
    fn velocity(&self) -> F { self.velocity }

    fn snap_to_target(&mut self) {
        let end = self.target;
        self.boundary.start_value = end;
        self.boundary.end_value = end;
        self.boundary.initial_velocity = F::zero();
        self.offset0 = F::zero();
        self.velocity0 = F::zero();
        self.elapsed = F::zero();
        self.value = end;
        self.velocity = F::zero();
    }

    fn step_size(&self) -> Option<F> { None }

    fn set_step_size(&mut self, _step_size: F) -> Result<(), OscillatorError> {
        Err(OscillatorError::FixedStepUnsupported { solver: "closed-form" })
    }
}
