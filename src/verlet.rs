//! Velocity Verlet integration.
//!
//! Unlike the other fixed-step solvers this one carries acceleration across
//! calls: each substep averages the previous acceleration with the one at the
//! new position.

use crate::config::{Boundary, OscillatorConfig};
use crate::error::OscillatorError;
use crate::float::Float;
use crate::observer::SubstepObserver;
use crate::oscillator::Oscillator;
use crate::substep::{check_step_size, SubstepPlan};

/// Fixed-step velocity Verlet oscillator.
#[derive(Clone, Debug)]
pub struct VelocityVerlet<F: Float> {
    config: OscillatorConfig<F>,
    boundary: Boundary<F>,
    target: F,
    step_size: F,
    value: F,
    velocity: F,
    acceleration: F,
}

impl<F: Float> VelocityVerlet<F> {
    pub const DEFAULT_STEP_SIZE: f32 = 1.0 / 61.0;

    pub fn new(config: OscillatorConfig<F>, boundary: Boundary<F>) -> Self {
        let mut spring = VelocityVerlet {
            config,
            boundary,
            target: F::zero(),
            step_size: F::from_f32(Self::DEFAULT_STEP_SIZE),
            value: F::zero(),
            velocity: F::zero(),
            acceleration: F::zero(),
        };
        spring.reset();
        spring
    }

    pub fn with_step_size(mut self, step_size: F) -> Result<Self, OscillatorError> {
        self.step_size = check_step_size(step_size)?;
        Ok(self)
    }

    /// Acceleration carried into the next substep.
    pub fn acceleration(&self) -> F { self.acceleration }
}

impl<F: Float> Default for VelocityVerlet<F> {
    fn default() -> Self {
        Self::new(OscillatorConfig::new(), Boundary::default())
    }
}

impl<F: Float> Oscillator<F> for VelocityVerlet<F> {
    fn config(&self) -> &OscillatorConfig<F> { &self.config }
    fn config_mut(&mut self) -> &mut OscillatorConfig<F> { &mut self.config }
    fn boundary(&self) -> &Boundary<F> { &self.boundary }
    fn boundary_mut(&mut self) -> &mut Boundary<F> { &mut self.boundary }

    fn reset(&mut self) {
        self.target = self.boundary.end_value;
        self.value = self.boundary.start_value;
        self.velocity = self.boundary.initial_velocity;
        self.acceleration = self.config.acceleration(self.value, self.velocity, self.target);
    }

    fn retarget_with_velocity(&mut self, end: F, velocity: F) {
        self.boundary.start_value = self.value;
        self.boundary.end_value = end;
        self.boundary.initial_velocity = velocity;
        self.target = end;
        self.velocity = velocity;
        // the carried acceleration was computed against the old end value
        self.acceleration = self.config.acceleration(self.value, velocity, end);
    }

    fn integrate<O: SubstepObserver<F>>(&mut self, dt: F, observer: &mut O) -> F {
        let plan = SubstepPlan::new(dt, self.step_size);
        let end = self.target;
        let mut x = self.value;
        let mut v = self.velocity;
        let mut a = self.acceleration;

        for i in 0..plan.count {
            let h = plan.length(i);
            x = x + v * h + a * (h * h * F::half());
            let next_a = self.config.acceleration(x, v, end);
            v = v + (a + next_a) * (h * F::half());
            a = next_a;
            observer.on_substep(i, x, v);
        }

        self.value = x;
        self.velocity = v;
        self.acceleration = a;
        observer.on_evaluate_complete(x);
        x
    }

    fn target(&self) -> F { self.target }
    fn value(&self) -> F { self.value }
    fn velocity(&self) -> F { self.velocity }

    fn snap_to_target(&mut self) {
        let end = self.target;
        self.boundary.start_value = end;
        self.boundary.end_value = end;
        self.boundary.initial_velocity = F::zero();
        self.value = end;
        self.velocity = F::zero();
        self.acceleration = F::zero();
    }

    fn step_size(&self) -> Option<F> { Some(self.step_size) }

    fn set_step_size(&mut self, step_size: F) -> Result<(), OscillatorError> {
        self.step_size = check_step_size(step_size)?;
        tracing::debug!(%step_size, "velocity Verlet step size changed");
        Ok(())
    }
}
