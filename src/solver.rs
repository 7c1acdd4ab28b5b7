//! Solver selection by tag instead of by concrete type.

use core::fmt;

use crate::closed_form::ClosedForm;
use crate::config::{Boundary, OscillatorConfig};
use crate::error::OscillatorError;
use crate::float::Float;
use crate::observer::SubstepObserver;
use crate::oscillator::Oscillator;
use crate::rk4::ExplicitRk4;
use crate::semi_implicit_euler::SemiImplicitEuler;
use crate::verlet::VelocityVerlet;

/// The available integration strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SolverKind {
    ClosedForm,
    SemiImplicitEuler,
    ExplicitRk4,
    VelocityVerlet,
}

impl SolverKind {
    pub const ALL: [SolverKind; 4] = [
        SolverKind::ClosedForm,
        SolverKind::SemiImplicitEuler,
        SolverKind::ExplicitRk4,
        SolverKind::VelocityVerlet,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::ClosedForm => "closed-form",
            SolverKind::SemiImplicitEuler => "semi-implicit-euler",
            SolverKind::ExplicitRk4 => "explicit-rk4",
            SolverKind::VelocityVerlet => "velocity-verlet",
        }
    }

    /// True for solvers that subdivide a frame into fixed-length substeps.
    pub fn is_fixed_step(self) -> bool {
        !matches!(self, SolverKind::ClosedForm)
    }

    /// Step size a freshly built solver of this kind uses, in seconds.
    pub fn default_step_size(self) -> Option<f32> {
        match self {
            SolverKind::ClosedForm => None,
            SolverKind::SemiImplicitEuler => Some(SemiImplicitEuler::<f32>::DEFAULT_STEP_SIZE),
            SolverKind::ExplicitRk4 => Some(ExplicitRk4::<f32>::DEFAULT_STEP_SIZE),
            SolverKind::VelocityVerlet => Some(VelocityVerlet::<f32>::DEFAULT_STEP_SIZE),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any of the four solvers behind one statically dispatched type.
#[derive(Clone, Debug)]
pub enum Solver<F: Float> {
    ClosedForm(ClosedForm<F>),
    SemiImplicitEuler(SemiImplicitEuler<F>),
    ExplicitRk4(ExplicitRk4<F>),
    VelocityVerlet(VelocityVerlet<F>),
}

/// Forward a method call to whichever solver the enum holds.
macro_rules! dispatch {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Solver::ClosedForm($s) => $body,
            Solver::SemiImplicitEuler($s) => $body,
            Solver::ExplicitRk4($s) => $body,
            Solver::VelocityVerlet($s) => $body,
        }
    };
}

impl<F: Float> Solver<F> {
    pub fn new(kind: SolverKind, config: OscillatorConfig<F>, boundary: Boundary<F>) -> Self {
        tracing::debug!(solver = kind.name(), "building oscillator");
        match kind {
            SolverKind::ClosedForm => Solver::ClosedForm(ClosedForm::new(config, boundary)),
            SolverKind::SemiImplicitEuler => {
                Solver::SemiImplicitEuler(SemiImplicitEuler::new(config, boundary))
            }
            SolverKind::ExplicitRk4 => Solver::ExplicitRk4(ExplicitRk4::new(config, boundary)),
            SolverKind::VelocityVerlet => {
                Solver::VelocityVerlet(VelocityVerlet::new(config, boundary))
            }
        }
    }

    pub fn kind(&self) -> SolverKind {
        match self {
            Solver::ClosedForm(_) => SolverKind::ClosedForm,
            Solver::SemiImplicitEuler(_) => SolverKind::SemiImplicitEuler,
            Solver::ExplicitRk4(_) => SolverKind::ExplicitRk4,
            Solver::VelocityVerlet(_) => SolverKind::VelocityVerlet,
        }
    }

    /// Rebuild as another solver kind, keeping config and boundary and
    /// restarting from the boundary's start value.
    pub fn switch_to(&mut self, kind: SolverKind) {
        if self.kind() != kind {
            *self = Solver::new(kind, *self.config(), *self.boundary());
        }
    }
}

impl<F: Float> Oscillator<F> for Solver<F> {
    fn config(&self) -> &OscillatorConfig<F> { dispatch!(self, s => s.config()) }
    fn config_mut(&mut self) -> &mut OscillatorConfig<F> { dispatch!(self, s => s.config_mut()) }
    fn boundary(&self) -> &Boundary<F> { dispatch!(self, s => s.boundary()) }
    fn boundary_mut(&mut self) -> &mut Boundary<F> { dispatch!(self, s => s.boundary_mut()) }

    fn reset(&mut self) {
        tracing::trace!(solver = self.kind().name(), "reset");
        dispatch!(self, s => s.reset())
    }

    fn retarget_with_velocity(&mut self, end: F, velocity: F) {
        dispatch!(self, s => s.retarget_with_velocity(end, velocity))
    }

    #[inline]
    fn integrate<O: SubstepObserver<F>>(&mut self, dt: F, observer: &mut O) -> F {
        dispatch!(self, s => s.integrate(dt, observer))
    }

    fn target(&self) -> F { dispatch!(self, s => s.target()) }
    fn value(&self) -> F { dispatch!(self, s => s.value()) }
    fn velocity(&self) -> F { dispatch!(self, s => s.velocity()) }
    fn snap_to_target(&mut self) { dispatch!(self, s => s.snap_to_target()) }
    fn step_size(&self) -> Option<F> { dispatch!(self, s => s.step_size()) }

    fn set_step_size(&mut self, step_size: F) -> Result<(), OscillatorError> {
        dispatch!(self, s => s.set_step_size(step_size))
    }
}

impl<F: Float> From<ClosedForm<F>> for Solver<F> {
    fn from(s: ClosedForm<F>) -> Self { Solver::ClosedForm(s) }
}

impl<F: Float> From<SemiImplicitEuler<F>> for Solver<F> {
    fn from(s: SemiImplicitEuler<F>) -> Self { Solver::SemiImplicitEuler(s) }
}

impl<F: Float> From<ExplicitRk4<F>> for Solver<F> {
    fn from(s: ExplicitRk4<F>) -> Self { Solver::ExplicitRk4(s) }
}

impl<F: Float> From<VelocityVerlet<F>> for Solver<F> {
    fn from(s: VelocityVerlet<F>) -> Self { Solver::VelocityVerlet(s) }
}
