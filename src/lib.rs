//! Damped harmonic oscillators for animating scalar values.
//!
//! `oscillo` drives a value from a start toward an end value as a mass on a
//! damped spring, and lets the end value move mid-flight without a visible
//! jump.
//!
//! # Features
//!
//! - **Closed form**: exact analytic solution from elapsed time (no step limit)
//! - **Semi-implicit Euler**: fixed-step symplectic integration
//! - **Explicit RK4**: fixed-step fourth-order Runge-Kutta
//! - **Velocity Verlet**: fixed-step Verlet carrying acceleration across frames
//! - **One contract**: all four implement [`Oscillator`]; [`Solver`] selects one by [`SolverKind`]
//! - **Banks**: evaluate large homogeneous collections per frame without allocating
//! - **Observable**: inspect substeps via the [`SubstepObserver`] trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use oscillo::{Boundary, Oscillator, OscillatorConfig, Solver, SolverKind};
//!
//! let mut spring: Solver<f64> = Solver::new(
//!     SolverKind::VelocityVerlet,
//!     OscillatorConfig::new(),
//!     Boundary::new(10.0, 0.0),
//! );
//! for _ in 0..30 {
//!     spring.evaluate(1.0 / 60.0);
//! }
//! spring.retarget(5.0);
//! for _ in 0..120 {
//!     spring.evaluate(1.0 / 60.0);
//! }
//! assert!((spring.value() - 5.0).abs() < 0.01);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod error;
pub mod config;
pub mod observer;
pub mod substep;
pub mod oscillator;
pub mod closed_form;
pub mod semi_implicit_euler;
pub mod rk4;
pub mod verlet;
pub mod solver;
pub mod bank;

// Re-export primary API
pub use float::Float;
pub use error::OscillatorError;
pub use config::{Boundary, DampingMode, OscillatorConfig};
pub use observer::{NoOpSubstepObserver, SubstepObserver};
pub use substep::{SubstepPlan, MAX_SUBSTEPS};
pub use oscillator::Oscillator;
pub use closed_form::ClosedForm;
pub use semi_implicit_euler::SemiImplicitEuler;
pub use rk4::ExplicitRk4;
pub use verlet::VelocityVerlet;
pub use solver::{Solver, SolverKind};
pub use bank::OscillatorBank;
