//! Physical parameters and boundary values of an oscillator.

use crate::error::OscillatorError;
use crate::float::Float;

/// Half-width of the band around a damping ratio of one that is treated as
/// critically damped.
const CRITICAL_BAND: f32 = 1e-6;

/// Damping regime selected by the damping ratio `ζ = c / (2√(km))`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DampingMode<F: Float> {
    /// `ζ < 1`: oscillatory decay.
    Underdamped { ratio: F },
    /// `ζ = 1`: fastest decay without overshoot.
    CriticallyDamped,
    /// `ζ > 1`: slow decay without overshoot.
    Overdamped { ratio: F },
    /// `k = 0`: no restoring force, the value only coasts under damping.
    Undriven,
}

/// Damping, mass and stiffness of a damped harmonic oscillator.
///
/// Fields are only reachable through validating setters, so `mass > 0`,
/// `stiffness ≥ 0` and `damping ≥ 0` hold for every live config. Derived
/// quantities are recomputed on every call, so a write takes effect on the
/// next `evaluate`.
///
/// # Example
/// ```
/// use oscillo::config::OscillatorConfig;
///
/// let config: OscillatorConfig<f32> = OscillatorConfig::try_new(5.0, 1.0, 169.0).unwrap();
/// assert!(config.damping_ratio() < 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OscillatorConfig<F: Float> {
    damping: F,
    mass: F,
    stiffness: F,
}

impl<F: Float> OscillatorConfig<F> {
    /// Create a config with the critically damped defaults `c = 26, m = 1, k = 169`.
    pub fn new() -> Self {
        OscillatorConfig {
            damping: F::from_f32(26.0),
            mass: F::one(),
            stiffness: F::from_f32(169.0),
        }
    }

    /// Create a validated config.
    pub fn try_new(damping: F, mass: F, stiffness: F) -> Result<Self, OscillatorError> {
        let mut config = Self::new();
        config.set_mass(mass)?;
        config.set_stiffness(stiffness)?;
        config.set_damping(damping)?;
        Ok(config)
    }

    /// Create a config whose damping is exactly `2√(km)`.
    pub fn critically_damped(mass: F, stiffness: F) -> Result<Self, OscillatorError> {
        let damping = F::two() * (stiffness * mass).sqrt();
        Self::try_new(damping, mass, stiffness)
    }

    pub fn damping(&self) -> F { self.damping }
    pub fn mass(&self) -> F { self.mass }
    pub fn stiffness(&self) -> F { self.stiffness }

    pub fn set_damping(&mut self, damping: F) -> Result<(), OscillatorError> {
        if !(damping.is_finite() && damping >= F::zero()) {
            tracing::warn!(%damping, "rejected damping");
            return Err(OscillatorError::InvalidDamping);
        }
        self.damping = damping;
        Ok(())
    }

    pub fn set_mass(&mut self, mass: F) -> Result<(), OscillatorError> {
        if !(mass.is_finite() && mass > F::zero()) {
            tracing::warn!(%mass, "rejected mass");
            return Err(OscillatorError::InvalidMass);
        }
        self.mass = mass;
        Ok(())
    }

    pub fn set_stiffness(&mut self, stiffness: F) -> Result<(), OscillatorError> {
        if !(stiffness.is_finite() && stiffness >= F::zero()) {
            tracing::warn!(%stiffness, "rejected stiffness");
            return Err(OscillatorError::InvalidStiffness);
        }
        self.stiffness = stiffness;
        Ok(())
    }

    /// Set damping, mass and stiffness together. Nothing is written unless all
    /// three are valid.
    pub fn set_all(&mut self, damping: F, mass: F, stiffness: F) -> Result<(), OscillatorError> {
        *self = Self::try_new(damping, mass, stiffness)?;
        Ok(())
    }

    /// Undamped angular frequency `ω0 = √(k/m)` in rad/s.
    pub fn natural_frequency(&self) -> F {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ = c / (2√(km))`. Infinite or NaN when stiffness is zero.
    pub fn damping_ratio(&self) -> F {
        self.damping / (F::two() * (self.stiffness * self.mass).sqrt())
    }

    pub fn damping_mode(&self) -> DampingMode<F> {
        if self.stiffness <= F::zero() {
            return DampingMode::Undriven;
        }
        let ratio = self.damping_ratio();
        let band = F::from_f32(CRITICAL_BAND);
        if ratio < F::one() - band {
            DampingMode::Underdamped { ratio }
        } else if ratio > F::one() + band {
            DampingMode::Overdamped { ratio }
        } else {
            DampingMode::CriticallyDamped
        }
    }

    /// Acceleration `(-k·(x - end) - c·v) / m` at position `x` and velocity `v`.
    #[inline]
    pub fn acceleration(&self, x: F, v: F, end: F) -> F {
        (-self.stiffness * (x - end) - self.damping * v) / self.mass
    }
}

impl<F: Float> Default for OscillatorConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Boundary conditions of the current motion segment.
///
/// Solvers read these only at `reset`. `retarget` rewrites them to describe
/// the segment that starts at the retarget point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Boundary<F: Float> {
    pub start_value: F,
    pub end_value: F,
    pub initial_velocity: F,
}

impl<F: Float> Boundary<F> {
    pub fn new(start_value: F, end_value: F) -> Self {
        Boundary {
            start_value,
            end_value,
            initial_velocity: F::zero(),
        }
    }

    pub fn with_initial_velocity(mut self, velocity: F) -> Self {
        self.initial_velocity = velocity;
        self
    }
}
