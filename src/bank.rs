//! A homogeneous collection of independent oscillators stepped together.

use core::marker::PhantomData;

use crate::float::Float;
use crate::oscillator::Oscillator;
use alloc::vec::Vec as AllocVec;

/// Owns many oscillators of one type and evaluates them once per frame.
///
/// Stepping never allocates. Oscillators share nothing, so a host may split
/// [`OscillatorBank::as_mut_slice`] across threads.
pub struct OscillatorBank<F: Float, O: Oscillator<F>> {
    oscillators: AllocVec<O>,
    _scalar: PhantomData<F>,
}

impl<F: Float, O: Oscillator<F>> OscillatorBank<F, O> {
    pub fn new() -> Self {
        OscillatorBank {
            oscillators: AllocVec::new(),
            _scalar: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        OscillatorBank {
            oscillators: AllocVec::with_capacity(capacity),
            _scalar: PhantomData,
        }
    }

    /// Fill a bank with `count` oscillators built by `make(index)`.
    pub fn from_fn(count: usize, mut make: impl FnMut(usize) -> O) -> Self {
        let mut bank = Self::with_capacity(count);
        for i in 0..count {
            bank.oscillators.push(make(i));
        }
        bank
    }

    pub fn add(&mut self, oscillator: O) -> usize {
        let idx = self.oscillators.len();
        self.oscillators.push(oscillator);
        idx
    }

    /// Advance every oscillator by `dt`.
    pub fn step(&mut self, dt: F) {
        for o in self.oscillators.iter_mut() {
            o.evaluate(dt);
        }
    }

    /// Advance every oscillator by `dt` and write the new values into `out`.
    ///
    /// Only the first `min(len, out.len())` oscillators are stepped.
    pub fn evaluate_into(&mut self, dt: F, out: &mut [F]) {
        for (o, slot) in self.oscillators.iter_mut().zip(out.iter_mut()) {
            *slot = o.evaluate(dt);
        }
    }

    pub fn reset_all(&mut self) {
        for o in self.oscillators.iter_mut() {
            o.reset();
        }
    }

    pub fn retarget_all(&mut self, end: F) {
        for o in self.oscillators.iter_mut() {
            o.retarget(end);
        }
    }

    pub fn all_settled(&self, eps_pos: F, eps_vel: F) -> bool {
        self.oscillators.iter().all(|o| o.is_settled(eps_pos, eps_vel))
    }

    pub fn len(&self) -> usize { self.oscillators.len() }
    pub fn is_empty(&self) -> bool { self.oscillators.is_empty() }
    pub fn get(&self, index: usize) -> Option<&O> { self.oscillators.get(index) }
    pub fn get_mut(&mut self, index: usize) -> Option<&mut O> { self.oscillators.get_mut(index) }
    pub fn as_slice(&self) -> &[O] { &self.oscillators }
    pub fn as_mut_slice(&mut self) -> &mut [O] { &mut self.oscillators }

    pub fn remove(&mut self, index: usize) -> O {
        self.oscillators.swap_remove(index)
    }

    pub fn clear(&mut self) {
        self.oscillators.clear();
    }
}

impl<F: Float, O: Oscillator<F>> Default for OscillatorBank<F, O> {
    fn default() -> Self {
        Self::new()
    }
}
