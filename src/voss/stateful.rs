use std::fmt;

use super::error::{ConfigurationError, InvalidInputError};
use super::step::IntoStep;
use super::summer::default_summer;
use super::{fired_count, fires, Callback, Summer};

/// Stateful Voss generator.
///
/// Owns one slot per call. On each step the calls whose period divides the
/// step overwrite their slot; the other slots keep their last value (0.0
/// until first fired). The summer always sees every slot, in call order.
///
/// Slot state is private and persists for the life of the generator. There
/// is no reset: build a new generator to start over.
///
/// Not synchronized. `Voss` is `Send`, so it can be moved to the thread that
/// drives it, but calls take `&mut self` and must not be shared.
pub struct Voss {
    calls: Vec<Callback>,
    summer: Summer,
    state: Vec<f64>,
}

impl Voss {
    /// Start building a stateful generator
    pub fn builder() -> VossBuilder {
        VossBuilder::new()
    }

    /// Number of calls (and slots)
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Always false: construction rejects an empty call list
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Validate `n` and advance the generator to that step.
    ///
    /// Invalid input is rejected before any call fires or any slot changes.
    pub fn generate<N: IntoStep>(&mut self, n: N) -> Result<f64, InvalidInputError> {
        let n = n.into_step()?;
        Ok(self.step(n))
    }

    /// Advance the generator to step `n`.
    ///
    /// Intended to be driven with consecutive steps starting at 0. Repeating
    /// or skipping steps is allowed but changes which values are held.
    pub fn step(&mut self, n: i64) -> f64 {
        for (k, (call, slot)) in self.calls.iter_mut().zip(self.state.iter_mut()).enumerate() {
            let k = k as u32;
            if fires(n, k) {
                *slot = call(n, k);
            }
        }

        let output = (self.summer)(&self.state);
        tracing::trace!(n, fired = fired_count(n, self.state.len()), output, "voss step");
        output
    }

    /// Drive the generator with consecutive steps `0, 1, 2, ...`
    pub fn steps(&mut self) -> Steps<'_> {
        Steps {
            voss: self,
            next: Some(0),
        }
    }
}

impl fmt::Debug for Voss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Voss")
            .field("calls", &self.calls.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over a stateful generator's outputs for steps `0, 1, 2, ...`
pub struct Steps<'a> {
    voss: &'a mut Voss,
    next: Option<i64>,
}

impl Iterator for Steps<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let n = self.next?;
        self.next = n.checked_add(1);
        Some(self.voss.step(n))
    }
}

/// Builder for a stateful generator with a fluent API
pub struct VossBuilder {
    calls: Vec<Callback>,
    summer: Option<Summer>,
}

impl VossBuilder {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            summer: None,
        }
    }

    /// Append a call. The k-th call added fires every `2^k` steps.
    pub fn call<F>(mut self, call: F) -> Self
    where
        F: FnMut(i64, u32) -> f64 + Send + 'static,
    {
        self.calls.push(Box::new(call));
        self
    }

    /// Append several boxed calls
    pub fn calls(mut self, calls: impl IntoIterator<Item = Callback>) -> Self {
        self.calls.extend(calls);
        self
    }

    /// Replace the default summer (`sum`)
    pub fn summer<F>(mut self, summer: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.summer = Some(Box::new(summer));
        self
    }

    /// Build the generator
    /// Returns Result to reject an empty call list
    pub fn build(self) -> Result<Voss, ConfigurationError> {
        build_voss(self.calls, self.summer)
    }
}

impl Default for VossBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a stateful generator from `calls` and an optional summer.
///
/// Without a summer the output is the sum of all slots.
///
/// # Example
/// ```
/// use voss_noise::voss::{build_voss, Callback};
///
/// let calls: Vec<Callback> = vec![
///     Box::new(|_: i64, _: u32| 1.0) as Callback,
///     Box::new(|n: i64, _: u32| n as f64),
/// ];
/// let mut voss = build_voss(calls, None).unwrap();
/// assert_eq!(voss.generate(0).unwrap(), 1.0);
/// assert_eq!(voss.generate(1).unwrap(), 1.0); // slot 1 still holds 0.0
/// assert_eq!(voss.generate(2).unwrap(), 3.0);
/// ```
pub fn build_voss(
    calls: impl IntoIterator<Item = Callback>,
    summer: Option<Summer>,
) -> Result<Voss, ConfigurationError> {
    let calls: Vec<Callback> = calls.into_iter().collect();
    if calls.is_empty() {
        return Err(ConfigurationError::EmptyCalls);
    }

    tracing::debug!(calls = calls.len(), custom_summer = summer.is_some(), "built stateful voss generator");

    let state = vec![0.0; calls.len()];
    Ok(Voss {
        calls,
        summer: summer.unwrap_or_else(default_summer),
        state,
    })
}
