use std::fmt;

use super::error::{ConfigurationError, InvalidInputError};
use super::step::IntoStep;
use super::summer::default_summer;
use super::{fired_count, fires, SharedCallback, Summer};

/// Stateless Voss generator.
///
/// Each step collects only the outputs of the calls that fire, in call
/// order, and reduces them. Nothing carries over between steps, so the
/// summer sees between 1 and `len()` values.
///
/// `VossStateless` is `Send + Sync`; concurrent steps are independent as
/// long as the calls themselves are.
pub struct VossStateless {
    calls: Vec<SharedCallback>,
    summer: Summer,
}

impl VossStateless {
    /// Start building a stateless generator
    pub fn builder() -> VossStatelessBuilder {
        VossStatelessBuilder::new()
    }

    /// Number of calls
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Always false: construction rejects an empty call list
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Validate `n` and compute the output for that step
    pub fn generate<N: IntoStep>(&self, n: N) -> Result<f64, InvalidInputError> {
        let n = n.into_step()?;
        Ok(self.step(n))
    }

    /// Compute the output for step `n`
    pub fn step(&self, n: i64) -> f64 {
        let mut values = Vec::with_capacity(fired_count(n, self.calls.len()));
        for (k, call) in self.calls.iter().enumerate() {
            let k = k as u32;
            if fires(n, k) {
                values.push(call(n, k));
            }
        }

        let output = (self.summer)(&values);
        tracing::trace!(n, fired = values.len(), output, "voss stateless step");
        output
    }

    /// Outputs for consecutive steps `0, 1, 2, ...`
    pub fn steps(&self) -> StatelessSteps<'_> {
        StatelessSteps {
            voss: self,
            next: Some(0),
        }
    }
}

impl fmt::Debug for VossStateless {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VossStateless")
            .field("calls", &self.calls.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over a stateless generator's outputs for steps `0, 1, 2, ...`
pub struct StatelessSteps<'a> {
    voss: &'a VossStateless,
    next: Option<i64>,
}

impl Iterator for StatelessSteps<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let n = self.next?;
        self.next = n.checked_add(1);
        Some(self.voss.step(n))
    }
}

/// Builder for a stateless generator with a fluent API
pub struct VossStatelessBuilder {
    calls: Vec<SharedCallback>,
    summer: Option<Summer>,
}

impl VossStatelessBuilder {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            summer: None,
        }
    }

    /// Append a call. The k-th call added fires every `2^k` steps.
    pub fn call<F>(mut self, call: F) -> Self
    where
        F: Fn(i64, u32) -> f64 + Send + Sync + 'static,
    {
        self.calls.push(Box::new(call));
        self
    }

    /// Append several boxed calls
    pub fn calls(mut self, calls: impl IntoIterator<Item = SharedCallback>) -> Self {
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
    pub fn build(self) -> Result<VossStateless, ConfigurationError> {
        build_voss_stateless(self.calls, self.summer)
    }
}

impl Default for VossStatelessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a stateless generator from `calls` and an optional summer.
///
/// # Example
/// ```
/// use voss_noise::voss::{build_voss_stateless, SharedCallback};
///
/// let calls: Vec<SharedCallback> = vec![
///     Box::new(|_: i64, _: u32| 1.0) as SharedCallback,
///     Box::new(|_: i64, _: u32| 10.0),
///     Box::new(|_: i64, _: u32| 100.0),
/// ];
/// let voss = build_voss_stateless(calls, None).unwrap();
/// let outputs: Vec<f64> = voss.steps().take(5).collect();
/// assert_eq!(outputs, vec![111.0, 1.0, 11.0, 1.0, 111.0]);
/// ```
pub fn build_voss_stateless(
    calls: impl IntoIterator<Item = SharedCallback>,
    summer: Option<Summer>,
) -> Result<VossStateless, ConfigurationError> {
    let calls: Vec<SharedCallback> = calls.into_iter().collect();
    if calls.is_empty() {
        return Err(ConfigurationError::EmptyCalls);
    }

    tracing::debug!(calls = calls.len(), custom_summer = summer.is_some(), "built stateless voss generator");

    Ok(VossStateless {
        calls,
        summer: summer.unwrap_or_else(default_summer),
    })
}
