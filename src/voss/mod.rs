//! Voss generator factory.

/*
Voss's Method
=============

Voss's method approximates 1/f ("pink") noise by adding together several
sources that are refreshed at octave-spaced rates. Source `k` is refreshed
whenever the step index `n` is divisible by `2^k`:

    step    0  1  2  3  4  5  6  7  8
    k = 0   *  *  *  *  *  *  *  *  *     every step
    k = 1   *     *     *     *     *     every 2nd step
    k = 2   *           *           *     every 4th step
    k = 3   *                       *     every 8th step

Slow sources contribute long-term drift, fast sources contribute detail.
With random sources the sum has roughly equal energy per octave, which is
what makes melodies driven by it sound "composed" rather than random.

Vocabulary
----------

  call       A callback `(n, k) -> value` invoked when slot `k` fires.
             Usually a dice roll, but any function works.

  slot       One entry of the stateful generator's internal array.
             Holds the value of the last time its call fired.

  summer     Reduction over the current values, `sum` by default.


Two Variants
------------

STATEFUL (`Voss`)
    Every slot keeps its last value. The summer always sees exactly
    `len(calls)` values. Results depend on the order steps arrive in,
    so drive it with consecutive steps starting at 0.

STATELESS (`VossStateless`)
    Only the calls that fire on this step contribute. The summer sees
    between 1 and `len(calls)` values, so the output magnitude varies
    with how many slots fired. This is the form given in Musimathics.


Negative Steps
--------------

"Divisible by 2^k" does not depend on the sign of `n`, so floored and
truncated modulus agree. Negative steps are accepted but carry no
musical meaning.
*/

mod error;
mod stateful;
mod stateless;
mod step;
pub mod summer;

pub use error::{ConfigurationError, InvalidInputError, VossError};
pub use stateful::{build_voss, Steps, Voss, VossBuilder};
pub use stateless::{build_voss_stateless, StatelessSteps, VossStateless, VossStatelessBuilder};
pub use step::IntoStep;

/// Callback for the stateful generator: `(n, k) -> value`.
///
/// `FnMut` so a callback can own and advance its own random source.
pub type Callback = Box<dyn FnMut(i64, u32) -> f64 + Send>;

/// Callback for the stateless generator: `(n, k) -> value`.
///
/// Stateless generators can be shared between threads, so their
/// callbacks must be `Fn + Sync`.
pub type SharedCallback = Box<dyn Fn(i64, u32) -> f64 + Send + Sync>;

/// Reduction over the values of one step.
pub type Summer = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Whether slot `k` fires on step `n`, i.e. `n mod 2^k == 0`.
///
/// # Example
/// ```
/// use voss_noise::voss::fires;
/// assert!(fires(6, 1));
/// assert!(!fires(6, 2));
/// assert!(fires(0, 40));
/// ```
#[inline]
pub fn fires(n: i64, k: u32) -> bool {
    n == 0 || n.trailing_zeros() >= k
}

/// Number of slots out of `len` that fire on step `n`.
#[inline]
pub fn fired_count(n: i64, len: usize) -> usize {
    if n == 0 {
        return len;
    }
    (n.trailing_zeros() as usize + 1).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_zero_always_fires() {
        for n in -20..20 {
            assert!(fires(n, 0), "slot 0 should fire on step {}", n);
        }
    }

    #[test]
    fn test_fires_matches_floored_modulus() {
        for n in -64i64..64 {
            for k in 0..7u32 {
                let expected = n.rem_euclid(1 << k) == 0;
                assert_eq!(fires(n, k), expected, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_large_slot_index_only_fires_on_zero() {
        assert!(fires(0, 64));
        assert!(fires(0, 1000));
        assert!(!fires(1 << 40, 64));
        assert!(fires(i64::MIN, 63));
        assert!(!fires(i64::MIN, 64));
    }

    #[test]
    fn test_fired_count() {
        assert_eq!(fired_count(0, 3), 3);
        assert_eq!(fired_count(1, 3), 1);
        assert_eq!(fired_count(2, 3), 2);
        assert_eq!(fired_count(4, 3), 3);
        assert_eq!(fired_count(12, 8), 3);
    }
}
