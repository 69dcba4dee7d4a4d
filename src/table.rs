//! Mapping generator outputs onto lookup tables.
//!
//! Generators produce unbounded numbers; musical parameters come from short
//! tables (scale degrees, velocities, rhythm cells). `pick` wraps an output
//! around a table so every finite value selects an entry.

/// Index into a table of length `len` for a generator output.
///
/// The value is floored, then wrapped with non-negative modulus, so `-1.0`
/// selects the last entry. Returns `None` for an empty table or a value
/// that is not finite.
pub fn index_for(len: usize, value: f64) -> Option<usize> {
    if len == 0 || !value.is_finite() {
        return None;
    }
    let index = (value.floor() as i128).rem_euclid(len as i128);
    Some(index as usize)
}

/// Entry of `table` selected by a generator output.
///
/// # Example
/// ```
/// use voss_noise::table::pick;
/// let scale = [60u8, 62, 64, 67, 69];
/// assert_eq!(pick(&scale, 3.0), Some(&67));
/// assert_eq!(pick(&scale, 7.0), Some(&64));
/// assert_eq!(pick(&scale, -1.0), Some(&69));
/// ```
pub fn pick<T>(table: &[T], value: f64) -> Option<&T> {
    index_for(table.len(), value).map(|i| &table[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_in_range() {
        let table = ["a", "b", "c"];
        assert_eq!(pick(&table, 0.0), Some(&"a"));
        assert_eq!(pick(&table, 2.0), Some(&"c"));
    }

    #[test]
    fn test_pick_wraps() {
        let table = [1, 2, 3];
        assert_eq!(pick(&table, 3.0), Some(&1));
        assert_eq!(pick(&table, 10.0), Some(&2));
        assert_eq!(pick(&table, -2.0), Some(&2));
    }

    #[test]
    fn test_pick_floors_fractions() {
        let table = [1, 2, 3];
        assert_eq!(pick(&table, 1.9), Some(&2));
        assert_eq!(pick(&table, -0.5), Some(&3));
    }

    #[test]
    fn test_pick_rejects_empty_and_non_finite() {
        let empty: [u8; 0] = [];
        assert_eq!(pick(&empty, 1.0), None);
        assert_eq!(pick(&[1, 2], f64::NAN), None);
        assert_eq!(pick(&[1, 2], f64::NEG_INFINITY), None);
    }

    #[test]
    fn test_index_for_huge_values() {
        assert!(index_for(5, 1e300).is_some());
        assert!(index_for(5, -1e300).is_some());
    }
}
