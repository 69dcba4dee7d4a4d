use super::error::InvalidInputError;

/// Conversion of a candidate value into a step index.
///
/// Integers convert directly, floats must be finite whole numbers, and text
/// must parse as an integer. Generators validate through this trait before
/// touching any call or slot, so a rejected step has no side effects.
pub trait IntoStep {
    fn into_step(self) -> Result<i64, InvalidInputError>;
}

macro_rules! lossless_step {
    ($($ty:ty),*) => {
        $(
            impl IntoStep for $ty {
                #[inline]
                fn into_step(self) -> Result<i64, InvalidInputError> {
                    Ok(i64::from(self))
                }
            }
        )*
    };
}

macro_rules! checked_step {
    ($($ty:ty),*) => {
        $(
            impl IntoStep for $ty {
                #[inline]
                fn into_step(self) -> Result<i64, InvalidInputError> {
                    i64::try_from(self).map_err(|_| InvalidInputError::OutOfRange(self.to_string()))
                }
            }
        )*
    };
}

lossless_step!(i8, i16, i32, i64, u8, u16, u32);
checked_step!(u64, usize, isize, i128, u128);

impl IntoStep for f64 {
    fn into_step(self) -> Result<i64, InvalidInputError> {
        if !self.is_finite() {
            return Err(InvalidInputError::NotFinite(self));
        }
        if self.fract() != 0.0 {
            return Err(InvalidInputError::NotIntegral(self));
        }
        // 2^63 is exactly representable; anything at or above it overflows
        if self < -9_223_372_036_854_775_808.0 || self >= 9_223_372_036_854_775_808.0 {
            return Err(InvalidInputError::OutOfRange(self.to_string()));
        }
        Ok(self as i64)
    }
}

impl IntoStep for f32 {
    #[inline]
    fn into_step(self) -> Result<i64, InvalidInputError> {
        f64::from(self).into_step()
    }
}

impl IntoStep for &str {
    fn into_step(self) -> Result<i64, InvalidInputError> {
        self.trim()
            .parse::<i64>()
            .map_err(|_| InvalidInputError::NotANumber(self.to_string()))
    }
}

impl IntoStep for String {
    #[inline]
    fn into_step(self) -> Result<i64, InvalidInputError> {
        self.as_str().into_step()
    }
}

impl IntoStep for &String {
    #[inline]
    fn into_step(self) -> Result<i64, InvalidInputError> {
        self.as_str().into_step()
    }
}

impl<T: IntoStep> IntoStep for Option<T> {
    #[inline]
    fn into_step(self) -> Result<i64, InvalidInputError> {
        self.ok_or(InvalidInputError::Missing)?.into_step()
    }
}
