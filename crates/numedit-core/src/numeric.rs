//! Numeric value abstraction shared by all numeric widgets.
//!
//! [`NumericValue`] is the small set of operations a bound value type must
//! provide: parsing edited text, canonical formatting, clamping, and the
//! scroll-wheel step size. It is implemented for the signed and unsigned
//! 8/16/32-bit integers and for `f32`/`f64`.
//!
//! All types fit losslessly in an `f64`, so conversions go through `f64`
//! and back with saturating, truncating casts.

use std::fmt;

use crate::error::{ParseError, Result};

/// A numeric type that can be bound to a numeric input field.
pub trait NumericValue:
    Copy + PartialOrd + fmt::Display + fmt::Debug + Default + Send + Sync + 'static
{
    /// Whether the type is an integer type.
    const IS_INTEGRAL: bool;

    /// The lowest representable value.
    const LOWEST: Self;

    /// The highest representable value.
    const HIGHEST: Self;

    /// Widen to `f64`.
    fn to_f64(self) -> f64;

    /// Narrow from `f64`, truncating toward zero for integers and saturating
    /// at the type bounds.
    fn from_f64(value: f64) -> Self;

    /// Parse edited text.
    ///
    /// Text is trimmed and parsed as a finite `f64`, then narrowed with
    /// [`from_f64`](Self::from_f64). For integer types this means `"5.9"`
    /// yields `5`.
    fn parse_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let parsed: f64 = trimmed.parse().map_err(|_| ParseError::Invalid {
            text: trimmed.to_string(),
        })?;
        if !parsed.is_finite() {
            return Err(ParseError::NonFinite {
                text: trimmed.to_string(),
            });
        }
        Ok(Self::from_f64(parsed))
    }

    /// Canonical display text for a value.
    fn format_value(self) -> String {
        self.to_string()
    }

    /// Clamp to `[min, max]`.
    fn clamp_to(self, min: Self, max: Self) -> Self {
        if self < min {
            min
        } else if self > max {
            max
        } else {
            self
        }
    }

    /// Step size for one scroll-wheel notch on a widget `width` pixels wide.
    ///
    /// The step is `(max - min) / (4 * width)`. Integer types floor it and
    /// never step by less than one; floating types use the raw quotient.
    fn scroll_step(min: Self, max: Self, width: f32) -> f64 {
        let width = f64::from(width.max(1.0));
        let step = (max.to_f64() - min.to_f64()) / (width * 4.0);
        if Self::IS_INTEGRAL {
            step.floor().max(1.0)
        } else {
            step
        }
    }

    /// Add `delta` and clamp the result to `[min, max]`.
    fn offset_by(self, delta: f64, min: Self, max: Self) -> Self {
        let shifted = (self.to_f64() + delta).max(min.to_f64()).min(max.to_f64());
        Self::from_f64(shifted).clamp_to(min, max)
    }
}

macro_rules! impl_integral {
    ($($ty:ty),*) => {
        $(
            impl NumericValue for $ty {
                const IS_INTEGRAL: bool = true;
                const LOWEST: Self = <$ty>::MIN;
                const HIGHEST: Self = <$ty>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

macro_rules! impl_floating {
    ($($ty:ty),*) => {
        $(
            impl NumericValue for $ty {
                const IS_INTEGRAL: bool = false;
                const LOWEST: Self = <$ty>::MIN;
                const HIGHEST: Self = <$ty>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_integral!(i8, u8, i16, u16, i32, u32);
impl_floating!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integers() {
        assert_eq!(i32::parse_text("42"), Ok(42));
        assert_eq!(i32::parse_text(" -7 "), Ok(-7));
        assert_eq!(i32::parse_text("5."), Ok(5));
        assert_eq!(i32::parse_text("5.9"), Ok(5));
        assert_eq!(u8::parse_text("300"), Ok(255));
        assert_eq!(u8::parse_text("-3"), Ok(0));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(f32::parse_text("0.5"), Ok(0.5));
        assert_eq!(f64::parse_text(".25"), Ok(0.25));
        assert_eq!(f64::parse_text("1e2"), Ok(100.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(f32::parse_text(""), Err(ParseError::Empty));
        assert_eq!(f32::parse_text("   "), Err(ParseError::Empty));
        assert!(matches!(
            f32::parse_text("."),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(
            i32::parse_text("1.2.3"),
            Err(ParseError::Invalid { .. })
        ));
        assert!(matches!(
            f64::parse_text("inf"),
            Err(ParseError::NonFinite { .. })
        ));
        assert!(matches!(
            f64::parse_text("NaN"),
            Err(ParseError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(50i32.format_value(), "50");
        assert_eq!(0.5f32.format_value(), "0.5");
        assert_eq!(0.0f32.format_value(), "0");
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(150i32.clamp_to(0, 100), 100);
        assert_eq!((-5i32).clamp_to(0, 100), 0);
        assert_eq!(0.25f32.clamp_to(-1.0, 1.0), 0.25);
    }

    #[test]
    fn test_scroll_step_integral_never_zero() {
        assert_eq!(i32::scroll_step(0, 10, 40.0), 1.0);
        assert_eq!(i32::scroll_step(0, 10_000, 50.0), 50.0);
        assert_eq!(i32::scroll_step(5, 5, 200.0), 1.0);
        // 1000 / 160 = 6.25 floors to 6
        assert_eq!(u16::scroll_step(0, 1000, 40.0), 6.0);
    }

    #[test]
    fn test_scroll_step_floating() {
        let step = f32::scroll_step(-1.0, 1.0, 200.0);
        assert!((step - 2.0 / 800.0).abs() < 1e-9);
        assert_eq!(f64::scroll_step(3.0, 3.0, 100.0), 0.0);
    }

    #[test]
    fn test_scroll_step_degenerate_width() {
        assert_eq!(f64::scroll_step(0.0, 8.0, 0.0), 2.0);
    }

    #[test]
    fn test_offset_by_clamps() {
        assert_eq!(9i32.offset_by(1.0, 0, 10), 10);
        assert_eq!(10i32.offset_by(1.0, 0, 10), 10);
        assert_eq!(0u8.offset_by(-1.0, 0, 255), 0);
        assert_eq!(0.9f64.offset_by(0.5, -1.0, 1.0), 1.0);
    }
}
