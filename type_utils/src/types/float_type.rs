// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::numeric_surface::impl_numeric_surface;
use crate::if_else;

/// Helpers for floats, all working on [`f64`]. Use the [`FT`] instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatType;

pub const FT: FloatType = FloatType;

#[allow(clippy::unused_self)]
impl FloatType {
    #[must_use]
    pub fn if_else(self, condition: bool, true_value: f64, false_value: f64) -> f64 {
        if_else(condition, true_value, false_value)
    }

    /// Shortest string that parses back to the same value, never in exponent form
    /// (eg: `1.234`, `100`, `0.0001`). The non-finite values are spelled `+Inf`, `-Inf`
    /// and `NaN`, not the `inf` / `NaN` of [`f64`]'s [`Display`].
    ///
    /// [`Display`]: std::fmt::Display
    #[must_use]
    pub fn str(self, value: f64) -> String {
        if value.is_nan() {
            "NaN".to_string()
        } else if value.is_infinite() {
            if_else(value.is_sign_positive(), "+Inf", "-Inf").to_string()
        } else {
            value.to_string()
        }
    }

    #[must_use]
    pub fn abs(self, value: f64) -> f64 { value.abs() }

    #[must_use]
    pub fn ceil(self, value: f64) -> f64 { value.ceil() }

    #[must_use]
    pub fn floor(self, value: f64) -> f64 { value.floor() }

    /// Round half away from zero to `places` decimal places.
    #[must_use]
    pub fn round(self, value: f64, places: i32) -> f64 {
        let precision = 10_f64.powi(places);
        (value * precision).round() / precision
    }
}

impl_numeric_surface!(FloatType, f64);
