// ABOUTME: Display rounding policy for nutrient values shown to the user
// ABOUTME: Ceiling below 1 so trace amounts never print as zero, nearest above 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrio Project

//! Nutrient display formatting
//!
//! The rounding policy is asymmetric on purpose: values with magnitude below
//! one are rounded **up** at the tenths digit so a small nonzero amount
//! (0.04 g of sodium) never displays as `0.0`, while values at or above one
//! use ordinary nearest rounding. The boundary value 1.0 takes the nearest
//! branch.

/// Format a nutrient value for display with one decimal place.
///
/// Non-finite input formats as `"0"`.
///
/// ```
/// use nutrio_core::formatters::format_nutrient;
///
/// assert_eq!(format_nutrient(0.04), "0.1");
/// assert_eq!(format_nutrient(0.96), "1.0");
/// assert_eq!(format_nutrient(1.04), "1.0");
/// assert_eq!(format_nutrient(f64::NAN), "0");
/// ```
#[must_use]
pub fn format_nutrient(value: f64) -> String {
    format_number(value, 1)
}

/// Format a numeric value with a configurable number of decimals.
///
/// Magnitudes below one always use the tenths-digit ceiling rule regardless
/// of `decimals`; magnitudes at or above one round to nearest at the
/// requested precision.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }

    if value.abs() < 1.0 {
        // +0.0 normalizes the negative zero that ceiling produces for
        // small negative inputs.
        let rounded = (value * 10.0).ceil() / 10.0 + 0.0;
        return format!("{rounded:.decimals$}");
    }

    let scale = 10_f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}
