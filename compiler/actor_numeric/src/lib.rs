//! Arbitrary-precision numeric engine for the Actor language.
//!
//! Every number in the language is a [`Decimal`]: a signed decimal of
//! unbounded size. Addition, subtraction, multiplication and integer powers
//! are exact. Everything that can produce a non-terminating expansion
//! (division, fractional powers, roots, trigonometry) is rounded to
//! [`DIVISION_SCALE`] fractional digits with round-half-up.
//!
//! # Precision
//!
//! Transcendental functions are evaluated in fixed point with
//! [`WORKING_SCALE`] digits and rounded once at the end, so results are
//! correct to the last reported digit for arguments of ordinary magnitude.

mod decimal;
mod error;
mod fixed;

pub use decimal::Decimal;
pub use error::NumericError;

/// Fractional digits kept by division and every inexact operation.
pub const DIVISION_SCALE: u32 = 50;

/// Fractional digits carried internally by the transcendental kernels.
pub const WORKING_SCALE: u32 = 70;
