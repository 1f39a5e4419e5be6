//! Time Quantization
//!
//! Converts authored durations in seconds into tick counts written as an
//! expression over the game's ticks-per-second constant, so the generated
//! table reads `TICKS_PER_SECOND / 2` instead of a bare `30`.

use crate::error::CompileError;

/// A production time as an expression over the ticks-per-second constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantizedTime {
    /// Exactly one second
    Base,
    /// `T / divisor`, for sub-second durations
    Divided(u32),
    /// `T * multiplier`, for durations longer than a second
    Multiplied(u32),
}

impl QuantizedTime {
    /// Pick the canonical form nearest to `seconds`.
    ///
    /// Returns `None` for durations that are not positive and finite. The
    /// result is not checked against the tick rate; see [`TimeQuantizer`].
    pub fn nearest(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return None;
        }

        // `as u32` saturates, which the reconstruction check then rejects
        let time = if seconds == 1.0 {
            QuantizedTime::Base
        } else if seconds < 1.0 {
            QuantizedTime::Divided((1.0 / seconds).round() as u32)
        } else {
            QuantizedTime::Multiplied(seconds.round() as u32)
        };

        Some(time)
    }

    /// Tick count using the same integer arithmetic the generated code uses.
    ///
    /// `None` when `T * multiplier` overflows `u32`.
    pub fn ticks(self, ticks_per_second: u32) -> Option<u32> {
        match self {
            QuantizedTime::Base => Some(ticks_per_second),
            QuantizedTime::Divided(divisor) => ticks_per_second.checked_div(divisor),
            QuantizedTime::Multiplied(multiplier) => ticks_per_second.checked_mul(multiplier),
        }
    }

    /// Rust expression over the named tick constant
    pub fn expr(self, constant: &str) -> String {
        match self {
            QuantizedTime::Base => constant.to_string(),
            QuantizedTime::Divided(divisor) => format!("{} / {}", constant, divisor),
            QuantizedTime::Multiplied(multiplier) => format!("{} * {}", constant, multiplier),
        }
    }
}

/// Quantizes durations and refuses any that would drift from the authored value
#[derive(Debug, Clone, Copy)]
pub struct TimeQuantizer {
    ticks_per_second: u32,
    tolerance: f64,
}

impl TimeQuantizer {
    pub fn new(ticks_per_second: u32, tolerance: f64) -> Self {
        Self {
            ticks_per_second,
            tolerance,
        }
    }

    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Quantize `seconds` for the recipe named `recipe`.
    ///
    /// The candidate tick count divided by the tick rate must land within the
    /// tolerance of the authored duration. Divisors that do not split the tick
    /// rate evenly, durations shorter than one tick and non-integral
    /// multi-second durations all fail here. On success the tick count that
    /// passed the check is returned alongside the form.
    pub fn quantize(
        &self,
        recipe: &str,
        seconds: f64,
    ) -> Result<(QuantizedTime, u32), CompileError> {
        let time = QuantizedTime::nearest(seconds).ok_or_else(|| CompileError::InvalidTime {
            recipe: recipe.to_string(),
            seconds,
        })?;

        let ticks = time.ticks(self.ticks_per_second);
        let reconstructed = ticks.map(|t| t as f64 / self.ticks_per_second as f64);

        match (ticks, reconstructed) {
            (Some(ticks), Some(actual))
                if ticks > 0 && (actual - seconds).abs() <= self.tolerance =>
            {
                Ok((time, ticks))
            }
            (ticks, _) => Err(CompileError::AmbiguousTimeQuantization {
                recipe: recipe.to_string(),
                seconds,
                ticks: ticks.unwrap_or(u32::MAX),
                ticks_per_second: self.ticks_per_second,
            }),
        }
    }
}
