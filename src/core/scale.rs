use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick values of one axis. Axes rarely carry more than a dozen ticks.
pub type TickValues = SmallVec<[f64; 16]>;

/// Continuous linear mapping from a data domain to a pixel range.
///
/// The range may be reversed (`range_start > range_end`), which is how the
/// vertical axis grows upward on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    /// Creates a scale over `domain` with the unit range `[0, 1]`.
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Replaces the pixel range.
    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() || range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must be finite and non-zero".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Step between ticks for roughly `count` ticks, snapped to 1, 2 or 5
    /// times a power of ten.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let (lower, upper) = self.ordered_domain();
        nice_step(lower, upper, count.max(1))
    }

    /// Round tick values covering the domain, in ascending order.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        let (lower, upper) = self.ordered_domain();
        let count = count.max(1);
        let step = nice_step(lower, upper, count);
        let mut ticks = TickValues::new();
        if !step.is_finite() || step <= 0.0 {
            return ticks;
        }

        let power = step.log10().floor();
        if power >= 0.0 {
            let first = (lower / step).ceil() as i64;
            let last = (upper / step).floor() as i64;
            for i in first..=last {
                ticks.push(i as f64 * step);
            }
        } else {
            // Dividing by the inverse step keeps decimal ticks free of
            // accumulated binary rounding (0.30000000000000004).
            let inverse = 1.0 / step;
            let inverse = inverse.round();
            let first = (lower * inverse).ceil() as i64;
            let last = (upper * inverse).floor() as i64;
            for i in first..=last {
                ticks.push(i as f64 / inverse);
            }
        }
        ticks
    }

    /// Tick values paired with their pixel offsets.
    pub fn tick_positions(self, count: usize) -> ChartResult<Vec<(f64, f64)>> {
        self.ticks(count)
            .into_iter()
            .map(|value| Ok((value, self.domain_to_pixel(value)?)))
            .collect()
    }

    fn ordered_domain(self) -> (f64, f64) {
        if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        }
    }
}

fn nice_step(lower: f64, upper: f64, count: usize) -> f64 {
    let raw = (upper - lower) / count as f64;
    if !raw.is_finite() || raw <= 0.0 {
        return 0.0;
    }
    let power = raw.log10().floor();
    let magnitude = 10f64.powf(power);
    let error = raw / magnitude;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

/// Formats a tick value with just enough decimals for `step` and comma
/// thousands grouping, e.g. `45,000` or `12.5`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let value = if value == 0.0 { 0.0 } else { value };
    let raw = format!("{value:.decimals$}");
    group_thousands(&raw)
}

fn group_thousands(raw: &str) -> String {
    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_sign_and_fraction() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("-45000.5"), "-45,000.5");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn negative_zero_formats_without_sign() {
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }
}
