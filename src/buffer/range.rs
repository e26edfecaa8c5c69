//! Finite value range of a sample sequence

/// Minimum and maximum of the finite samples in a buffer
///
/// A scan that saw no finite value yields `min = +inf`, `max = -inf`.
/// That pair is not a usable bound; check [`SampleRange::is_empty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl SampleRange {
    /// The identity of the min/max reduction
    pub const EMPTY: SampleRange = SampleRange {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    /// True when no finite sample contributed to the range
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Distance between max and min, zero for an empty range
    pub fn span(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.max - self.min
        }
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        SampleRange::EMPTY
    }
}

/// Scan `samples` for the minimum and maximum finite value
///
/// NaN and infinite samples are skipped.
pub fn minmax(samples: &[f32]) -> SampleRange {
    samples
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(SampleRange::EMPTY, |acc, v| SampleRange {
            min: acc.min.min(v),
            max: acc.max.max(v),
        })
}
