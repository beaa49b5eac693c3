//! Draw ranges, requests, and results

use serde::{Deserialize, Serialize};

use crate::error::DrawError;

/// Inclusive integer range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub min: i32,
    pub max: i32,
}

impl Range {
    /// Create a range, rejecting `min > max`
    pub fn new(min: i32, max: i32) -> Result<Self, DrawError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    /// Check the `min <= max` contract (ranges can also arrive via serde)
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.min > self.max {
            return Err(DrawError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of integers in the range (0 for an invalid range)
    pub fn domain_size(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        (i64::from(self.max) - i64::from(self.min) + 1) as u64
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One zone of a draw: a range plus how many numbers to pick from it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub range: Range,
    pub count: usize,
}

impl DrawRequest {
    pub fn new(min: i32, max: i32, count: usize) -> Result<Self, DrawError> {
        Ok(Self {
            range: Range::new(min, max)?,
            count,
        })
    }

    /// Count after clamping to the domain size
    pub fn effective_count(&self) -> usize {
        clamp_count(self.range, self.count)
    }

    /// Whether a unique draw would be narrowed to fewer numbers than requested
    pub fn is_clamped(&self) -> bool {
        (self.count as u64) > self.range.domain_size()
    }
}

/// Clamp a unique-draw count to what the range can supply
pub(crate) fn clamp_count(range: Range, count: usize) -> usize {
    let domain = range.domain_size();
    if (count as u64) > domain {
        // domain < count <= usize::MAX here, so the cast is lossless
        domain as usize
    } else {
        count
    }
}

/// Numbers produced by one draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Distinct values, ascending
    pub primary: Vec<i32>,
    /// Bonus zone in draw order (may repeat)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Vec<i32>>,
}
