use thiserror::Error;
use tracing::debug;

// ─────────────────────────────────────────────────────────────────────────────
// IntervalPartitionError
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionCountError {
    #[error("number of sub-intervals must be positive, got {0}")]
    NonPositive(i64),

    #[error("number of sub-intervals must be even, got {0}")]
    Odd(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntervalPartitionError {
    #[error("lower limit must be less than upper limit (lower = {lower}, upper = {upper})")]
    InvalidBounds { lower: f64, upper: f64 },

    #[error(transparent)]
    InvalidPartitionCount(#[from] PartitionCountError),
}

// ─────────────────────────────────────────────────────────────────────────────
// IntervalPartition
// ─────────────────────────────────────────────────────────────────────────────

/// 積分區間 `[lower, upper]` 與等寬子區間數 `count`。
///
/// 建構時一次完成驗證，之後不可變：
///   - `lower < upper`
///   - `count > 0`
///   - `count` 為偶數
///
/// 驗證順序固定為先檢查上下限、再檢查子區間數，兩者皆不合法時回傳
/// `InvalidBounds`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalPartition {
    lower: f64,
    upper: f64,
    count: i64,
}

impl IntervalPartition {
    pub fn new(
        lower: f64,
        upper: f64,
        count: i64,
    ) -> Result<IntervalPartition, IntervalPartitionError> {
        // `!(lower < upper)` 同時擋下 NaN
        if !(lower < upper) {
            debug!(lower, upper, "rejected interval bounds");
            return Err(IntervalPartitionError::InvalidBounds { lower, upper });
        }

        if count <= 0 {
            debug!(count, "rejected non-positive partition count");
            return Err(PartitionCountError::NonPositive(count).into());
        }

        if count % 2 != 0 {
            debug!(count, "rejected odd partition count");
            return Err(PartitionCountError::Odd(count).into());
        }

        Ok(IntervalPartition { lower, upper, count })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// 步長 h = (upper - lower) / count
    #[inline]
    pub fn step_size(&self) -> f64 {
        (self.upper - self.lower) / self.count as f64
    }

    /// 第 i 個取樣點 x_i = lower + i·h，i 介於 0 與 count 之間。
    ///
    /// `i = count` 時回傳 `upper` 本身，而非 `lower + count·h`，
    /// 避免右端點因捨入誤差偏離上限。
    #[inline]
    pub fn sample_point(&self, i: i64) -> f64 {
        if i == self.count {
            self.upper
        } else {
            self.lower + i as f64 * self.step_size()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_partition() {
        let partition = IntervalPartition::new(0.0, 1.0, 4).unwrap();
        assert_eq!(partition.lower(), 0.0);
        assert_eq!(partition.upper(), 1.0);
        assert_eq!(partition.count(), 4);
        assert_eq!(partition.step_size(), 0.25);
        assert_eq!(partition.width(), 1.0);
    }

    #[test]
    fn test_sample_points() {
        let partition = IntervalPartition::new(1.0, 2.0, 4).unwrap();
        let points: Vec<f64> = (0..=partition.count())
            .map(|i| partition.sample_point(i))
            .collect();
        assert_eq!(points, vec![1.0, 1.25, 1.5, 1.75, 2.0]);
    }

    #[test]
    fn test_last_sample_point_is_upper_bound() {
        let partition = IntervalPartition::new(0.1, 0.7, 6).unwrap();
        assert_eq!(partition.sample_point(6), 0.7);
    }

    #[test]
    fn test_equal_bounds_rejected() {
        let result = IntervalPartition::new(2.0, 2.0, 4);
        assert_eq!(
            result,
            Err(IntervalPartitionError::InvalidBounds { lower: 2.0, upper: 2.0 })
        );
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let result = IntervalPartition::new(3.0, -1.0, 4);
        assert!(matches!(result, Err(IntervalPartitionError::InvalidBounds { .. })));
    }

    #[test]
    fn test_nan_bound_rejected() {
        let result = IntervalPartition::new(f64::NAN, 1.0, 4);
        assert!(matches!(result, Err(IntervalPartitionError::InvalidBounds { .. })));
        let result = IntervalPartition::new(0.0, f64::NAN, 4);
        assert!(matches!(result, Err(IntervalPartitionError::InvalidBounds { .. })));
    }

    #[test]
    fn test_zero_count_rejected() {
        let result = IntervalPartition::new(0.0, 1.0, 0);
        assert_eq!(
            result,
            Err(IntervalPartitionError::InvalidPartitionCount(PartitionCountError::NonPositive(0)))
        );
    }

    #[test]
    fn test_negative_count_rejected() {
        // -2 是偶數，但仍須以非正數拒絕
        let result = IntervalPartition::new(0.0, 1.0, -2);
        assert_eq!(
            result,
            Err(IntervalPartitionError::InvalidPartitionCount(PartitionCountError::NonPositive(-2)))
        );
    }

    #[test]
    fn test_odd_count_rejected() {
        let result = IntervalPartition::new(0.0, 1.0, 3);
        assert_eq!(
            result,
            Err(IntervalPartitionError::InvalidPartitionCount(PartitionCountError::Odd(3)))
        );
    }

    #[test]
    fn test_bounds_checked_before_count() {
        let result = IntervalPartition::new(1.0, 0.0, 3);
        assert!(matches!(result, Err(IntervalPartitionError::InvalidBounds { .. })));
        let result = IntervalPartition::new(1.0, 1.0, -1);
        assert!(matches!(result, Err(IntervalPartitionError::InvalidBounds { .. })));
    }

    #[test]
    fn test_error_messages() {
        let bounds = IntervalPartition::new(1.0, 0.0, 2).unwrap_err();
        assert_eq!(
            bounds.to_string(),
            "lower limit must be less than upper limit (lower = 1, upper = 0)"
        );
        let odd = IntervalPartition::new(0.0, 1.0, 5).unwrap_err();
        assert_eq!(odd.to_string(), "number of sub-intervals must be even, got 5");
        let zero = IntervalPartition::new(0.0, 1.0, 0).unwrap_err();
        assert_eq!(zero.to_string(), "number of sub-intervals must be positive, got 0");
    }
}
