use thiserror::Error;
use tracing::{debug, trace};

use super::intervalpartition::{IntervalPartition, IntervalPartitionError};
use super::quadratureengine::QuadratureEngine;

// ─────────────────────────────────────────────────────────────────────────────
// CalculationError
// ─────────────────────────────────────────────────────────────────────────────

/// `try_calculate` 的錯誤：區間驗證失敗，
/// 或被積函數本身回傳的錯誤（原樣保留）。
#[derive(Debug, Error)]
pub enum CalculationError<E> {
    #[error(transparent)]
    Partition(#[from] IntervalPartitionError),

    #[error("function evaluation failed: {0}")]
    Evaluation(E),
}

// ─────────────────────────────────────────────────────────────────────────────
// IntegrationCalculator
// ─────────────────────────────────────────────────────────────────────────────

/// 由原始參數建立 `IntervalPartition`，再交給持有的積分法計算。
///
/// 積分法在建構時決定，之後不可更換；要換演算法就建立新的 calculator。
/// 驗證失敗時不會對被積函數求值。
#[derive(Debug, Clone, Default)]
pub struct IntegrationCalculator<Q: QuadratureEngine> {
    engine: Q,
}

impl<Q: QuadratureEngine> IntegrationCalculator<Q> {
    pub fn new(engine: Q) -> IntegrationCalculator<Q> {
        IntegrationCalculator { engine }
    }

    pub fn engine(&self) -> &Q {
        &self.engine
    }

    pub fn calculate<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        count: i64,
    ) -> Result<f64, IntervalPartitionError>
    where
        F: FnMut(f64) -> f64,
    {
        let partition = IntervalPartition::new(lower, upper, count)?;
        debug!(rule = self.engine.name(), lower, upper, count, "integrating");
        let value = self.engine.integrate(f, &partition);
        trace!(value, "integration finished");
        Ok(value)
    }

    pub fn try_calculate<F, E>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        count: i64,
    ) -> Result<f64, CalculationError<E>>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let partition = IntervalPartition::new(lower, upper, count)?;
        debug!(rule = self.engine.name(), lower, upper, count, "integrating");
        let value = self.engine
            .try_integrate(f, &partition)
            .map_err(CalculationError::Evaluation)?;
        trace!(value, "integration finished");
        Ok(value)
    }
}
