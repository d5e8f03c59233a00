use super::intervalpartition::IntervalPartition;
use super::quadratureengine::QuadratureEngine;

/// Composite trapezoid rule:
///
///   ∫_a^b f(x) dx ≈ h · [ f(x_0)/2 + f(x_1) + ... + f(x_{n-1}) + f(x_n)/2 ]
///
/// 誤差為 O(h²)。取樣點與求值順序與 `SimpsonRule` 相同。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrapezoidRule;

impl TrapezoidRule {
    pub fn new() -> TrapezoidRule {
        TrapezoidRule {}
    }
}

impl QuadratureEngine for TrapezoidRule {
    fn name(&self) -> &'static str {
        "trapezoid"
    }

    fn try_integrate<F, E>(&self, mut f: F, partition: &IntervalPartition) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let count = partition.count();
        let step_size = partition.step_size();

        let mut area = f(partition.lower())?;
        area += f(partition.upper())?;
        area *= 0.5;

        for i in 1..count {
            area += f(partition.sample_point(i))?;
        }

        Ok(area * step_size)
    }
}
