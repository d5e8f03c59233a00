use super::intervalpartition::IntervalPartition;
use super::quadratureengine::QuadratureEngine;

// ─────────────────────────────────────────────────────────────────────────────
// SimpsonRule - Composite Simpson's 1/3 rule
// ─────────────────────────────────────────────────────────────────────────────
//
//   ∫_a^b f(x) dx ≈ h/3 · [ f(x_0) + 4f(x_1) + 2f(x_2) + 4f(x_3) + ... + 4f(x_{n-1}) + f(x_n) ]
//
// 其中 h = (b - a) / n，n 為偶數。
//
// 權重：端點 1，奇數內點 4，偶數內點 2。
// 求值順序固定為 x_0、x_n、x_1 … x_{n-1}，加總順序亦固定，
// 同一輸入的結果逐位元相同。對三次以下多項式為精確解，誤差為 O(h⁴)。

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpsonRule;

impl SimpsonRule {
    pub fn new() -> SimpsonRule {
        SimpsonRule {}
    }
}

impl QuadratureEngine for SimpsonRule {
    fn name(&self) -> &'static str {
        "simpson"
    }

    fn try_integrate<F, E>(&self, mut f: F, partition: &IntervalPartition) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        let count = partition.count();
        let step_size = partition.step_size();

        let mut area = f(partition.lower())?;
        area += f(partition.upper())?;

        for i in 1..count {
            let y = f(partition.sample_point(i))?;
            if i % 2 == 0 {
                area += 2.0 * y;
            } else {
                area += 4.0 * y;
            }
        }

        Ok(area * step_size / 3.0)
    }
}
