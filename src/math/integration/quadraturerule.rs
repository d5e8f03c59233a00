use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use super::intervalpartition::IntervalPartition;
use super::quadratureengine::QuadratureEngine;
use super::simpsonrule::SimpsonRule;
use super::trapezoidrule::TrapezoidRule;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown quadrature rule '{0}' (expected 'simpson' or 'trapezoid')")]
pub struct UnknownRule(pub String);

/// 執行期可切換的積分法。
///
/// `SimpsonRule`、`TrapezoidRule` 各自為零大小型別，靜態分派；
/// 需要由使用者輸入決定時改用此 enum。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadratureRule {
    #[default]
    Simpson,
    Trapezoid,
}

impl QuadratureEngine for QuadratureRule {
    fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Simpson => SimpsonRule.name(),
            QuadratureRule::Trapezoid => TrapezoidRule.name(),
        }
    }

    fn try_integrate<F, E>(&self, f: F, partition: &IntervalPartition) -> Result<f64, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
    {
        match self {
            QuadratureRule::Simpson => SimpsonRule.try_integrate(f, partition),
            QuadratureRule::Trapezoid => TrapezoidRule.try_integrate(f, partition),
        }
    }
}

impl FromStr for QuadratureRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simpson" => Ok(QuadratureRule::Simpson),
            "trapezoid" => Ok(QuadratureRule::Trapezoid),
            _ => Err(UnknownRule(s.to_owned())),
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
