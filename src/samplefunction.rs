use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("invalid function choice '{0}'")]
    InvalidSelection(String),
}

/// 命令列可選的內建被積函數，以選項編號 `1`、`2` 選取。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SampleFunction {
    /// f(x) = x³·e^(−x) / (x + 1)
    #[serde(rename = "x^3 * e^(-x) / (x + 1)")]
    CubicExpDecay,
    /// f(x) = 1/x
    #[serde(rename = "1/x")]
    Reciprocal,
}

impl SampleFunction {
    pub const ALL: [SampleFunction; 2] = [SampleFunction::CubicExpDecay, SampleFunction::Reciprocal];

    pub fn selector(&self) -> u8 {
        match self {
            SampleFunction::CubicExpDecay => 1,
            SampleFunction::Reciprocal => 2,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SampleFunction::CubicExpDecay => "f(x) = x^3 * e^(-x) / (x + 1)",
            SampleFunction::Reciprocal => "f(x) = 1/x",
        }
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            SampleFunction::CubicExpDecay => x.powi(3) * (-x).exp() / (x + 1.0),
            SampleFunction::Reciprocal => 1.0 / x,
        }
    }
}

impl FromStr for SampleFunction {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(SampleFunction::CubicExpDecay),
            "2" => Ok(SampleFunction::Reciprocal),
            other => Err(SelectionError::InvalidSelection(other.to_owned())),
        }
    }
}

impl fmt::Display for SampleFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.selector(), self.description())
    }
}
