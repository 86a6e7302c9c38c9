use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" | "plus" => Ok(Operation::Add),
            "-" | "sub" | "subtract" | "minus" => Ok(Operation::Subtract),
            "*" | "x" | "mul" | "multiply" | "times" => Ok(Operation::Multiply),
            "/" | "div" | "divide" => Ok(Operation::Divide),
            _ => Err(CalcError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// What `divide` does with a zero divisor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DivisionPolicy {
    /// Infinity for x/0, NaN for 0/0.
    #[default]
    #[cfg_attr(feature = "cli", value(name = "ieee754"))]
    Ieee754,
    /// `CalcError::DivisionByZero` for any zero divisor.
    Checked,
}

/// One evaluated operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub lhs: f64,
    pub rhs: f64,
    pub result: f64,
}

impl Calculation {
    /// CLI output: JSON, or the bare result. Precision only applies to finite results.
    pub fn render(&self, json: bool, precision: Option<usize>) -> Result<String> {
        if json {
            return Ok(serde_json::to_string(self)?);
        }
        Ok(match precision {
            Some(p) if self.result.is_finite() => format!("{:.*}", p, self.result),
            _ => self.result.to_string(),
        })
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.operation, self.rhs, self.result)
    }
}
