use crate::core::arithmetic;
use crate::domain::model::{Calculation, DivisionPolicy, Operation};
use crate::domain::ports::{ConfigProvider, Evaluator};
use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::sync::LazyLock;

// `10 / 5`, `-3*2.5`, `1e-3 + inf`
static INFIX_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?P<lhs>[+-]?(?:infinity|inf|nan|(?:\d+\.?\d*|\.\d+)(?:e[+-]?\d+)?))\s*(?P<op>[-+*/x])\s*(?P<rhs>\S+)\s*$",
    )
    .expect("static regex should not panic")
});

// `div 10 5`
static PREFIX_EXPR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<op>[A-Za-z]+)\s+(?P<lhs>\S+)\s+(?P<rhs>\S+)\s*$")
        .expect("static regex should not panic")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    policy: DivisionPolicy,
}

impl Calculator {
    pub fn new(policy: DivisionPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.division_policy())
    }

    pub fn policy(&self) -> DivisionPolicy {
        self.policy
    }

    pub fn calculate(&self, operation: Operation, lhs: f64, rhs: f64) -> Result<Calculation> {
        let result = self.evaluate(operation, lhs, rhs)?;
        Ok(Calculation {
            operation,
            lhs,
            rhs,
            result,
        })
    }

    /// Parses and evaluates `<lhs> <op> <rhs>` or `<name> <lhs> <rhs>`.
    pub fn evaluate_expression(&self, input: &str) -> Result<Calculation> {
        let (operation, lhs, rhs) = parse_expression(input)?;
        tracing::debug!("Parsed '{}' as {} {} {}", input.trim(), lhs, operation, rhs);
        self.calculate(operation, lhs, rhs)
    }
}

impl Evaluator for Calculator {
    fn evaluate(&self, operation: Operation, lhs: f64, rhs: f64) -> Result<f64> {
        let result = match operation {
            Operation::Add => arithmetic::add(lhs, rhs),
            Operation::Subtract => arithmetic::subtract(lhs, rhs),
            Operation::Multiply => arithmetic::multiply(lhs, rhs),
            Operation::Divide => match self.policy {
                DivisionPolicy::Ieee754 => arithmetic::divide(lhs, rhs),
                DivisionPolicy::Checked => arithmetic::checked_divide(lhs, rhs)?,
            },
        };

        if !result.is_finite() {
            tracing::warn!("{} {} {} produced non-finite result {}", lhs, operation, rhs, result);
        } else {
            tracing::debug!("{} {} {} = {}", lhs, operation, rhs, result);
        }
        Ok(result)
    }
}

pub fn parse_expression(input: &str) -> Result<(Operation, f64, f64)> {
    if let Some(caps) = INFIX_EXPR.captures(input) {
        let operation: Operation = caps["op"].parse()?;
        return Ok((operation, parse_operand(&caps["lhs"])?, parse_operand(&caps["rhs"])?));
    }

    if let Some(caps) = PREFIX_EXPR.captures(input) {
        let operation: Operation = caps["op"].parse()?;
        return Ok((operation, parse_operand(&caps["lhs"])?, parse_operand(&caps["rhs"])?));
    }

    Err(CalcError::MalformedExpression {
        input: input.to_string(),
    })
}

pub fn parse_operand(token: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .map_err(|e| CalcError::InvalidOperand {
            value: token.to_string(),
            reason: e.to_string(),
        })
}
