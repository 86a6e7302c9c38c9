use crate::domain::model::{DivisionPolicy, Operation};
use crate::utils::error::Result;

pub trait ConfigProvider: Send + Sync {
    fn division_policy(&self) -> DivisionPolicy;
    fn precision(&self) -> Option<usize>;
}

pub trait Evaluator: Send + Sync {
    fn evaluate(&self, operation: Operation, lhs: f64, rhs: f64) -> Result<f64>;
}
