pub mod arithmetic;
pub mod calculator;

pub use crate::domain::model::{Calculation, DivisionPolicy, Operation};
pub use crate::domain::ports::{ConfigProvider, Evaluator};
pub use crate::utils::error::Result;
