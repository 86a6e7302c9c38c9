pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::arithmetic::{add, checked_divide, divide, multiply, subtract};
pub use core::calculator::Calculator;
pub use domain::model::{Calculation, DivisionPolicy, Operation};
pub use utils::error::{CalcError, Result};
