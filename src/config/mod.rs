pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, DivisionPolicy};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const MAX_PRECISION: usize = 17;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Add, subtract, multiply and divide from the command line")]
pub struct CliConfig {
    /// Division-by-zero policy (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<DivisionPolicy>,

    /// Digits after the decimal point (overrides the config file)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the calculation as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Expression, e.g. `10 / 5` or `div 10 5`. Use `--` before operands like `-inf`
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub expression: Vec<String>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn expression(&self) -> String {
        self.expression.join(" ")
    }

    /// Fills unset options from the config file. CLI flags win.
    pub fn merge_toml(&mut self, toml: &toml_config::TomlConfig) {
        if self.policy.is_none() {
            self.policy = toml.calculator.division_policy;
        }
        if self.precision.is_none() {
            self.precision = toml.calculator.precision;
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn division_policy(&self) -> DivisionPolicy {
        self.policy.unwrap_or_default()
    }

    fn precision(&self) -> Option<usize> {
        self.precision
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("expression", &self.expression())?;
        if let Some(precision) = self.precision {
            validation::validate_range("precision", precision, 0, MAX_PRECISION)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_operands() {
        let config = CliConfig::parse_from(["small-calc", "--policy", "checked", "-3", "*", "-2"]);
        assert_eq!(config.policy, Some(DivisionPolicy::Checked));
        assert_eq!(config.expression(), "-3 * -2");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_options_after_expression_are_parsed() {
        let config = CliConfig::parse_from(["small-calc", "10", "/", "0", "--json"]);
        assert!(config.json);
        assert_eq!(config.expression(), "10 / 0");

        let config = CliConfig::parse_from(["small-calc", "1", "-", "-1", "--precision", "2"]);
        assert_eq!(config.precision, Some(2));
        assert_eq!(config.expression(), "1 - -1");
    }

    #[test]
    fn test_escaped_hyphen_operands() {
        let config = CliConfig::parse_from(["small-calc", "--", "-inf", "+", "1"]);
        assert_eq!(config.expression(), "-inf + 1");
    }

    #[test]
    fn test_merge_toml_keeps_cli_values() {
        let toml = toml_config::TomlConfig::from_toml_str(
            "[calculator]\ndivision_policy = \"checked\"\nprecision = 2\n",
        )
        .unwrap();

        let mut config = CliConfig::parse_from(["small-calc", "--precision", "4", "1", "+", "1"]);
        config.merge_toml(&toml);
        assert_eq!(config.division_policy(), DivisionPolicy::Checked);
        assert_eq!(config.precision(), Some(4));
    }

    #[test]
    fn test_precision_out_of_range() {
        let config = CliConfig::parse_from(["small-calc", "--precision", "40", "1", "+", "1"]);
        assert!(config.validate().is_err());
    }
}
