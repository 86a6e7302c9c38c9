use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: f64 },

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    #[error("Invalid operand '{value}': {reason}")]
    InvalidOperand { value: String, reason: String },

    #[error("Malformed expression: '{input}'")]
    MalformedExpression { input: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Arithmetic,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::DivisionByZero { .. } => ErrorCategory::Arithmetic,
            CalcError::UnknownOperation { .. }
            | CalcError::InvalidOperand { .. }
            | CalcError::MalformedExpression { .. } => ErrorCategory::Input,
            CalcError::ConfigValidationError { .. }
            | CalcError::InvalidConfigValueError { .. }
            | CalcError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CalcError::IoError(_) | CalcError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Arithmetic | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CalcError::DivisionByZero { .. } => {
                "Use a non-zero divisor, or switch to --policy ieee754 to get infinity/NaN".to_string()
            }
            CalcError::UnknownOperation { .. } => {
                "Supported operations: add (+), sub (-), mul (* or x), div (/)".to_string()
            }
            CalcError::InvalidOperand { .. } => {
                "Operands must be numbers such as 10, -2.5 or 1e3".to_string()
            }
            CalcError::MalformedExpression { .. } => {
                "Write '<lhs> <op> <rhs>' (e.g. 10 / 5) or '<op> <lhs> <rhs>' (e.g. div 10 5)"
                    .to_string()
            }
            CalcError::ConfigValidationError { field, .. }
            | CalcError::InvalidConfigValueError { field, .. }
            | CalcError::MissingConfigError { field } => {
                format!("Check the '{}' setting in your configuration", field)
            }
            CalcError::IoError(_) => "Check that the file exists and is readable".to_string(),
            CalcError::SerializationError(_) => "Retry without --json".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Arithmetic => format!("Arithmetic error: {}", self),
            ErrorCategory::Input => format!("Could not understand the expression: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
