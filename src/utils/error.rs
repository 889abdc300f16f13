use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("{type_name} is a singleton and has already been instantiated")]
    AlreadyInstantiated { type_name: &'static str },

    #[error("Command history is empty")]
    EmptyHistory,

    #[error("Unknown product tag: {tag}")]
    UnknownProduct { tag: String },

    #[error("Unknown pattern: {name}")]
    UnknownPattern { name: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Pattern,
    Selection,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PatternError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PatternError::AlreadyInstantiated { .. }
            | PatternError::EmptyHistory
            | PatternError::UnknownProduct { .. } => ErrorCategory::Pattern,
            PatternError::UnknownPattern { .. } => ErrorCategory::Selection,
            PatternError::InvalidConfigValue { .. } | PatternError::ConfigParse { .. } => {
                ErrorCategory::Configuration
            }
            PatternError::Io(_) | PatternError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Pattern => ErrorSeverity::High,
            ErrorCategory::Selection => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PatternError::AlreadyInstantiated { .. } => {
                "Use the shared instance accessor instead of constructing the type again".to_string()
            }
            PatternError::EmptyHistory => {
                "Store at least one command before calling undo or redo".to_string()
            }
            PatternError::UnknownProduct { .. } => {
                "Register a constructor for the tag or use one of the built-in tags".to_string()
            }
            PatternError::UnknownPattern { .. } => {
                "Run with --list to see the available patterns".to_string()
            }
            PatternError::InvalidConfigValue { field, .. } => {
                format!("Check the value of '{}' in the configuration", field)
            }
            PatternError::ConfigParse { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            PatternError::Io(_) => "Check file paths and permissions".to_string(),
            PatternError::Serialization(_) => "Try the text output format instead".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Pattern => format!("Demo failed: {}", self),
            ErrorCategory::Selection => format!("Nothing to run: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
