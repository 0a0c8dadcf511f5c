use thiserror::Error;

/// Rule violated by a proposed store address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("store address is empty or insecure")]
    EmptyOrInsecure,

    #[error("store address is too long ({actual} characters, max {max})")]
    TooLong { max: usize, actual: usize },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Store construction failed: {message}")]
    Construction {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl StoreError {
    pub fn construction<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Construction {
            message: message.into(),
            source: Box::new(source),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The validation rule behind this error, if it came from one.
    pub fn validation_kind(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::EmptyOrInsecure) => {
                "The store address is empty once unsafe characters are removed".to_string()
            }
            Self::Validation(ValidationError::TooLong { max, .. }) => {
                format!("The store address must be at most {} characters", max)
            }
            Self::Construction { message, .. } => format!("Could not create the store: {}", message),
            Self::Io(e) => format!("Could not read input: {}", e),
            Self::Serialization(e) => format!("Could not encode the store: {}", e),
            Self::Config { message } => format!("Invalid configuration: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyOrInsecure) => {
                "Provide an address with letters or digits outside of markup tags"
            }
            Self::Validation(ValidationError::TooLong { .. }) => "Shorten the address",
            Self::Construction { .. } => "Check that the input is valid UTF-8 text",
            Self::Io(_) => "Check that the config file exists and is readable",
            Self::Serialization(_) => "Report the address that failed to encode",
            Self::Config { .. } => "Pass either --address or --config, with a [store] address entry",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
