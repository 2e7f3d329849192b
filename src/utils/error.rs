use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoutError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Cannot parse price from '{input}': {reason}")]
    PriceParseError { input: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Extraction,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依嚴重程度決定程式結束碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScoutError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoutError::HttpError(_) | ScoutError::HttpStatusError { .. } => ErrorCategory::Network,
            ScoutError::SelectorError { .. } | ScoutError::PriceParseError { .. } => {
                ErrorCategory::Extraction
            }
            ScoutError::ConfigError { .. }
            | ScoutError::MissingConfigError { .. }
            | ScoutError::InvalidConfigValueError { .. }
            | ScoutError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            ScoutError::CsvError(_) | ScoutError::IoError(_) | ScoutError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// 單一網站失敗不會中斷搜尋，因此網路與擷取錯誤屬於較低等級
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Extraction => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ScoutError::HttpError(_) => "Check that the site is reachable and the URL is correct",
            ScoutError::HttpStatusError { .. } => {
                "The site answered with an error page; verify the URL or try again later"
            }
            ScoutError::SelectorError { .. } => {
                "Fix the CSS selector in the site catalog (e.g. '.product h2')"
            }
            ScoutError::PriceParseError { .. } => {
                "The price selector probably matches a non-price element; adjust it"
            }
            ScoutError::MissingConfigError { .. } => {
                "Set SITE1_URL, SITE2_URL and SITE3_URL in the environment or a .env file"
            }
            ScoutError::ConfigError { .. }
            | ScoutError::InvalidConfigValueError { .. }
            | ScoutError::ConfigValidationError { .. } => {
                "Review the site catalog file and command line options"
            }
            ScoutError::CsvError(_) | ScoutError::SerializationError(_) => {
                "Try a different output format"
            }
            ScoutError::IoError(_) => "Check that the output path is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch a site: {}", self),
            ErrorCategory::Extraction => format!("Could not read products from a page: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoutError>;
