use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Malformed CSV at line {line}: {message}")]
    ParseError { line: u64, message: String },

    #[error("Column '{field}' not found (available: {})", .available.join(", "))]
    KeyMissingError { field: String, available: Vec<String> },

    #[error("Column '{field}' row {row}: cannot convert '{value}' to a number")]
    TypeCastError {
        field: String,
        row: usize,
        value: String,
    },

    #[error("Column '{field}' has no values to {operation}")]
    EmptyDataError { field: String, operation: String },

    #[error("Chart rendering error: {message}")]
    PlotError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AnalysisError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::FileNotFound { .. }
            | AnalysisError::CsvError(_)
            | AnalysisError::ParseError { .. } => ErrorCategory::Input,
            AnalysisError::KeyMissingError { .. }
            | AnalysisError::TypeCastError { .. }
            | AnalysisError::EmptyDataError { .. } => ErrorCategory::Data,
            AnalysisError::PlotError { .. }
            | AnalysisError::IoError(_)
            | AnalysisError::SerializationError(_) => ErrorCategory::Output,
            AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalysisError::FileNotFound { path } => {
                format!("找不到輸入檔案: {}", path)
            }
            AnalysisError::CsvError(_) | AnalysisError::ParseError { .. } => {
                format!("無法解析 CSV 檔案: {}", self)
            }
            AnalysisError::KeyMissingError { field, .. } => {
                format!("資料中沒有欄位 '{}'", field)
            }
            AnalysisError::TypeCastError { field, value, .. } => {
                format!("欄位 '{}' 含有非數值資料: '{}'", field, value)
            }
            AnalysisError::EmptyDataError { field, .. } => {
                format!("欄位 '{}' 沒有可用的資料", field)
            }
            AnalysisError::PlotError { .. } => format!("圖表產生失敗: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AnalysisError::FileNotFound { .. } => {
                "Check the input path, or run `clean` first to produce cleaned_data.csv"
            }
            AnalysisError::CsvError(_) | AnalysisError::ParseError { .. } => {
                "Make sure the file is UTF-8 CSV with a header row and no extra fields"
            }
            AnalysisError::KeyMissingError { .. } => {
                "Pass --field with one of the available column names"
            }
            AnalysisError::TypeCastError { .. } => {
                "Pick a numeric column or clean the offending values"
            }
            AnalysisError::EmptyDataError { .. } => {
                "Check that the input still has rows after cleaning"
            }
            AnalysisError::PlotError { .. } => {
                "Check that the chart directory is writable and fonts are installed"
            }
            AnalysisError::IoError(_) | AnalysisError::SerializationError(_) => {
                "Check file permissions and free disk space"
            }
            AnalysisError::ConfigValidationError { .. }
            | AnalysisError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line options"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
