use thiserror::Error;

/// Process-level error: a message for stderr plus the exit code to return.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Why a load attempt was rejected.
///
/// Every variant leaves the analyzer empty; `SalesAnalyzer::load` collapses them to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Unreadable input: {message}")]
    Parse { message: String },
    #[error("Expected exactly 2 columns (Date, Sales_USD), found {found}.")]
    ColumnCount { found: usize },
    #[error("Need at least 2 valid data rows for analysis, found {rows}.")]
    InsufficientData { rows: usize },
    #[error("Internal error while validating sales data: {message}")]
    Internal { message: String },
}

impl LoadError {
    pub fn parse(message: impl Into<String>) -> Self {
        LoadError::Parse {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("No valid sales data loaded; load a workbook before building a chart.")]
    NotReady,
    #[error("Failed to serialize chart: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        let exit_code = match err {
            LoadError::InsufficientData { .. } => 3,
            LoadError::Internal { .. } => 4,
            LoadError::Parse { .. } | LoadError::ColumnCount { .. } => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        AppError::new(4, err.to_string())
    }
}
