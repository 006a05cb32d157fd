use thiserror::Error;

#[derive(Error, Debug)]
pub enum KalitaError {
    #[error("Feed connection not configured. Run 'kalita config --url <URL> --anon-key <KEY>' or use --demo.")]
    MissingConfig,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type KalitaResult<T> = Result<T, KalitaError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> KalitaResult<T>;
    fn with_context<F>(self, f: F) -> KalitaResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> KalitaResult<T> {
        self.map_err(|e| KalitaError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> KalitaResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| KalitaError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> KalitaResult<T> {
        self.ok_or_else(|| KalitaError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> KalitaResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| KalitaError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! kalita_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::KalitaError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::KalitaError::$error_type(format!($fmt, $($arg)*))
    };
}
