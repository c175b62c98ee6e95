use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardError {
    ConfigurationError(String),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for DashboardError {}

pub type Result<T> = std::result::Result<T, DashboardError>;
