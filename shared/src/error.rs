use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DashboardError {
    #[error("Payload error: {0}")]
    Payload(String),

    #[error("Render target not found: #{0}")]
    MissingContainer(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Payload(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display() {
        let err = DashboardError::MissingContainer("platform-chart".to_string());
        assert_eq!(err.to_string(), "Render target not found: #platform-chart");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DashboardError = parse_err.into();
        assert!(matches!(err, DashboardError::Payload(_)));
    }
}
