use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region of the DynamoDB store (default: "us-west-2")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub aws_region: String,
    /// DynamoDB endpoint URL (default: "http://localhost:8000")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub aws_endpoint: String,
    /// Name of the recipe table (default: "recipe")
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub table_name: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_REGION` - AWS region (default: "us-west-2")
    /// - `AWS_ENDPOINT` - DynamoDB endpoint (default: "http://localhost:8000")
    /// - `RECIPE_TABLE` - Recipe table name (default: "recipe")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    ///
    /// Empty values are treated as unset.
    pub fn from_env() -> Self {
        Self {
            aws_region: non_empty_var("AWS_REGION").unwrap_or_else(|| "us-west-2".to_string()),
            aws_endpoint: non_empty_var("AWS_ENDPOINT")
                .unwrap_or_else(|| "http://localhost:8000".to_string()),
            table_name: non_empty_var("RECIPE_TABLE").unwrap_or_else(|| "recipe".to_string()),
            request_timeout_seconds: non_empty_var("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
