use crate::core::ConfigProvider;
use crate::utils::error::{PortalError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// File-based configuration, for pointing the CLI at a non-default portal
/// deployment without retyping flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalFileConfig {
    pub portal: PortalSection,
    pub api: ApiSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
    pub list_retries: Option<u32>,
}

impl PortalFileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortalError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PortalError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` tokens with environment values; unknown
    /// variables are left as-is so validation can report them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for PortalFileConfig {
    fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        self.api.timeout_seconds
    }

    fn list_retries(&self) -> u32 {
        self.api.list_retries.unwrap_or(0)
    }
}

impl Validate for PortalFileConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("portal.name", &self.portal.name)?;
        validate_url("api.endpoint", &self.api.endpoint)?;

        if let Some(timeout) = self.api.timeout_seconds {
            if timeout == 0 {
                return Err(PortalError::InvalidConfigValueError {
                    field: "api.timeout_seconds".to_string(),
                    value: timeout.to_string(),
                    reason: "Timeout must be at least 1 second".to_string(),
                });
            }
        }

        Ok(())
    }
}
