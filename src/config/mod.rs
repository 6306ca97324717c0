pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

pub use toml_config::PortalFileConfig;

pub const DEFAULT_API_ENDPOINT: &str = "https://employer-portal-api.onrender.com/graduates";

#[derive(Debug, Parser)]
#[command(name = "gradport")]
#[command(about = "Manage graduate candidate records via the talent portal API")]
pub struct CliConfig {
    /// Base URL of the graduates endpoint.
    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    /// Optional TOML config file; flags given on the command line win.
    #[arg(long)]
    pub config: Option<String>,

    /// Extra attempts for the initial list fetch (no other call retries).
    #[arg(long, default_value = "0")]
    pub retries: u32,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List graduates, optionally filtered by a search term
    List {
        /// Case-insensitive match on name, university, degree, year or skill
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new graduate
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        university: String,
        #[arg(long)]
        degree: String,
        #[arg(long)]
        graduation_year: i32,
        /// Repeatable; duplicates and blank values are ignored
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        portfolio_url: Option<String>,
    },
    /// Edit an existing graduate; omitted flags keep the stored values
    Update {
        id: u64,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        university: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        graduation_year: Option<i32>,
        /// Repeatable; appended to the existing skill list
        #[arg(long = "skill")]
        add_skills: Vec<String>,
        /// Repeatable; removed from the existing skill list
        #[arg(long = "remove-skill")]
        remove_skills: Vec<String>,
        #[arg(long)]
        portfolio_url: Option<String>,
    },
    /// Delete a graduate by id
    Delete { id: u64 },
}

impl CliConfig {
    /// Endpoint after merging the optional file config: an explicit
    /// `--api-endpoint` always wins, otherwise the file value applies.
    pub fn resolve_endpoint(&self, file: Option<&PortalFileConfig>) -> String {
        if self.api_endpoint != DEFAULT_API_ENDPOINT {
            return self.api_endpoint.clone();
        }
        match file {
            Some(file) => file.api.endpoint.clone(),
            None => self.api_endpoint.clone(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn request_timeout_seconds(&self) -> Option<u64> {
        None
    }

    fn list_retries(&self) -> u32 {
        self.retries
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}
