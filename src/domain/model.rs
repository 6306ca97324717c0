use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// A graduate record as stored by the remote service. `id` is assigned by the
/// server and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Graduate {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub university: String,
    pub degree: String,
    pub graduation_year: i32,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
}

/// A record in progress, lacking a server id. This is the wire payload for both
/// create (POST) and update (PATCH).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraduateDraft {
    pub full_name: String,
    pub email: String,
    pub university: String,
    pub degree: String,
    pub graduation_year: i32,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
}

impl GraduateDraft {
    /// Empty draft defaulting the graduation year to the current calendar year.
    pub fn new() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            university: String::new(),
            degree: String::new(),
            graduation_year: chrono::Utc::now().year(),
            skills: Vec::new(),
            portfolio_url: None,
        }
    }

    /// Draft pre-filled from an existing record, for editing.
    pub fn from_record(record: &Graduate) -> Self {
        Self {
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            university: record.university.clone(),
            degree: record.degree.clone(),
            graduation_year: record.graduation_year,
            skills: record.skills.clone(),
            portfolio_url: record.portfolio_url.clone(),
        }
    }

    /// Adds a skill chip. Trims the candidate; empty or already-present values
    /// are a no-op. Accepted skills keep insertion order. Returns whether the
    /// skill was actually added.
    pub fn add_skill(&mut self, candidate: &str) -> bool {
        let skill = candidate.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes an exact skill match; no-op if absent.
    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Payload ready for submission: trimmed portfolio URL, dropped entirely
    /// when blank.
    pub fn payload(&self) -> Self {
        let mut payload = self.clone();
        payload.portfolio_url = self
            .portfolio_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        payload
    }
}

impl Default for GraduateDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The list endpoint wraps its payload in a `data` envelope; single-record
/// responses do not.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<Graduate>,
}
