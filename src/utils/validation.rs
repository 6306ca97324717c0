use crate::domain::model::{Graduate, GraduateDraft};
use crate::utils::error::{PortalError, Result, ValidationFailure};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Shape the original portal accepts for a portfolio link: http(s) scheme, a
/// dot-separated host-like token, then anything (path, query).
const PORTFOLIO_URL_PATTERN: &str = r"(?i)^https?://[\w.-]+\.[a-z]{2,}.*$";

/// Collects every reason the draft cannot be submitted, in rule order:
/// missing fields, then URL shape, then duplicate email. The duplicate-email
/// check only applies when creating (`editing_id` is `None`) and is advisory;
/// the store performs the authoritative check.
pub fn check_draft(
    draft: &GraduateDraft,
    cache: &[Graduate],
    editing_id: Option<u64>,
) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();

    let required = [
        ("fullName", draft.full_name.as_str()),
        ("email", draft.email.as_str()),
        ("university", draft.university.as_str()),
        ("degree", draft.degree.as_str()),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            failures.push(ValidationFailure::MissingField { field });
        }
    }
    if draft.graduation_year == 0 {
        failures.push(ValidationFailure::MissingField {
            field: "graduationYear",
        });
    }
    if draft.skills.is_empty() {
        failures.push(ValidationFailure::MissingField { field: "skills" });
    }

    if let Some(url) = draft.portfolio_url.as_deref() {
        let trimmed = url.trim();
        if !trimmed.is_empty() && !portfolio_url_regex().is_match(trimmed) {
            failures.push(ValidationFailure::InvalidUrl {
                value: trimmed.to_string(),
            });
        }
    }

    if editing_id.is_none() {
        let email = draft.email.trim();
        if cache.iter().any(|g| g.email == email) {
            failures.push(ValidationFailure::DuplicateEmail {
                email: email.to_string(),
            });
        }
    }

    failures
}

/// First failing reason, or Ok. Pure; the caller surfaces the failure and
/// aborts submission.
pub fn validate_draft(
    draft: &GraduateDraft,
    cache: &[Graduate],
    editing_id: Option<u64>,
) -> std::result::Result<(), ValidationFailure> {
    match check_draft(draft, cache, editing_id).into_iter().next() {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}

fn portfolio_url_regex() -> Regex {
    Regex::new(PORTFOLIO_URL_PATTERN).unwrap()
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PortalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortalError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PortalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
