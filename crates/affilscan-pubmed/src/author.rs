//! Resolve an author + affiliation pair into display name, company and email

use crate::extract::{extract_company_name, extract_email};
use crate::parser::Author;

/// Placeholder used when an author has no usable name.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Normalized identity of one qualifying author/affiliation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetails {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
}

impl AuthorDetails {
    fn unknown() -> Self {
        Self {
            name: UNKNOWN_AUTHOR.to_string(),
            company: None,
            email: None,
        }
    }
}

/// Outcome of [`resolve`].
///
/// `Fallback` means name construction failed and the placeholder identity
/// was substituted; the author still counts as a qualifying contributor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(AuthorDetails),
    Fallback { reason: String },
}

impl Resolution {
    /// Details to record, the placeholder identity for `Fallback`.
    pub fn into_details(self) -> AuthorDetails {
        match self {
            Self::Resolved(details) => details,
            Self::Fallback { .. } => AuthorDetails::unknown(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Build `"ForeName LastName"`, trimmed; empty becomes [`UNKNOWN_AUTHOR`].
pub fn display_name(author: &Author) -> Result<String, String> {
    if let Some(err) = &author.name_error {
        return Err(format!("undecodable author name: {err}"));
    }
    let fore = author.fore_name.as_deref().unwrap_or("");
    let last = author.last_name.as_deref().unwrap_or("");
    let name = format!("{fore} {last}").trim().to_string();
    if name.is_empty() {
        Ok(UNKNOWN_AUTHOR.to_string())
    } else {
        Ok(name)
    }
}

/// Resolve one author against one of their affiliations.
pub fn resolve(author: &Author, affiliation: &str) -> Resolution {
    match display_name(author) {
        Ok(name) => Resolution::Resolved(AuthorDetails {
            name,
            company: extract_company_name(affiliation),
            email: extract_email(affiliation),
        }),
        Err(reason) => Resolution::Fallback { reason },
    }
}
