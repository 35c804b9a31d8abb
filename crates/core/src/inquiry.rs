//! Contact-form inquiry sources and validation.

use crate::error::CoreError;

/// Which public form an inquiry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquirySource {
    Contact,
    PrivateWork,
    ForLawFirms,
}

impl InquirySource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::PrivateWork => "private-work",
            Self::ForLawFirms => "for-law-firms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "contact" => Some(Self::Contact),
            "private-work" => Some(Self::PrivateWork),
            "for-law-firms" => Some(Self::ForLawFirms),
            _ => None,
        }
    }
}

/// A validated, trimmed inquiry ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidInquiry {
    pub source: InquirySource,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Validate raw inquiry fields.
///
/// `source` must be one of the known forms; `name` and `email` must be
/// non-blank after trimming; `message` is optional and defaults to empty.
pub fn validate_inquiry(
    source: Option<&str>,
    name: Option<&str>,
    email: Option<&str>,
    message: Option<&str>,
) -> Result<ValidInquiry, CoreError> {
    let source = source
        .and_then(InquirySource::parse)
        .ok_or_else(|| CoreError::Validation("Invalid source".into()))?;

    let name = trimmed_required(name, "Name is required")?;
    let email = trimmed_required(email, "Email is required")?;
    let message = message.unwrap_or_default().trim().to_string();

    Ok(ValidInquiry {
        source,
        name,
        email,
        message,
    })
}

fn trimmed_required(value: Option<&str>, message: &str) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}
