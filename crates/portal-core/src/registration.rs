//! Registration form validation.
//!
//! Submissions are only checked for shape; nothing is stored.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(\s[A-Z][a-z]+)*$").expect("valid name regex"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+@gmail\.com$").expect("valid email regex"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^09[0-9]{9}$").expect("valid phone regex"));
static COORDINATES_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?[0-9]{1,3}(\.[0-9]+)?),\s*(-?[0-9]{1,3}(\.[0-9]+)?)$").expect("valid coordinates regex")
});

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

pub const NAME_FORMAT_MESSAGE: &str =
    "Start with uppercase and use letters only, with optional spaces between names";
pub const CONFIRMATION_MESSAGE: &str = "Registration Successful! Welcome to our platform.";

/// A single failed rule, keyed by form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub coordinates: String,
}

impl RegistrationForm {
    /// Checks every field and reports the first failed rule of each.
    pub fn validate(&self) -> Result<()> {
        let errors: Vec<FieldError> = [
            check_name("firstName", "First name", &self.first_name),
            check_name("lastName", "Last name", &self.last_name),
            check_email(&self.email),
            check_phone(&self.phone),
            check_coordinates(&self.coordinates),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PortalError::Validation(errors))
        }
    }

    /// Embeddable map link for the entered coordinates, once they are well formed.
    pub fn map_preview_link(&self) -> Option<String> {
        map_preview_link(&self.coordinates)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn map_preview_link(coordinates: &str) -> Option<String> {
    COORDINATES_PATTERN
        .is_match(coordinates)
        .then(|| format!("https://www.google.com/maps?q={}&output=embed", coordinates))
}

fn check_name(field: &'static str, label: &str, value: &str) -> Option<FieldError> {
    let len = value.chars().count();
    if len < NAME_MIN {
        Some(FieldError::new(
            field,
            format!("{} must be at least {} characters", label, NAME_MIN),
        ))
    } else if len > NAME_MAX {
        Some(FieldError::new(
            field,
            format!("{} cannot exceed {} characters", label, NAME_MAX),
        ))
    } else if !NAME_PATTERN.is_match(value) {
        Some(FieldError::new(field, NAME_FORMAT_MESSAGE))
    } else {
        None
    }
}

fn check_email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new("email", "Email cannot be empty"));
    }
    if !looks_like_email(value) {
        return Some(FieldError::new("email", "Invalid email format"));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Some(FieldError::new(
            "email",
            "Use lowercase letters/numbers only and end with @gmail.com",
        ));
    }
    None
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn check_phone(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::new("phone", "Phone number is required"))
    } else if !PHONE_PATTERN.is_match(value) {
        Some(FieldError::new(
            "phone",
            "Phone must be 11 digits and start with 09",
        ))
    } else {
        None
    }
}

fn check_coordinates(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::new("coordinates", "Coordinates cannot be empty"));
    }
    let Some(captures) = COORDINATES_PATTERN.captures(value) else {
        return Some(FieldError::new(
            "coordinates",
            "Coordinates should be in format: 13.3603,123.7104",
        ));
    };

    let lat = captures[1].parse::<f64>().unwrap_or(f64::NAN);
    let lng = captures[3].parse::<f64>().unwrap_or(f64::NAN);
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng) {
        None
    } else {
        Some(FieldError::new(
            "coordinates",
            "Latitude must be between -90 and 90, Longitude between -180 and 180",
        ))
    }
}

/// Transient success notice shown after a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub message: &'static str,
    pub expires_at: DateTime<Utc>,
}

impl Confirmation {
    pub fn new(now: DateTime<Utc>, visible_for: Duration) -> Self {
        Self {
            message: CONFIRMATION_MESSAGE,
            expires_at: now + visible_for,
        }
    }

    pub fn is_visible_at(&self, at: DateTime<Utc>) -> bool {
        at < self.expires_at
    }
}
