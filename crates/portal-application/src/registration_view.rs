//! The public registration form.

use chrono::{DateTime, Utc};

use portal_core::navigation::Route;
use portal_core::registration::{Confirmation, FieldError, RegistrationForm};
use portal_core::{PortalError, Result};

use crate::context::AppContext;

pub struct RegistrationView {
    pub form: RegistrationForm,
    errors: Vec<FieldError>,
    confirmation: Option<Confirmation>,
    confirmation_for: chrono::Duration,
}

impl RegistrationView {
    pub fn enter(ctx: &AppContext) -> Self {
        ctx.navigator.navigate(Route::Register);
        let confirmation_for = chrono::Duration::from_std(ctx.confirmation_for)
            .unwrap_or_else(|_| chrono::Duration::seconds(5));

        Self {
            form: RegistrationForm::default(),
            errors: Vec::new(),
            confirmation: None,
            confirmation_for,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn map_preview_link(&self) -> Option<String> {
        self.form.map_preview_link()
    }

    /// Validates the form. On success shows the confirmation and resets the
    /// form; nothing is stored.
    ///
    /// # Errors
    ///
    /// `Validation` with every failing field; the form is kept as entered.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<&Confirmation> {
        if let Err(e) = self.form.validate() {
            if let PortalError::Validation(errors) = &e {
                self.errors = errors.clone();
            }
            return Err(e);
        }

        tracing::info!("[RegistrationView] Registration accepted");
        self.errors.clear();
        self.form.reset();
        Ok(self
            .confirmation
            .insert(Confirmation::new(now, self.confirmation_for)))
    }

    /// The confirmation message while it is still visible at `now`.
    pub fn confirmation_at(&self, now: DateTime<Utc>) -> Option<&str> {
        self.confirmation
            .as_ref()
            .filter(|c| c.is_visible_at(now))
            .map(|c| c.message)
    }
}
