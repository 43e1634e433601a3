//! Enquiry contact details.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building [`ContactDetails`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The name field is blank.
    #[error("name is required")]
    MissingName,
    /// The phone field is blank.
    #[error("phone number is required")]
    MissingPhone,
}

/// Who to get back to about an enquiry.
///
/// Name and phone must be present; their format is not checked. The message
/// is free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    name: String,
    phone: String,
    message: String,
}

impl ContactDetails {
    /// Build contact details from raw form input, trimming every field.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or phone is blank after trimming.
    pub fn new(name: &str, phone: &str, message: &str) -> Result<Self, ContactError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactError::MissingName);
        }

        let phone = phone.trim();
        if phone.is_empty() {
            return Err(ContactError::MissingPhone);
        }

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            message: message.trim().to_owned(),
        })
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Customer phone number, as typed.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Free-text message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
