use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::phone::PhoneParts;

// Request schema: raw form state, the phone still being the masked string
// typed by the user. The mismatch error is attached to `verify_password`, not
// `password`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterSchema {
    #[validate(length(min = 3, message = "Name must be at least 3 characters long"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,

    #[validate(
        length(min = 6, message = "Password must be at least 6 characters long"),
        must_match(other = "password", message = "Passwords do not match")
    )]
    pub verify_password: String,

    #[validate(length(min = 14, message = "Enter a valid phone number"))]
    pub phone: String,
}

impl RegisterSchema {
    /// Convert the validated form into the wire payload, swapping the masked
    /// phone string for its decomposed parts.
    pub fn into_payload(self, phone: PhoneParts) -> RegisterPayload {
        RegisterPayload {
            name: self.name,
            email: self.email,
            password: self.password,
            verify_password: self.verify_password,
            phone,
        }
    }
}

// Body for POST /users.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: String,
    pub email: String,
    pub password: String,
    pub verify_password: String,
    pub phone: PhoneParts,
}

// Response schema: the backend acknowledges with an internal code, a message
// and a token for the fresh account.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponseSchema {
    pub code_intern: Option<String>,
    pub message: String,
    pub token: String,
}
