use serde::{Deserialize, Serialize};
use validator::Validate;

// Request schema: doubles as the POST /auth/login body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginSchema {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
}

// Subset of the user object returned on login; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSchema {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponseSchema {
    pub token: String,
    pub user: UserSchema,
}
