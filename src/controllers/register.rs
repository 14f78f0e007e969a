use tracing::warn;

use super::{FormPhase, SubmitOutcome};
use crate::api::{ApiClient, ApiError};
use crate::notify::NoticeSender;
use crate::schemas::register_schema::RegisterSchema;
use crate::utils::phone::parse_phone_mask;
use crate::utils::validation::{FieldErrors, field_error, validate_payload};

/// Orchestrates the registration screen: validates the form, decomposes the
/// masked phone and maps backend rejections back onto the offending field.
#[derive(Debug)]
pub struct RegisterController {
    api: ApiClient,
    notices: NoticeSender,
    phase: FormPhase,
    field_errors: FieldErrors,
}

impl RegisterController {
    pub fn new(api: ApiClient, notices: NoticeSender) -> Self {
        Self {
            api,
            notices,
            phase: FormPhase::default(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Field errors from the last rejected submit.
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub async fn submit(&mut self, form: RegisterSchema) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        if let Err(errors) = validate_payload(&form) {
            self.field_errors = errors.clone();
            return SubmitOutcome::FieldErrors(errors);
        }

        // The mask is decomposed before transmission; a mismatch stays local.
        let phone = match parse_phone_mask(&form.phone) {
            Ok(parts) => parts,
            Err(err) => {
                let errors = field_error("phone", err.to_string());
                self.field_errors = errors.clone();
                return SubmitOutcome::FieldErrors(errors);
            }
        };
        self.field_errors.clear();

        self.phase = FormPhase::Submitting;
        let result = self.api.register(&form.into_payload(phone)).await;
        self.phase = FormPhase::Idle;

        match result {
            Ok(registered) => {
                self.notices.info(registered.message);
                SubmitOutcome::Success
            }
            Err(err) => match classify_rejection(&err) {
                Some(field) => {
                    let errors = field_error(field, err.to_string());
                    self.field_errors = errors.clone();
                    SubmitOutcome::FieldErrors(errors)
                }
                None => {
                    warn!("registration rejected: {err}");
                    let message = err.to_string();
                    self.notices.error(message.clone());
                    SubmitOutcome::RequestError(message)
                }
            },
        }
    }
}

/// Attach a backend rejection to the field it concerns, when that can be
/// told. The structured `codeIntern` is preferred; matching on the message
/// text is a compatibility shim for backends that omit the code.
fn classify_rejection(err: &ApiError) -> Option<&'static str> {
    let ApiError::Rejected { code, message, .. } = err else {
        return None;
    };

    if let Some(code) = code {
        let code = code.to_ascii_uppercase();
        if code.contains("EMAIL") {
            return Some("email");
        }
        if code.contains("PHONE") {
            return Some("phone");
        }
    }

    let message = message.to_lowercase();
    if message.contains("email") {
        Some("email")
    } else if message.contains("phone") {
        Some("phone")
    } else {
        None
    }
}
