use tracing::warn;

use super::{FormPhase, SubmitOutcome};
use crate::api::ApiClient;
use crate::notify::NoticeSender;
use crate::schemas::login_schema::LoginSchema;
use crate::session::Session;
use crate::utils::validation::{FieldErrors, validate_payload};

/// Orchestrates the login screen: validates credentials, exchanges them for a
/// token and stores it in the session. This is the session's only writer.
#[derive(Debug)]
pub struct LoginController {
    api: ApiClient,
    session: Session,
    notices: NoticeSender,
    phase: FormPhase,
    field_errors: FieldErrors,
}

impl LoginController {
    pub fn new(api: ApiClient, session: Session, notices: NoticeSender) -> Self {
        Self {
            api,
            session,
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

    pub async fn submit(&mut self, form: LoginSchema) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }

        // Validation failures never reach the network.
        if let Err(errors) = validate_payload(&form) {
            self.field_errors = errors.clone();
            return SubmitOutcome::FieldErrors(errors);
        }
        self.field_errors.clear();

        self.phase = FormPhase::Submitting;
        let result = self.api.login(&form).await;
        self.phase = FormPhase::Idle;

        match result {
            Ok(login) => {
                self.session.set_token(login.token);
                self.notices.info(format!("Welcome {}", login.user.name));
                SubmitOutcome::Success
            }
            Err(err) => {
                warn!("login rejected: {err}");
                let message = err.to_string();
                self.notices.error(message.clone());
                SubmitOutcome::RequestError(message)
            }
        }
    }
}
