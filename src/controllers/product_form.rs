use tracing::{debug, warn};

use super::product_list::ProductListController;
use super::{FormPhase, SubmitOutcome};
use crate::api::ApiClient;
use crate::notify::NoticeSender;
use crate::schemas::product_schema::{ProductFormSchema, ProductUpdateRequestSchema};
use crate::session::Session;
use crate::utils::validation::{FieldErrors, validate_payload};

/// Shared orchestration for the create form and the edit modal. On success
/// the product list reloads its current page exactly once.
#[derive(Debug)]
pub struct ProductFormController {
    api: ApiClient,
    session: Session,
    notices: NoticeSender,
    phase: FormPhase,
    field_errors: FieldErrors,
}

impl ProductFormController {
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

    pub async fn create(
        &mut self,
        list: &mut ProductListController,
        form: ProductFormSchema,
    ) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        if let Err(errors) = validate_payload(&form) {
            self.field_errors = errors.clone();
            return SubmitOutcome::FieldErrors(errors);
        }
        let Some(token) = self.session.token() else {
            debug!("product create skipped: no session token");
            return SubmitOutcome::Ignored;
        };
        self.field_errors.clear();

        self.phase = FormPhase::Submitting;
        let result = self.api.create_product(&token, &form).await;
        self.phase = FormPhase::Idle;

        match result {
            Ok(_) => {
                self.notices.info("Product created");
                list.refresh().await;
                SubmitOutcome::Success
            }
            Err(err) => {
                warn!("product create rejected: {err}");
                let message = err.to_string();
                self.notices.error(message.clone());
                SubmitOutcome::RequestError(message)
            }
        }
    }

    pub async fn update(
        &mut self,
        list: &mut ProductListController,
        id: &str,
        form: ProductFormSchema,
    ) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        if let Err(errors) = validate_payload(&form) {
            self.field_errors = errors.clone();
            return SubmitOutcome::FieldErrors(errors);
        }
        let Some(token) = self.session.token() else {
            debug!("product update skipped: no session token");
            return SubmitOutcome::Ignored;
        };
        self.field_errors.clear();

        let payload = ProductUpdateRequestSchema::from(form);

        self.phase = FormPhase::Submitting;
        let result = self.api.update_product(&token, id, &payload).await;
        self.phase = FormPhase::Idle;

        match result {
            Ok(_) => {
                self.notices.info("Product updated");
                list.refresh().await;
                SubmitOutcome::Success
            }
            Err(err) => {
                warn!("product update rejected: {err}");
                let message = err.to_string();
                self.notices.error(message.clone());
                SubmitOutcome::RequestError(message)
            }
        }
    }
}
