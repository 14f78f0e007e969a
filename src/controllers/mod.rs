//! Per-screen orchestration: collect validated input, call the API client and
//! map the result onto UI state.

pub mod login;
pub mod product_form;
pub mod product_list;
pub mod register;

pub use login::LoginController;
pub use product_form::ProductFormController;
pub use product_list::ProductListController;
pub use register::RegisterController;

use crate::utils::validation::FieldErrors;

/// Submission phase of a form. While `Submitting`, the UI keeps the submit
/// control disabled and further submits are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// What a submit attempt resolved to. Every non-`Ignored` outcome leaves the
/// form back in `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The request went through; the presentation layer navigates, clears the
    /// form or closes the modal as appropriate for its screen.
    Success,
    /// Validation failed, or the backend rejection was classified onto a
    /// field; errors are scoped to fields and no generic message is shown.
    FieldErrors(FieldErrors),
    /// The backend rejected the request or it never completed; one notice is
    /// published and the form stays populated for a retry.
    RequestError(String),
    /// Dropped without side effects (already submitting, or no session where
    /// one is required).
    Ignored,
}
