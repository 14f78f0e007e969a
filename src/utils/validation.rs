use std::collections::BTreeMap;

use validator::Validate;

/// Field name mapped to its human-readable messages, ordered so the
/// presentation layer renders errors deterministically.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Validate a payload implementing `validator::Validate` and flatten the
/// result into a `FieldErrors` map so controllers can surface it per field.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), FieldErrors> {
    if let Err(errors) = payload.validate() {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors().iter() {
            let msgs: Vec<String> = errs
                .iter()
                .map(|e| e.message.clone().unwrap_or_else(|| "Invalid input".into()).to_string())
                .collect();
            fields.insert(field.to_string(), msgs);
        }
        return Err(fields);
    }
    Ok(())
}

/// A map holding a single field error, for errors raised outside a
/// `Validate` derive (mask decomposition, classified backend rejections).
pub fn field_error(field: &str, message: impl Into<String>) -> FieldErrors {
    let mut fields = FieldErrors::new();
    fields.insert(field.to_string(), vec![message.into()]);
    fields
}
