use std::collections::BTreeMap;

use serde::Serialize;
use validator::Validate;

/// Field name → human-readable message, one message per field.
///
/// Only failing fields are present; an empty map means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    map: BTreeMap<String, String>,
}

impl FieldErrors {
    /// Record a message for `field`. The first message for a field wins.
    pub fn push_field(&mut self, field: &str, msg: impl Into<String>) {
        self.map
            .entry(field.to_string())
            .or_insert_with(|| msg.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.map.get(field).map(|s| s.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    /// Drop the error for one field (e.g. once the user edits it).
    pub fn clear_field(&mut self, field: &str) -> Option<String> {
        self.map.remove(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn friendly_message(code: &str) -> Option<&'static str> {
    match code {
        "required" => Some("is required"),
        "email" => Some("must be a valid email"),
        "length" => Some("has invalid length"),
        "range" => Some("is out of range"),
        "regex" => Some("has an invalid format"),
        _ => None,
    }
}

fn join_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

fn join_index(prefix: &str, idx: usize) -> String {
    format!("{prefix}[{idx}]")
}

fn push_validation_errors(out: &mut FieldErrors, prefix: &str, errs: &validator::ValidationErrors) {
    for (field, kind) in errs.errors() {
        match kind {
            validator::ValidationErrorsKind::Field(field_errors) => {
                let key = join_path(prefix, field);
                for e in field_errors {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .or_else(|| friendly_message(&e.code).map(|m| format!("{key} {m}")))
                        .unwrap_or_else(|| e.code.to_string());
                    out.push_field(&key, msg);
                }
            }
            validator::ValidationErrorsKind::Struct(struct_errs) => {
                let next = join_path(prefix, field);
                push_validation_errors(out, &next, struct_errs.as_ref());
            }
            validator::ValidationErrorsKind::List(list_errs) => {
                let base = join_path(prefix, field);
                for (idx, nested) in list_errs {
                    let next = join_index(&base, *idx);
                    push_validation_errors(out, &next, nested.as_ref());
                }
            }
        }
    }
}

impl From<&validator::ValidationErrors> for FieldErrors {
    fn from(errs: &validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        push_validation_errors(&mut out, "", errs);
        out
    }
}

/// Run `Validate` and flatten the result into `FieldErrors`.
pub fn check<T: Validate>(data: &T) -> FieldErrors {
    match data.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errs) => FieldErrors::from(&errs),
    }
}
