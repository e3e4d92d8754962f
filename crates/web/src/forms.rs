//! Bracketed form-field parsing.
//!
//! Request bodies arrive urlencoded with bracketed keys
//! (`author[name]=Ada&post[title]=Hi`). [`FormParams`] splits those into
//! named groups; accessing a group or field the client did not send fails
//! with [`CoreError::MissingParameter`], never a silent default.

use std::collections::BTreeMap;

use scribble_core::error::CoreError;

use crate::error::AppError;

/// A parsed form body: group name -> field name -> value.
#[derive(Debug)]
pub struct FormParams {
    groups: BTreeMap<String, BTreeMap<String, String>>,
}

impl FormParams {
    /// Parse an urlencoded body. Keys without a `group[field]` shape are
    /// ignored.
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| AppError::BadRequest(format!("malformed form body: {e}")))?;

        let mut groups: BTreeMap<String, BTreeMap<String, String>> = BTreeMap::new();
        for (key, value) in pairs {
            if let Some((group, field)) = split_bracketed(&key) {
                groups
                    .entry(group.to_string())
                    .or_default()
                    .insert(field.to_string(), value);
            }
        }
        Ok(Self { groups })
    }

    /// Access a field group, failing if it was not submitted.
    pub fn group<'a>(&'a self, name: &'a str) -> Result<FieldGroup<'a>, CoreError> {
        self.groups
            .get(name)
            .map(|fields| FieldGroup { name, fields })
            .ok_or_else(|| CoreError::missing_parameter(name))
    }
}

/// Split `group[field]` into its parts.
fn split_bracketed(key: &str) -> Option<(&str, &str)> {
    let open = key.find('[')?;
    let rest = &key[open + 1..];
    let close = rest.find(']')?;
    (!key[..open].is_empty()).then_some((&key[..open], &rest[..close]))
}

/// One named group of form fields, e.g. everything under `author[...]`.
#[derive(Debug)]
pub struct FieldGroup<'a> {
    name: &'a str,
    fields: &'a BTreeMap<String, String>,
}

impl<'a> FieldGroup<'a> {
    /// Fetch a field, failing if it was not submitted. An empty value is
    /// fine; only absence is an error.
    pub fn require(&self, field: &str) -> Result<&'a str, CoreError> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| CoreError::missing_parameter(format!("{}[{}]", self.name, field)))
    }

    /// Fetch a field if present.
    pub fn get(&self, field: &str) -> Option<&'a str> {
        self.fields.get(field).map(String::as_str)
    }
}
