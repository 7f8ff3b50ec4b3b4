//! Auth Handlers

pub(crate) mod login;
pub(crate) mod register;

/// An optional request field, `None` when absent or blank.
pub(super) fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
