// src/template.rs

//! Per-invocation argument templating.
//!
//! When a replacement token is configured, every argument of the command
//! template gets each occurrence of the token replaced by the decimal
//! invocation number. The template itself is never modified; a fresh argv
//! is produced for every invocation and dropped once the child is spawned.

use std::borrow::Cow;

/// Replace every occurrence of `token` in `input` with `index`.
///
/// Occurrences are replaced left to right and the substituted digits are
/// never rescanned, so `"{}{}"` becomes `"77"` for index 7 and a token that
/// happens to look like a number is not matched inside the inserted value.
pub fn replace_num(input: &str, token: &str, index: u64) -> String {
    input.replace(token, &index.to_string())
}

/// Produce the templated argv for invocation `index`.
///
/// Returns `None` when no token is configured, in which case the caller
/// must use `command` unmodified.
pub fn template_args(command: &[String], token: Option<&str>, index: u64) -> Option<Vec<String>> {
    let token = token?;
    Some(
        command
            .iter()
            .map(|arg| replace_num(arg, token, index))
            .collect(),
    )
}

/// Resolve the argv to launch for invocation `index`: either a freshly
/// templated copy or a borrow of the original template.
pub fn argv_for<'a>(command: &'a [String], token: Option<&str>, index: u64) -> Cow<'a, [String]> {
    match template_args(command, token, index) {
        Some(argv) => Cow::Owned(argv),
        None => Cow::Borrowed(command),
    }
}
