use crate::{MAX_FIELD_NAME_LEN, MAX_HELP_TEXT_LEN, err, error::ErrorTree, types::HelpText};

// Field identifiers are the client-facing form keys: camelCase ascii,
// matching what the consuming forms post.
pub(crate) fn validate_ident(errs: &mut ErrorTree, ident: &str) {
    if ident.is_empty() {
        err!(errs, "field ident is empty");
        return;
    }

    if ident.len() > MAX_FIELD_NAME_LEN {
        err!(errs, "field ident '{ident}' exceeds {MAX_FIELD_NAME_LEN} bytes");
    }

    let starts_lower = ident.chars().next().is_some_and(|c| c.is_ascii_lowercase());
    if !starts_lower || !ident.chars().all(|c| c.is_ascii_alphanumeric()) {
        err!(errs, "field ident '{ident}' is not camelCase ascii");
    }
}

pub(crate) fn validate_help(errs: &mut ErrorTree, help: HelpText) {
    match help {
        HelpText::None => {}
        HelpText::Fixed(text) => validate_help_str(errs, text),
        HelpText::PerCapacity { single, multi } => {
            for text in [single, multi] {
                if text.is_empty() {
                    err!(errs, "per-capacity help text has an empty arm");
                } else {
                    validate_help_str(errs, text);
                }
            }
        }
    }
}

pub(crate) fn validate_help_str(errs: &mut ErrorTree, text: &str) {
    if text.len() > MAX_HELP_TEXT_LEN {
        err!(errs, "help text exceeds {MAX_HELP_TEXT_LEN} bytes");
    }
}
