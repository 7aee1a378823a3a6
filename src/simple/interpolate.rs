//! `%{name}` placeholder substitution.

use std::fmt::Display;

use crate::error::TranslateError;
use crate::message::TransMsg;

/// Opening delimiter of a placeholder.
const TOKEN_OPEN: &str = "%{";
/// Closing delimiter of a placeholder.
const TOKEN_CLOSE: char = '}';

/// Replaces every `%{name}` in `template` with the stringified value of the
/// `name` argument of `msg`.
///
/// The name runs to the first `}` and may not span lines. A `%` that does not
/// start a well-formed placeholder is kept as is, and substituted values are
/// not scanned again.
pub(super) fn replace_arg_values<K: Display>(
    msg: &TransMsg<K>,
    template: &str,
) -> Result<String, TranslateError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((literal, after_open)) = rest.split_once(TOKEN_OPEN) {
        let Some((arg_key, after_close)) = after_open.split_once(TOKEN_CLOSE) else {
            break;
        };

        if arg_key.contains(['\n', '\r']) {
            // Not a placeholder; keep "%{" and keep scanning after it.
            result.push_str(literal);
            result.push_str(TOKEN_OPEN);
            rest = after_open;
            continue;
        }

        let Some(value) = msg.arg_value(arg_key) else {
            return Err(TranslateError::MissingArgument {
                msg_type: msg.msg_type().to_string(),
                key: arg_key.to_string(),
            });
        };

        result.push_str(literal);
        result.push_str(&value.to_string());
        rest = after_close;
    }

    result.push_str(rest);
    Ok(result)
}
