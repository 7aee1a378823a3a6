use thiserror::Error;

use crate::message::ArgValue;

/// Errors that may occur while translating a message.
///
/// Every variant carries the message-type key (rendered with `Display`) so
/// the failure can be traced back to the catalog entry without more context.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranslateError {
    /// No configured translation exists for the message type.
    #[error("missing translation for \"{msg_type}\"")]
    MissingTranslation { msg_type: String },

    /// The message names a plural arg, but the configured translation is a
    /// single template.
    #[error(
        "\"{msg_type}\": TransMsg is plural by \"{plural_arg_key}\", configured translation is non-plural"
    )]
    UnexpectedPlural { msg_type: String, plural_arg_key: String },

    /// The configured translation has plural cases, but the message names no
    /// plural arg.
    #[error("\"{msg_type}\": configured translation is plural, TransMsg is non-plural")]
    UnexpectedNonPlural { msg_type: String },

    /// The plural arg is missing or not a number.
    #[error(
        "\"{msg_type}\": plural arg {key} must have number value; got: {}",
        describe_value(.value)
    )]
    InvalidPluralArgType { msg_type: String, key: String, value: Option<ArgValue> },

    /// The plural count is below every configured threshold.
    #[error("\"{msg_type}\" had no plural configuration matching {count}")]
    NoMatchingPluralCase { msg_type: String, count: f64 },

    /// A `%{name}` placeholder has no matching argument.
    #[error("\"{msg_type}\": missing arg \"{key}\"")]
    MissingArgument { msg_type: String, key: String },
}

/// Renders the offending plural arg value, which may be absent entirely.
#[allow(clippy::ref_option)]
fn describe_value(value: &Option<ArgValue>) -> String {
    value.as_ref().map_or_else(|| "<missing>".to_string(), ToString::to_string)
}
