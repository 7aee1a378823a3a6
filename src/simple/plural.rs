//! Plural case selection.

use std::fmt::Display;

use super::config::{
    MsgConfig,
    PluralCase,
};
use crate::error::TranslateError;
use crate::message::{
    ArgValue,
    TransMsg,
};

/// Chooses the template for `msg` from its configured translation.
///
/// For plural configurations, the case with the highest `count` <= the plural
/// arg value wins. Cases are scanned from the last one backwards, so they are
/// expected in ascending `count` order.
pub(super) fn choose_plural_case<'a, K: Display>(
    msg: &TransMsg<K>,
    config: &'a MsgConfig,
) -> Result<&'a str, TranslateError> {
    match (config, msg.plural_arg_key()) {
        (MsgConfig::NonPlural(template), None) => Ok(template.as_str()),
        (MsgConfig::NonPlural(_), Some(plural_arg_key)) => Err(TranslateError::UnexpectedPlural {
            msg_type: msg.msg_type().to_string(),
            plural_arg_key: plural_arg_key.to_string(),
        }),
        (MsgConfig::Plural(_), None) => {
            Err(TranslateError::UnexpectedNonPlural { msg_type: msg.msg_type().to_string() })
        }
        (MsgConfig::Plural(cases), Some(plural_arg_key)) => {
            let value = msg.arg_value(plural_arg_key);
            let Some(count) = value.and_then(ArgValue::as_number) else {
                return Err(TranslateError::InvalidPluralArgType {
                    msg_type: msg.msg_type().to_string(),
                    key: plural_arg_key.to_string(),
                    value: value.cloned(),
                });
            };

            select_case(cases, count).ok_or_else(|| TranslateError::NoMatchingPluralCase {
                msg_type: msg.msg_type().to_string(),
                count,
            })
        }
    }
}

/// Returns the template of the last case whose threshold does not exceed
/// `count`. `NaN` matches nothing.
fn select_case(cases: &[PluralCase], count: f64) -> Option<&str> {
    cases.iter().rev().find(|case| f64::from(case.count) <= count).map(|case| case.msg.as_str())
}
