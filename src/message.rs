//! Translatable message values.

use std::collections::HashMap;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Named arguments of a message (e.g., `"personName"` -> `"Alice"`).
pub type Args = HashMap<String, ArgValue>;

/// Value of a named message argument.
///
/// Numbers are stringified with the shortest decimal form that round-trips,
/// so integral values render without a fractional part (`72.0` -> `"72"`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    Str(String),
    Number(f64),
}

impl ArgValue {
    /// Returns the numeric value, or `None` for string arguments.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

// Counts above 2^53 lose precision, same as any other f64 number.
#[allow(clippy::cast_precision_loss)]
impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<u64> for ArgValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

#[allow(clippy::cast_precision_loss)]
impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

/// A translatable message: which message, with which arguments, and
/// optionally which argument holds the plural count.
///
/// Construction never fails. Whether `plural_arg_key` names a numeric
/// argument is checked when the message is translated.
///
/// # Examples
/// ```
/// use msg_translator::TransMsg;
///
/// let msg = TransMsg::new("inbox.unread")
///     .arg("userName", "Alice")
///     .arg("unreadCount", 3)
///     .plural_by("unreadCount");
///
/// assert_eq!(msg.plural_arg_key(), Some("unreadCount"));
/// assert_eq!(msg.args().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransMsg<K> {
    /// Key identifying the message template family.
    msg_type: K,
    /// Named arguments interpolated into the template.
    args: Args,
    /// Key of the numeric argument that selects the plural case.
    plural_arg_key: Option<String>,
}

impl<K> TransMsg<K> {
    /// Creates a non-plural message without arguments.
    #[must_use]
    pub fn new(msg_type: K) -> Self {
        Self { msg_type, args: Args::new(), plural_arg_key: None }
    }

    /// Creates a non-plural message with the given arguments.
    #[must_use]
    pub fn with_args<I, N, V>(msg_type: K, args: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<ArgValue>,
    {
        let args = args.into_iter().map(|(name, value)| (name.into(), value.into())).collect();
        Self { msg_type, args, plural_arg_key: None }
    }

    /// Adds (or replaces) a named argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    /// Marks the message as plural, counted by the argument `key`.
    #[must_use]
    pub fn plural_by(mut self, key: impl Into<String>) -> Self {
        self.plural_arg_key = Some(key.into());
        self
    }

    #[must_use]
    pub const fn msg_type(&self) -> &K {
        &self.msg_type
    }

    #[must_use]
    pub const fn args(&self) -> &Args {
        &self.args
    }

    #[must_use]
    pub fn arg_value(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    #[must_use]
    pub fn plural_arg_key(&self) -> Option<&str> {
        self.plural_arg_key.as_deref()
    }

    /// Lifts the message into a wider key type, e.g. an enum covering the
    /// message types of several modules.
    #[must_use]
    pub fn widen<U: From<K>>(self) -> TransMsg<U> {
        TransMsg {
            msg_type: self.msg_type.into(),
            args: self.args,
            plural_arg_key: self.plural_arg_key,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::string(ArgValue::from("Alice"), "Alice")]
    #[case::empty_string(ArgValue::from(""), "")]
    #[case::integer(ArgValue::from(72), "72")]
    #[case::large_integer(ArgValue::from(753_u64), "753")]
    #[case::zero(ArgValue::from(0_usize), "0")]
    #[case::negative(ArgValue::from(-4_i64), "-4")]
    #[case::fraction(ArgValue::from(1.5), "1.5")]
    #[case::integral_float(ArgValue::from(3.0), "3")]
    fn test_arg_value_display(#[case] value: ArgValue, #[case] expected: &str) {
        assert_that!(value.to_string(), eq(expected));
    }

    #[rstest]
    fn test_as_number() {
        assert_that!(ArgValue::from(2).as_number(), some(eq(2.0)));
        assert_that!(ArgValue::from("2").as_number(), none());
    }

    #[rstest]
    fn test_builder_collects_args_and_plural_key() {
        let msg = TransMsg::new("test.couple_fishCount")
            .arg("person1Name", "Alice")
            .arg("fishCount", 3)
            .plural_by("fishCount");

        assert_that!(*msg.msg_type(), eq("test.couple_fishCount"));
        assert_that!(msg.arg_value("person1Name"), some(eq(&ArgValue::from("Alice"))));
        assert_that!(msg.arg_value("fishCount"), some(eq(&ArgValue::Number(3.0))));
        assert_that!(msg.plural_arg_key(), some(eq("fishCount")));
    }

    #[rstest]
    fn test_arg_replaces_existing_value() {
        let msg = TransMsg::new("k").arg("n", 1).arg("n", "one");

        assert_that!(msg.args().len(), eq(1));
        assert_that!(msg.arg_value("n"), some(eq(&ArgValue::from("one"))));
    }

    #[rstest]
    fn test_with_args_is_non_plural() {
        let msg = TransMsg::with_args("test.hello_name", [("personName", "Alice")]);

        assert_that!(msg.plural_arg_key(), none());
        assert_that!(msg.arg_value("personName"), some(eq(&ArgValue::from("Alice"))));
    }

    #[rstest]
    fn test_widen_keeps_args_and_plural_key() {
        #[derive(Debug, PartialEq)]
        struct Wide(&'static str);

        impl From<&'static str> for Wide {
            fn from(key: &'static str) -> Self {
                Self(key)
            }
        }

        let msg = TransMsg::new("narrow").arg("n", 2).plural_by("n");
        let widened: TransMsg<Wide> = msg.widen();

        assert_that!(widened.msg_type(), eq(&Wide("narrow")));
        assert_that!(widened.arg_value("n"), some(eq(&ArgValue::Number(2.0))));
        assert_that!(widened.plural_arg_key(), some(eq("n")));
    }

    #[rstest]
    fn test_arg_value_deserializes_untagged() {
        let args: Args = serde_json::from_str(r#"{"name": "Bob", "count": 4}"#).unwrap();

        assert_that!(args["name"], eq(&ArgValue::from("Bob")));
        assert_that!(args["count"], eq(&ArgValue::Number(4.0)));
    }
}
