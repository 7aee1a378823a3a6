//! Locale configuration for [`SimpleTranslator`](super::SimpleTranslator).

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt::Display;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{msg_type}': {message}")]
pub struct ValidationError {
    /// Message type key of the offending entry.
    pub msg_type: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(msg_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self { msg_type: msg_type.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Translation configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse translation configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.msg_type, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One plural variation: used when the count is at least `count` and below
/// the next case's `count`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PluralCase {
    pub count: u32,
    pub msg: String,
}

impl PluralCase {
    #[must_use]
    pub fn new(count: u32, msg: impl Into<String>) -> Self {
        Self { count, msg: msg.into() }
    }
}

/// Configured translation of one message type.
///
/// Templates substitute named argument values in place of `%{argKey}`.
/// Plural cases must be given in ascending `count` order; the last case
/// whose `count` is <= the actual count is chosen. For example:
///
/// ```json
/// [
///   {"count": 1, "msg": "found one thing in %{otherArg}"},
///   {"count": 2, "msg": "found %{thingCount} things in %{otherArg}"}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MsgConfig {
    NonPlural(String),
    Plural(Vec<PluralCase>),
}

impl From<&str> for MsgConfig {
    fn from(template: &str) -> Self {
        Self::NonPlural(template.to_string())
    }
}

impl From<String> for MsgConfig {
    fn from(template: String) -> Self {
        Self::NonPlural(template)
    }
}

impl From<Vec<PluralCase>> for MsgConfig {
    fn from(cases: Vec<PluralCase>) -> Self {
        Self::Plural(cases)
    }
}

impl<const N: usize> From<[PluralCase; N]> for MsgConfig {
    fn from(cases: [PluralCase; N]) -> Self {
        Self::Plural(cases.into())
    }
}

impl MsgConfig {
    /// Problems with this entry, as human-readable messages.
    fn problems(&self) -> Vec<String> {
        let Self::Plural(cases) = self else {
            return Vec::new();
        };

        if cases.is_empty() {
            return vec!["Plural configuration has no cases".to_string()];
        }

        cases
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| match pair {
                [prev, next] if next.count <= prev.count => Some(format!(
                    "Plural cases must be in strictly ascending count order; \
                     case {} (count {}) follows count {}",
                    index + 1,
                    next.count,
                    prev.count
                )),
                _ => None,
            })
            .collect()
    }
}

/// All translated messages of one locale, keyed by message type.
///
/// Deserializes from a JSON object whose values are either a template string
/// or an array of plural cases:
///
/// ```
/// use msg_translator::SimpleTranslatedMsgConfigs;
///
/// let configs = SimpleTranslatedMsgConfigs::<String>::from_json_str(
///     r#"{
///         "greeting": "hello, %{name}!",
///         "apples": [
///             {"count": 1, "msg": "one apple"},
///             {"count": 2, "msg": "%{n} apples"}
///         ]
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(configs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(
    transparent,
    bound(serialize = "K: Serialize", deserialize = "K: Deserialize<'de> + Eq + Hash")
)]
pub struct SimpleTranslatedMsgConfigs<K: Eq + Hash> {
    /// Message type key -> configured translation.
    configs: HashMap<K, MsgConfig>,
}

impl<K: Eq + Hash> Default for SimpleTranslatedMsgConfigs<K> {
    fn default() -> Self {
        Self { configs: HashMap::new() }
    }
}

impl<K: Eq + Hash> SimpleTranslatedMsgConfigs<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a translation, builder style.
    #[must_use]
    pub fn with(mut self, msg_type: K, config: impl Into<MsgConfig>) -> Self {
        self.configs.insert(msg_type, config.into());
        self
    }

    /// Adds a translation, returning the one it replaced.
    pub fn insert(&mut self, msg_type: K, config: impl Into<MsgConfig>) -> Option<MsgConfig> {
        self.configs.insert(msg_type, config.into())
    }

    #[must_use]
    pub fn get(&self, msg_type: &K) -> Option<&MsgConfig> {
        self.configs.get(msg_type)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.configs.keys()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, MsgConfig> {
        self.configs.iter()
    }

    /// Re-keys the catalog into a wider key type, so it can be merged with
    /// catalogs of other message type sets.
    #[must_use]
    pub fn widen<U>(self) -> SimpleTranslatedMsgConfigs<U>
    where
        U: From<K> + Eq + Hash,
    {
        self.configs.into_iter().map(|(key, config)| (U::from(key), config)).collect()
    }
}

impl<K: Eq + Hash + DeserializeOwned> SimpleTranslatedMsgConfigs<K> {
    /// Parses a catalog from an already loaded JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Eq + Hash + Display> SimpleTranslatedMsgConfigs<K> {
    /// Checks that every plural configuration is non-empty and strictly
    /// ascending by `count`.
    ///
    /// # Errors
    /// Returns every problem found, ordered by message type.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors: Vec<ValidationError> = self
            .configs
            .iter()
            .flat_map(|(msg_type, config)| {
                config.problems().into_iter().map(move |problem| {
                    ValidationError::new(msg_type.to_string(), problem)
                })
            })
            .collect();

        if errors.is_empty() {
            return Ok(());
        }
        errors.sort_by(|a, b| a.msg_type.cmp(&b.msg_type));
        Err(errors)
    }

    /// Like [`validate`](Self::validate), and additionally checks that every
    /// key of `expected` has a translation.
    ///
    /// # Errors
    /// Returns every problem found, ordered by message type.
    pub fn validate_complete<'a, I>(&self, expected: I) -> Result<(), Vec<ValidationError>>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        let mut errors = self.validate().err().unwrap_or_default();
        errors.extend(
            expected
                .into_iter()
                .filter(|msg_type| !self.configs.contains_key(*msg_type))
                .map(|msg_type| ValidationError::new(msg_type.to_string(), "Missing translation")),
        );

        if errors.is_empty() {
            return Ok(());
        }
        errors.sort_by(|a, b| a.msg_type.cmp(&b.msg_type));
        Err(errors)
    }
}

impl<K: Eq + Hash> FromIterator<(K, MsgConfig)> for SimpleTranslatedMsgConfigs<K> {
    fn from_iter<I: IntoIterator<Item = (K, MsgConfig)>>(iter: I) -> Self {
        Self { configs: iter.into_iter().collect() }
    }
}

impl<K: Eq + Hash> Extend<(K, MsgConfig)> for SimpleTranslatedMsgConfigs<K> {
    fn extend<I: IntoIterator<Item = (K, MsgConfig)>>(&mut self, iter: I) {
        self.configs.extend(iter);
    }
}

impl<K: Eq + Hash> IntoIterator for SimpleTranslatedMsgConfigs<K> {
    type Item = (K, MsgConfig);
    type IntoIter = hash_map::IntoIter<K, MsgConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.configs.into_iter()
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a SimpleTranslatedMsgConfigs<K> {
    type Item = (&'a K, &'a MsgConfig);
    type IntoIter = hash_map::Iter<'a, K, MsgConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.configs.iter()
    }
}
