//! Map-backed [`Translator`] implementation.

use std::fmt::Display;
use std::hash::Hash;

use super::config::{
    ConfigError,
    SimpleTranslatedMsgConfigs,
};
use super::interpolate::replace_arg_values;
use super::plural::choose_plural_case;
use crate::error::TranslateError;
use crate::message::TransMsg;
use crate::translator::Translator;

/// A very simple [`Translator`] that is configured at construction time with
/// all translations of one locale.
///
/// The translator never mutates its catalog, so one instance can serve any
/// number of threads.
///
/// # Examples
/// ```
/// use msg_translator::{
///     PluralCase,
///     SimpleTranslatedMsgConfigs,
///     SimpleTranslator,
///     TransMsg,
///     Translator,
/// };
///
/// let configs = SimpleTranslatedMsgConfigs::new()
///     .with("greeting", "hello, %{name}!")
///     .with("apples", [PluralCase::new(1, "one apple"), PluralCase::new(2, "%{n} apples")]);
/// let translator = SimpleTranslator::new(configs);
///
/// let greeting = TransMsg::new("greeting").arg("name", "Alice");
/// assert_eq!(translator.translate(&greeting).unwrap(), "hello, Alice!");
///
/// let apples = TransMsg::new("apples").arg("n", 5).plural_by("n");
/// assert_eq!(translator.translate(&apples).unwrap(), "5 apples");
/// ```
#[derive(Debug, Clone)]
pub struct SimpleTranslator<K: Eq + Hash> {
    /// Every translated message of the locale.
    msg_configs: SimpleTranslatedMsgConfigs<K>,
}

impl<K: Eq + Hash> SimpleTranslator<K> {
    /// Creates a translator over `msg_configs` without checking it.
    ///
    /// Plural cases are expected in ascending `count` order; with any other
    /// order the chosen case is unspecified. Use [`try_new`](Self::try_new)
    /// to reject such catalogs up front.
    #[must_use]
    pub const fn new(msg_configs: SimpleTranslatedMsgConfigs<K>) -> Self {
        Self { msg_configs }
    }

    #[must_use]
    pub const fn msg_configs(&self) -> &SimpleTranslatedMsgConfigs<K> {
        &self.msg_configs
    }
}

impl<K: Eq + Hash + Display> SimpleTranslator<K> {
    /// Creates a translator after validating `msg_configs`.
    ///
    /// # Errors
    /// `ConfigError::ValidationErrors` if a plural configuration is empty or
    /// not strictly ascending by `count`.
    pub fn try_new(msg_configs: SimpleTranslatedMsgConfigs<K>) -> Result<Self, ConfigError> {
        tracing::debug!("Validating {} translated messages", msg_configs.len());

        if let Err(errors) = msg_configs.validate() {
            for error in &errors {
                tracing::warn!("{error}");
            }
            return Err(ConfigError::ValidationErrors(errors));
        }

        Ok(Self::new(msg_configs))
    }
}

impl<K: Eq + Hash + Display> Translator<K> for SimpleTranslator<K> {
    fn translate(&self, msg: &TransMsg<K>) -> Result<String, TranslateError> {
        tracing::trace!("Translating \"{}\"", msg.msg_type());

        let result = self
            .msg_configs
            .get(msg.msg_type())
            .ok_or_else(|| TranslateError::MissingTranslation {
                msg_type: msg.msg_type().to_string(),
            })
            .and_then(|config| choose_plural_case(msg, config))
            .and_then(|template| replace_arg_values(msg, template));

        if let Err(e) = &result {
            tracing::debug!("Translation failed: {e}");
        }

        result
    }
}
