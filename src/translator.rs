//! Translation contract.

use std::sync::Arc;

use crate::error::TranslateError;
use crate::message::TransMsg;

/// Type that can translate [`TransMsg`] values into user-visible strings.
///
/// Implementations are pure: the result depends only on the translator's
/// configuration and the input message.
pub trait Translator<K> {
    /// Translates the input message into a user-visible string.
    ///
    /// # Errors
    /// Fails if the translator has no translation for the message type, or
    /// if plural selection or argument substitution fails. No partially
    /// translated string is ever returned.
    fn translate(&self, msg: &TransMsg<K>) -> Result<String, TranslateError>;
}

impl<K, T: Translator<K> + ?Sized> Translator<K> for &T {
    fn translate(&self, msg: &TransMsg<K>) -> Result<String, TranslateError> {
        (**self).translate(msg)
    }
}

impl<K, T: Translator<K> + ?Sized> Translator<K> for Box<T> {
    fn translate(&self, msg: &TransMsg<K>) -> Result<String, TranslateError> {
        (**self).translate(msg)
    }
}

impl<K, T: Translator<K> + ?Sized> Translator<K> for Arc<T> {
    fn translate(&self, msg: &TransMsg<K>) -> Result<String, TranslateError> {
        (**self).translate(msg)
    }
}
