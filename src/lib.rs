//! msg-translator
//!
//! Runtime message translation: a [`Translator`] contract and a map-backed
//! [`SimpleTranslator`] that resolves a typed message key plus named
//! arguments into a locale-specific string, including plural selection.

pub mod error;
pub mod message;
pub mod simple;
mod test_utils;
pub mod translator;

pub use error::TranslateError;
pub use message::{
    ArgValue,
    Args,
    TransMsg,
};
pub use simple::{
    ConfigError,
    MsgConfig,
    PluralCase,
    SimpleTranslatedMsgConfigs,
    SimpleTranslator,
    ValidationError,
};
pub use translator::Translator;
