//! In-memory, map-based translator.
/// Locale configuration types
mod config;
/// `%{name}` placeholder substitution
mod interpolate;
/// Plural case selection
mod plural;
/// `SimpleTranslator` itself
mod translator;

pub use config::{
    ConfigError,
    MsgConfig,
    PluralCase,
    SimpleTranslatedMsgConfigs,
    ValidationError,
};
pub use translator::SimpleTranslator;
