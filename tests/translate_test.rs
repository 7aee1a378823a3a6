//! 公開 API を通した翻訳のテスト

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::collections::HashMap;
use std::sync::Arc;

use msg_translator::{
    ConfigError,
    SimpleTranslatedMsgConfigs,
    SimpleTranslator,
    TransMsg,
    TranslateError,
    Translator,
};
use pretty_assertions::assert_eq;

const EN_JSON: &str = r#"{
    "inbox.title": "Inbox",
    "inbox.greeting": "Welcome back, %{userName}!",
    "inbox.storage": "%{used}% of your storage is in use",
    "inbox.unread": [
        {"count": 0, "msg": "No unread messages"},
        {"count": 1, "msg": "One unread message"},
        {"count": 2, "msg": "%{unreadCount} unread messages"}
    ]
}"#;

const JA_JSON: &str = r#"{
    "inbox.title": "受信トレイ",
    "inbox.greeting": "おかえりなさい、%{userName}さん！",
    "inbox.storage": "ストレージの %{used}% を使用中",
    "inbox.unread": [
        {"count": 1, "msg": "未読メッセージが %{unreadCount} 件あります"}
    ]
}"#;

fn translators() -> HashMap<&'static str, Arc<dyn Translator<String> + Send + Sync>> {
    [("en", EN_JSON), ("ja", JA_JSON)]
        .into_iter()
        .map(|(locale, json)| {
            let configs = SimpleTranslatedMsgConfigs::<String>::from_json_str(json).unwrap();
            let translator: Arc<dyn Translator<String> + Send + Sync> =
                Arc::new(SimpleTranslator::try_new(configs).unwrap());
            (locale, translator)
        })
        .collect()
}

fn unread(count: u32) -> TransMsg<String> {
    TransMsg::new("inbox.unread".to_string()).arg("unreadCount", count).plural_by("unreadCount")
}

#[test]
fn test_translates_every_locale() {
    let translators = translators();
    let greeting = TransMsg::new("inbox.greeting".to_string()).arg("userName", "Alice");

    assert_eq!(translators["en"].translate(&greeting).unwrap(), "Welcome back, Alice!");
    assert_eq!(translators["ja"].translate(&greeting).unwrap(), "おかえりなさい、Aliceさん！");
}

#[test]
fn test_plain_message_is_returned_unchanged() {
    let translators = translators();
    let title = TransMsg::new("inbox.title".to_string());

    assert_eq!(translators["en"].translate(&title).unwrap(), "Inbox");
    assert_eq!(translators["ja"].translate(&title).unwrap(), "受信トレイ");
}

#[test]
fn test_literal_percent_is_preserved() {
    let translators = translators();
    let storage = TransMsg::new("inbox.storage".to_string()).arg("used", 85);

    assert_eq!(translators["en"].translate(&storage).unwrap(), "85% of your storage is in use");
    assert_eq!(translators["ja"].translate(&storage).unwrap(), "ストレージの 85% を使用中");
}

#[test]
fn test_plural_selection_per_locale() {
    let translators = translators();

    let en: Vec<String> =
        [0, 1, 2, 40].into_iter().map(|n| translators["en"].translate(&unread(n)).unwrap()).collect();
    assert_eq!(
        en,
        vec![
            "No unread messages",
            "One unread message",
            "2 unread messages",
            "40 unread messages",
        ]
    );

    let ja: Vec<String> =
        [1, 2, 40].into_iter().map(|n| translators["ja"].translate(&unread(n)).unwrap()).collect();
    assert_eq!(
        ja,
        vec![
            "未読メッセージが 1 件あります",
            "未読メッセージが 2 件あります",
            "未読メッセージが 40 件あります",
        ]
    );
}

#[test]
fn test_count_below_every_threshold_fails() {
    let translators = translators();

    let error = translators["ja"].translate(&unread(0)).unwrap_err();

    assert_eq!(
        error,
        TranslateError::NoMatchingPluralCase { msg_type: "inbox.unread".to_string(), count: 0.0 }
    );
}

#[test]
fn test_unknown_message_type_fails() {
    let translators = translators();

    let error = translators["en"].translate(&TransMsg::new("inbox.archive".to_string())).unwrap_err();

    assert_eq!(error.to_string(), "missing translation for \"inbox.archive\"");
}

#[test]
fn test_unordered_catalog_is_rejected() {
    let json = r#"{"inbox.unread": [{"count": 2, "msg": "many"}, {"count": 1, "msg": "one"}]}"#;
    let configs = SimpleTranslatedMsgConfigs::<String>::from_json_str(json).unwrap();

    let Err(error) = SimpleTranslator::try_new(configs) else {
        panic!("expected an unordered catalog to be rejected");
    };

    assert!(matches!(&error, ConfigError::ValidationErrors(errors) if errors.len() == 1));
    assert!(error.to_string().contains("1. inbox.unread - Plural cases must be"));
}

#[test]
fn test_malformed_catalog_is_a_parse_error() {
    let result = SimpleTranslatedMsgConfigs::<String>::from_json_str(r#"{"inbox.title": 42}"#);

    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}
