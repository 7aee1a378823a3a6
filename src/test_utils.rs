//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される翻訳カタログとメッセージ型を提供します。
#![cfg(test)]

use std::fmt;

use crate::message::{
    ArgValue,
    TransMsg,
};
use crate::simple::{
    PluralCase,
    SimpleTranslatedMsgConfigs,
};

/// テスト用のメッセージ型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TestMsgType {
    NoArgs,
    HelloName,
    ProgressPct,
    CoupleFishCount,
}

impl TestMsgType {
    pub(crate) const ALL: [Self; 4] =
        [Self::NoArgs, Self::HelloName, Self::ProgressPct, Self::CoupleFishCount];

    const fn as_str(self) -> &'static str {
        match self {
            Self::NoArgs => "test.no_args",
            Self::HelloName => "test.hello_name",
            Self::ProgressPct => "test.progress_pct",
            Self::CoupleFishCount => "test.couple_fishCount",
        }
    }
}

impl fmt::Display for TestMsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 別モジュールを想定した追加のメッセージ型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum TestMsgType2 {
    AddlMsg,
}

impl fmt::Display for TestMsgType2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddlMsg => f.write_str("test2.addl"),
        }
    }
}

/// `TestMsgType` と `TestMsgType2` の和
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum UnionMsgType {
    Test(TestMsgType),
    Test2(TestMsgType2),
}

impl From<TestMsgType> for UnionMsgType {
    fn from(msg_type: TestMsgType) -> Self {
        Self::Test(msg_type)
    }
}

impl From<TestMsgType2> for UnionMsgType {
    fn from(msg_type: TestMsgType2) -> Self {
        Self::Test2(msg_type)
    }
}

impl fmt::Display for UnionMsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test(msg_type) => fmt::Display::fmt(msg_type, f),
            Self::Test2(msg_type) => fmt::Display::fmt(msg_type, f),
        }
    }
}

/// 英語のカタログ（0, 1, 2, 3+ の複数形）
pub(crate) fn en_config() -> SimpleTranslatedMsgConfigs<TestMsgType> {
    SimpleTranslatedMsgConfigs::new()
        .with(TestMsgType::NoArgs, "a simple message with no arguments")
        .with(TestMsgType::HelloName, "hello, %{personName}!")
        .with(TestMsgType::ProgressPct, "progress: %{pct}%")
        .with(
            TestMsgType::CoupleFishCount,
            [
                PluralCase::new(0, "%{person1Name} and %{person2Name}, you have no fish"),
                PluralCase::new(1, "%{person1Name} and %{person2Name}, you have a fish"),
                PluralCase::new(2, "%{person1Name} and %{person2Name}, you have two fish"),
                PluralCase::new(3, "%{person1Name} and %{person2Name}, you have %{fishCount} fish"),
            ],
        )
}

/// スペイン語のカタログ
///
/// 0 のケースを省略し、2 と 3+ を区別しない。
pub(crate) fn es_config() -> SimpleTranslatedMsgConfigs<TestMsgType> {
    SimpleTranslatedMsgConfigs::new()
        .with(TestMsgType::NoArgs, "un mensaje simple sin argumentos")
        .with(TestMsgType::HelloName, "hola, %{personName}!")
        .with(TestMsgType::ProgressPct, "progreso: %{pct}%")
        .with(
            TestMsgType::CoupleFishCount,
            [
                PluralCase::new(1, "%{person1Name} y %{person2Name}, tienen un pez"),
                PluralCase::new(2, "%{person1Name} y %{person2Name}, tienen %{fishCount} peces"),
            ],
        )
}

/// 英語のカタログに `TestMsgType2` を加えたもの
pub(crate) fn en_config2() -> SimpleTranslatedMsgConfigs<UnionMsgType> {
    en_config()
        .widen::<UnionMsgType>()
        .with(TestMsgType2::AddlMsg.into(), "An additional message with %{arg}")
}

/// `fishCount` で複数形を選ぶ魚のメッセージを作成する
pub(crate) fn fish_msg(fish_count: impl Into<ArgValue>) -> TransMsg<TestMsgType> {
    TransMsg::new(TestMsgType::CoupleFishCount)
        .arg("person1Name", "Alice")
        .arg("person2Name", "Bob")
        .arg("fishCount", fish_count)
        .plural_by("fishCount")
}
