//! Localized UI strings.
//!
//! Every string the view shows comes from [`translate`], a pure lookup in a
//! single `(language, key)` table.

mod table;

use serde::{Deserialize, Serialize};

/// Supported interface languages, in selector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    Latin,
    Italian,
    Portuguese,
    French,
    Asturiano,
    Gaelic,
    Euskara,
    Japanese,
    Russian,
    Tuvan,
    Amharic,
    Hebrew,
}

impl Language {
    pub const COUNT: usize = 14;

    pub const ALL: [Language; Language::COUNT] = [
        Language::English,
        Language::Spanish,
        Language::Latin,
        Language::Italian,
        Language::Portuguese,
        Language::French,
        Language::Asturiano,
        Language::Gaelic,
        Language::Euskara,
        Language::Japanese,
        Language::Russian,
        Language::Tuvan,
        Language::Amharic,
        Language::Hebrew,
    ];

    pub fn from_index(index: usize) -> Option<Language> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Language tag written to the host document.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Latin => "la",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::French => "fr",
            Language::Asturiano => "ast",
            Language::Gaelic => "gd",
            Language::Euskara => "eu",
            Language::Japanese => "ja",
            Language::Russian => "ru",
            Language::Tuvan => "tyv",
            Language::Amharic => "am",
            Language::Hebrew => "he",
        }
    }

    /// Value carried by the language selector.
    pub fn slug(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::Latin => "latin",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::French => "french",
            Language::Asturiano => "asturiano",
            Language::Gaelic => "gaelic",
            Language::Euskara => "euskara",
            Language::Japanese => "japanese",
            Language::Russian => "russian",
            Language::Tuvan => "tuvan",
            Language::Amharic => "amharic",
            Language::Hebrew => "hebrew",
        }
    }

    /// Parse a selector value. Unknown values select English.
    pub fn from_slug(value: &str) -> Language {
        Self::ALL
            .into_iter()
            .find(|language| language.slug() == value)
            .unwrap_or(Language::English)
    }

    /// The language's name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Latin => "Latin",
            Language::Italian => "Italiano",
            Language::Portuguese => "Português",
            Language::French => "Français",
            Language::Asturiano => "Asturianu",
            Language::Gaelic => "Gàidhlig",
            Language::Euskara => "Euskara",
            Language::Japanese => "日本語",
            Language::Russian => "Русский",
            Language::Tuvan => "Тыва дыл",
            Language::Amharic => "አማርኛ",
            Language::Hebrew => "עברית",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇬🇧🇺🇸",
            Language::Spanish => "🇪🇸🇦🇷",
            Language::Latin | Language::Italian => "🇮🇹",
            Language::Portuguese => "🇧🇷🇵🇹",
            Language::French => "🇫🇷",
            Language::Asturiano | Language::Euskara => "🇪🇸",
            Language::Gaelic => "🇮🇪🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
            Language::Japanese => "🇯🇵",
            Language::Russian | Language::Tuvan => "🇷🇺",
            Language::Amharic => "🇪🇹",
            Language::Hebrew => "🇮🇱",
        }
    }
}

/// Message keys, in table column order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    AppTitle,
    UploadImage,
    CustomizeIt,
    GridSize,
    Rectangles,
    GridColor,
    GridThickness,
    GridOpacity,
    OriginalImage,
    GriddedImage,
    DownloadGriddedImage,
    Nice,
    NiceCounter,
    NoImageYet,
    LanguageLabel,
    FileOperations,
    GridParameters,
    Actions,
    AppSubtitle,
    GridPreviewPlaceholder,
    UploadPlaceholder,
    StatusReady,
}

impl TextKey {
    pub const COUNT: usize = 22;

    pub const ALL: [TextKey; TextKey::COUNT] = [
        TextKey::AppTitle,
        TextKey::UploadImage,
        TextKey::CustomizeIt,
        TextKey::GridSize,
        TextKey::Rectangles,
        TextKey::GridColor,
        TextKey::GridThickness,
        TextKey::GridOpacity,
        TextKey::OriginalImage,
        TextKey::GriddedImage,
        TextKey::DownloadGriddedImage,
        TextKey::Nice,
        TextKey::NiceCounter,
        TextKey::NoImageYet,
        TextKey::LanguageLabel,
        TextKey::FileOperations,
        TextKey::GridParameters,
        TextKey::Actions,
        TextKey::AppSubtitle,
        TextKey::GridPreviewPlaceholder,
        TextKey::UploadPlaceholder,
        TextKey::StatusReady,
    ];

    /// Look a key up by column index. Unknown indices resolve to
    /// [`TextKey::StatusReady`].
    pub fn from_index(index: usize) -> TextKey {
        Self::ALL
            .get(index)
            .copied()
            .unwrap_or(TextKey::StatusReady)
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Localized text for `key` in `language`.
pub fn translate(language: Language, key: TextKey) -> &'static str {
    table::TABLE[language.index()][key.index()]
}
