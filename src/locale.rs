//! Static localization catalog. The active language is part of the app
//! state; changing it rebuilds every label in the sidebar.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
}

impl Language {
    pub fn from_tag(tag: &str) -> Language {
        match tag {
            "ja" => Language::Japanese,
            _ => Language::English,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Japanese => "ja",
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::English => Language::Japanese,
            Language::Japanese => Language::English,
        }
    }
}

pub struct Catalog {
    language: Language,
}

impl Catalog {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Exact lookup. Missing keys return `None`; callers decide the fallback.
    pub fn translate(&self, key: &str) -> Option<&'static str> {
        match self.language {
            Language::English => english(key),
            Language::Japanese => japanese(key).or_else(|| english(key)),
        }
    }

    /// Lookup with the key itself as fallback, for keys that double as
    /// raw display strings (user-named places).
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        self.translate(key).unwrap_or(key)
    }
}

/// The platform username, shown as the label of the home shortcut.
pub fn username() -> Option<String> {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .ok()
        .filter(|name| !name.is_empty())
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "group.shortcuts" => "Shortcuts",
        "group.places" => "Places",
        "group.extras" => "Environments",
        "shortcut.Documents" => "Documents",
        "shortcut.Downloads" => "Downloads",
        "shortcut.Pictures" => "Pictures",
        "shortcut.Music" => "Music",
        "shortcut.Videos" => "Videos",
        "shortcut.Desktop" => "Desktop",
        "confirm.navigation_failed" => "Navigation failed",
        "confirm.ok" => "OK",
        "confirm.yes" => "Yes",
        "confirm.no" => "No",
        "toolbar.split" => "Split",
        "toolbar.language" => "Language",
        _ => return None,
    })
}

fn japanese(key: &str) -> Option<&'static str> {
    Some(match key {
        "group.shortcuts" => "ショートカット",
        "group.places" => "場所",
        "group.extras" => "環境",
        "shortcut.Documents" => "ドキュメント",
        "shortcut.Downloads" => "ダウンロード",
        "shortcut.Pictures" => "ピクチャ",
        "shortcut.Music" => "ミュージック",
        "shortcut.Videos" => "ビデオ",
        "shortcut.Desktop" => "デスクトップ",
        "confirm.navigation_failed" => "移動に失敗しました",
        "confirm.ok" => "OK",
        "confirm.yes" => "はい",
        "confirm.no" => "いいえ",
        "toolbar.split" => "分割",
        "toolbar.language" => "言語",
        _ => return None,
    })
}
