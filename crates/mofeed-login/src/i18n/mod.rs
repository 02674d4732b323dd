//! Login page translations backed by compiled-in JSON bundles.
//!
//! # Design
//! - Bundles are parsed once per language and cached for the page lifetime.
//! - Lookups fall back to English, then to the message key name, and never fail.
//! - Text direction is a property of the language, not of the bundle.

use serde_json::Value;
use std::sync::LazyLock;

/// Languages offered by the login page selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// Arabic.
    Ar,
    /// English.
    En,
    /// Kurdish (Sorani / Central Kurdish).
    Ku,
}

impl Language {
    /// All supported languages in selector order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Ar, Self::En, Self::Ku]
    }

    /// Two-letter code used by the selector and the `lang` attribute.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
            Self::Ku => "ku",
        }
    }

    /// Text direction used when this language is active.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Ar | Self::Ku => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }

    /// Parse an exact, lowercase language code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ar" => Some(Self::Ar),
            "en" => Some(Self::En),
            "ku" => Some(Self::Ku),
            _ => None,
        }
    }

    /// Map a browser language tag (`ar-IQ`, `en-GB`, `ckb-IQ`) to a supported language.
    ///
    /// Tags are case-insensitive and `ckb` (Central Kurdish) maps to Kurdish.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        match lowered.split(['-', '_']).next().unwrap_or_default() {
            "ckb" => Some(Self::Ku),
            base => Self::from_code(base),
        }
    }
}

/// Default fallback language.
pub const DEFAULT_LANGUAGE: Language = Language::En;

/// Layout direction applied to the form container and document root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left-to-right.
    #[default]
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Direction for an arbitrary language code.
    ///
    /// Only the exact codes `ar` and `ku` are right-to-left.
    #[must_use]
    pub fn for_code(code: &str) -> Self {
        Language::from_code(code).map_or(Self::Ltr, Language::direction)
    }
}

/// Keys of the fixed login message table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Username or password left empty.
    PleaseFillFields,
    /// Server rejected the credentials.
    InvalidCredentials,
    /// Account is disabled or not allowed to log in.
    UserDisabled,
    /// Generic login failure.
    LoginError,
}

impl MessageKey {
    /// All keys in table order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::PleaseFillFields,
            Self::InvalidCredentials,
            Self::UserDisabled,
            Self::LoginError,
        ]
    }

    /// Key name as used in bundles.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PleaseFillFields => "please_fill_fields",
            Self::InvalidCredentials => "invalid_credentials",
            Self::UserDisabled => "user_disabled",
            Self::LoginError => "login_error",
        }
    }

    /// Parse a key name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|key| key.as_str() == name)
    }
}

/// Parsed translation tree for one language.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    /// Language backing this bundle.
    pub language: Language,
    tree: Value,
}

impl TranslationBundle {
    /// Parse the compiled-in bundle for `language`.
    ///
    /// A malformed bundle degrades to an empty tree so lookups fall back to English.
    #[must_use]
    pub fn new(language: Language) -> Self {
        let tree = serde_json::from_str(raw_bundle(language)).unwrap_or(Value::Null);
        Self { language, tree }
    }

    /// Cached bundle for `language`.
    #[must_use]
    pub fn get(language: Language) -> &'static Self {
        match language {
            Language::Ar => &AR,
            Language::En => &EN,
            Language::Ku => &KU,
        }
    }

    /// Resolve a dotted path (`section.key`) in this bundle only.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<String> {
        resolve(&self.tree, path)
    }

    /// Resolve a dotted path with English fallback and caller default.
    #[must_use]
    pub fn text(&self, path: &str, default: &str) -> String {
        self.lookup(path)
            .or_else(|| EN.lookup(path))
            .unwrap_or_else(|| default.to_string())
    }

    /// Localized login message for `key`.
    #[must_use]
    pub fn message(&self, key: MessageKey) -> String {
        self.text(&format!("login.{}", key.as_str()), key.as_str())
    }
}

static AR: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::Ar));
static EN: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::En));
static KU: LazyLock<TranslationBundle> = LazyLock::new(|| TranslationBundle::new(Language::Ku));

/// Localized message for a typed key.
#[must_use]
pub fn localize(key: MessageKey, language: Language) -> String {
    TranslationBundle::get(language).message(key)
}

/// Localized message for raw key and language strings.
///
/// Unknown languages resolve to English; unknown keys return the key name.
#[must_use]
pub fn localize_code(key: &str, language: &str) -> String {
    let language = Language::from_code(language).unwrap_or(DEFAULT_LANGUAGE);
    MessageKey::from_name(key).map_or_else(|| key.to_string(), |key| localize(key, language))
}

/// Candidate sources for the language shown when the login page opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitialLanguageHints<'a> {
    /// `lang` query parameter.
    pub query: Option<&'a str>,
    /// Preference stored earlier in this browser session.
    pub stored: Option<&'a str>,
    /// Value the server rendered into the selector.
    pub selector: Option<&'a str>,
    /// Browser language tag (`navigator.language`).
    pub browser: Option<&'a str>,
}

impl InitialLanguageHints<'_> {
    /// First supported language in priority order, else [`DEFAULT_LANGUAGE`].
    #[must_use]
    pub fn resolve(&self) -> Language {
        [self.query, self.stored, self.selector]
            .into_iter()
            .flatten()
            .find_map(Language::from_code)
            .or_else(|| self.browser.and_then(Language::from_lang_tag))
            .unwrap_or(DEFAULT_LANGUAGE)
    }
}

fn resolve(tree: &Value, path: &str) -> Option<String> {
    let mut node = tree;
    for segment in path.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_bundle(language: Language) -> &'static str {
    match language {
        Language::Ar => include_str!("../../i18n/ar.json"),
        Language::En => include_str!("../../i18n/en.json"),
        Language::Ku => include_str!("../../i18n/ku.json"),
    }
}
