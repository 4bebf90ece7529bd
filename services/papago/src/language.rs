//! Languages Papago translates between, and which pairs have a translator.

/// A language the Papago translation API knows about.
///
/// Knowing a language is weaker than translating it: each source only has
/// translators for the targets listed by [`Language::supported_targets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Korean (`ko`).
    Korean,
    /// English (`en`).
    English,
    /// Japanese (`ja`).
    Japanese,
    /// Simplified Chinese (`zh-CN`).
    SimplifiedChinese,
    /// Traditional Chinese (`zh-TW`).
    TraditionalChinese,
    /// Vietnamese (`vi`).
    Vietnamese,
    /// Indonesian (`id`).
    Indonesian,
    /// Thai (`th`).
    Thai,
    /// German (`de`).
    German,
    /// Russian (`ru`).
    Russian,
    /// Spanish (`es`).
    Spanish,
    /// Italian (`it`).
    Italian,
    /// French (`fr`).
    French,
}

impl Language {
    /// The wire code of this language, as the API expects it.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::SimplifiedChinese => "zh-CN",
            Language::TraditionalChinese => "zh-TW",
            Language::Vietnamese => "vi",
            Language::Indonesian => "id",
            Language::Thai => "th",
            Language::German => "de",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::French => "fr",
        }
    }

    /// Parse a wire code. Codes are case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "ko" => Language::Korean,
            "en" => Language::English,
            "ja" => Language::Japanese,
            "zh-CN" => Language::SimplifiedChinese,
            "zh-TW" => Language::TraditionalChinese,
            "vi" => Language::Vietnamese,
            "id" => Language::Indonesian,
            "th" => Language::Thai,
            "de" => Language::German,
            "ru" => Language::Russian,
            "es" => Language::Spanish,
            "it" => Language::Italian,
            "fr" => Language::French,
            _ => return None,
        })
    }

    /// Targets this language has a translator for.
    pub fn supported_targets(&self) -> &'static [Language] {
        use Language::*;
        match self {
            Korean => &[
                English,
                Japanese,
                SimplifiedChinese,
                TraditionalChinese,
                Vietnamese,
                Indonesian,
                Thai,
                German,
                Russian,
                Spanish,
                Italian,
                French,
            ],
            English => &[Korean, Japanese, French, SimplifiedChinese, TraditionalChinese],
            Japanese => &[Korean, English, SimplifiedChinese, TraditionalChinese],
            SimplifiedChinese => &[Korean, English, Japanese, TraditionalChinese],
            TraditionalChinese => &[Korean, English, Japanese, SimplifiedChinese],
            Vietnamese | Indonesian | Thai | German | Russian | Spanish | Italian => &[Korean],
            French => &[Korean, English],
        }
    }

    /// Whether a translator exists from this language to `target`.
    pub fn translates_to(&self, target: Language) -> bool {
        self.supported_targets().contains(&target)
    }
}
