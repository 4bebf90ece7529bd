//! Request and response shapes of the Papago APIs.

use serde::{Deserialize, Serialize};

/// Body of `POST /nmt/v1/translation`.
#[derive(Debug, Serialize)]
pub(crate) struct TranslationBody<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub text: &'a str,
}

/// Body of `POST /langs/v1/dect`.
#[derive(Debug, Serialize)]
pub(crate) struct DetectLanguageBody<'a> {
    pub query: &'a str,
}

/// Raw response of a translation call: the result sits inside a nested
/// `message.result` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    /// Envelope wrapping the actual result.
    pub message: TranslationMessage,
}

/// Envelope of a translation response.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationMessage {
    /// The translation result.
    pub result: TranslationResult,
}

/// Inner result of a translation response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    /// Language the text was translated from.
    pub src_lang_type: String,
    /// Language the text was translated into.
    pub tar_lang_type: String,
    /// The translated text.
    pub translated_text: String,
}

/// Raw response of a language detection call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectLanguageResponse {
    /// Detected language code, e.g. `ko`.
    pub lang_code: String,
}

/// Raw response of a romanization call.
#[derive(Debug, Clone, Deserialize)]
pub struct RomanizationResponse {
    /// Result groups, best match first.
    #[serde(rename = "aResult")]
    pub result: Vec<RomanizationGroup>,
}

/// One result group of a romanization response.
#[derive(Debug, Clone, Deserialize)]
pub struct RomanizationGroup {
    /// Romanized family name the group was built around.
    #[serde(rename = "sFirstName")]
    pub first_name: String,
    /// Candidate spellings, highest score first.
    #[serde(rename = "aItems")]
    pub items: Vec<RomanizationCandidate>,
}

/// One candidate spelling of a romanized name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RomanizationCandidate {
    /// Romanized full name.
    pub name: String,
    /// Relative frequency score, stringified by the provider.
    pub score: String,
}

/// Normalized translation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Language the text was translated from.
    pub source: String,
    /// Language the text was translated into.
    pub target: String,
    /// The translated text.
    pub translated: String,
}

/// Normalized language detection result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLanguage {
    /// Detected language code.
    pub detected: String,
}

/// Normalized romanization result: the first group's romanized family name
/// and its highest-score candidate. Later groups and candidates are
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanizedName {
    /// Romanized family name.
    pub first_name: String,
    /// Highest-score candidate for the full name.
    pub best_matched: RomanizationCandidate,
}
