//! Client-side validation rules, evaluated before any network call.
//!
//! Rules are ordered and the first failure wins; each failure message is a
//! literal user-facing string callers may match on.

use crate::constants::MAX_TRANSLATION_TEXT_LEN;
use crate::language::Language;
use ncp_core::Error;
use once_cell::sync::Lazy;
use regex::Regex;

// One or more Hangul syllables, nothing else. No whitespace, no Latin.
static KOREAN_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[가-힣]+$").expect("valid hangul pattern"));

/// Rules for the translation operation, in priority order.
pub(crate) fn translation(source: &str, target: &str, text: &str) -> Option<Error> {
    if source.is_empty() {
        return Some(Error::validation(
            "Source parameter is needed, please check it",
        ));
    }
    let Some(source) = Language::from_code(source) else {
        return Some(Error::validation(
            "Unsupported source language, please check it",
        ));
    };
    if target.is_empty() {
        return Some(Error::validation(
            "Target parameter is needed, please check it",
        ));
    }
    let Some(target) = Language::from_code(target) else {
        return Some(Error::validation(
            "Unsupported target language, please check it",
        ));
    };
    if source == target {
        return Some(Error::validation(
            "Source and target are identical, please check it",
        ));
    }
    if !source.translates_to(target) {
        return Some(Error::validation(
            "There is no source–to-target translator, please check it",
        ));
    }
    if text.is_empty() {
        return Some(Error::validation(
            "Text parameter is needed, please check it",
        ));
    }
    if text.chars().count() > MAX_TRANSLATION_TEXT_LEN {
        return Some(Error::validation(
            "Text parameter exceeds the maximum length, please check it",
        ));
    }
    None
}

/// Rule for the language detection operation.
pub(crate) fn detect_language(text: &str) -> Option<Error> {
    if text.is_empty() {
        return Some(Error::validation("Empty Text, please check it"));
    }
    None
}

/// Rules for the Korean name romanization operation.
pub(crate) fn korean_name(name: &str) -> Option<Error> {
    if name.is_empty() {
        return Some(Error::validation(
            "KoreanName parameter is needed, please check it",
        ));
    }
    if !KOREAN_NAME.is_match(name) {
        return Some(Error::validation(
            "Only full Korean name parameter with no white space is allowed, please check it",
        ));
    }
    None
}
