//! Operation markers tying each Papago call to its raw payload and its
//! normalized shape.

use crate::types::{
    DetectLanguageResponse, DetectedLanguage, RomanizationResponse, RomanizedName, Translation,
    TranslationResponse,
};
use ncp_core::{Error, Operation, Result};

/// Translate text between two supported languages.
#[derive(Debug)]
pub struct Translate;

impl Operation for Translate {
    const NAME: &'static str = "papago.translation";
    type Raw = TranslationResponse;
    type Normalized = Translation;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        let result = &raw.message.result;
        Ok(Translation {
            source: result.src_lang_type.clone(),
            target: result.tar_lang_type.clone(),
            translated: result.translated_text.clone(),
        })
    }
}

/// Detect the language of a text.
#[derive(Debug)]
pub struct DetectLanguage;

impl Operation for DetectLanguage {
    const NAME: &'static str = "papago.detect_language";
    type Raw = DetectLanguageResponse;
    type Normalized = DetectedLanguage;

    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        Ok(DetectedLanguage {
            detected: raw.lang_code.clone(),
        })
    }
}

/// Romanize a Korean full name.
#[derive(Debug)]
pub struct RomanizeName;

impl Operation for RomanizeName {
    const NAME: &'static str = "papago.romanization";
    type Raw = RomanizationResponse;
    type Normalized = RomanizedName;

    // Only the first group and its first (highest-score) candidate survive
    // normalization. A payload without either is malformed.
    fn normalize(raw: &Self::Raw) -> Result<Self::Normalized> {
        let group = raw.result.first().ok_or_else(|| {
            Error::malformed_response(format!("{}: response carried no result group", Self::NAME))
        })?;
        let best = group.items.first().ok_or_else(|| {
            Error::malformed_response(format!("{}: result group carried no candidate", Self::NAME))
        })?;
        Ok(RomanizedName {
            first_name: group.first_name.clone(),
            best_matched: best.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ncp_core::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_romanize_takes_first_group_first_candidate() {
        let raw: RomanizationResponse = serde_json::from_str(
            r#"{
                "aResult": [
                    {
                        "sFirstName": "허",
                        "aItems": [
                            { "name": "Heo Jae", "score": "100" },
                            { "name": "Huh Jae", "score": "60" }
                        ]
                    },
                    {
                        "sFirstName": "헐",
                        "aItems": [ { "name": "Heol Jae", "score": "1" } ]
                    }
                ]
            }"#,
        )
        .unwrap();

        let normalized = RomanizeName::normalize(&raw).unwrap();
        assert_eq!(normalized.first_name, "허");
        assert_eq!(normalized.best_matched.name, "Heo Jae");
        assert_eq!(normalized.best_matched.score, "100");
    }

    #[test]
    fn test_romanize_rejects_empty_result() {
        let raw: RomanizationResponse = serde_json::from_str(r#"{ "aResult": [] }"#).unwrap();
        let err = RomanizeName::normalize(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);

        let raw: RomanizationResponse = serde_json::from_str(
            r#"{ "aResult": [ { "sFirstName": "허", "aItems": [] } ] }"#,
        )
        .unwrap();
        let err = RomanizeName::normalize(&raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
