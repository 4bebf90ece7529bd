//! Facade-level tests against a counting stub transport.

use bytes::Bytes;
use ncp_core::{Context, ErrorKind, HttpSend, TransportError};
use ncp_papago::{Language, OpenApiAuth, PapagoClient};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Stub transport replaying one canned response and counting dispatches.
#[derive(Debug)]
struct StubHttpSend {
    status: u16,
    body: &'static str,
    calls: Arc<AtomicUsize>,
}

#[async_trait::async_trait]
impl HttpSend for StubHttpSend {
    async fn http_send(
        &self,
        _req: http::Request<Bytes>,
    ) -> Result<http::Response<Bytes>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(http::Response::builder()
            .status(self.status)
            .body(Bytes::from_static(self.body.as_bytes()))
            .unwrap())
    }
}

fn client(status: u16, body: &'static str) -> (PapagoClient, Arc<AtomicUsize>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let calls = Arc::new(AtomicUsize::new(0));
    let ctx = Context::new().with_http_send(StubHttpSend {
        status,
        body,
        calls: calls.clone(),
    });
    let client = PapagoClient::new(ctx, OpenApiAuth::new("clientId", "clientSecret"))
        .with_base_url("http://papago.test.com");
    (client, calls)
}

#[tokio::test]
async fn test_translation_normalizes_nested_envelope() {
    let (client, calls) = client(
        200,
        r#"{
            "message": {
                "@type": "response",
                "@service": "naverservice.nmt.proxy",
                "@version": "1.0.0",
                "result": {
                    "srcLangType": "ko",
                    "tarLangType": "en",
                    "translatedText": "hello"
                }
            }
        }"#,
    );

    let resp = client.translation("ko", "en", "안녕하세요").await.unwrap();
    assert_eq!(resp.normalized.source, "ko");
    assert_eq!(resp.normalized.target, "en");
    assert_eq!(resp.normalized.translated, "hello");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_translation_rejects_unreachable_pair_without_dispatch() {
    let (client, calls) = client(200, "{}");

    let err = client.translation("vi", "en", "xin chào").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "There is no source–to-target translator, please check it"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_translation_validation_messages() {
    let (client, calls) = client(200, "{}");

    let cases = [
        (("", "en", "x"), "Source parameter is needed, please check it"),
        (("xx", "en", "x"), "Unsupported source language, please check it"),
        (("ko", "", "x"), "Target parameter is needed, please check it"),
        (("ko", "xx", "x"), "Unsupported target language, please check it"),
        (("ko", "ko", "x"), "Source and target are identical, please check it"),
        (("ko", "en", ""), "Text parameter is needed, please check it"),
    ];
    for ((source, target, text), expected) in cases {
        let err = client.translation(source, target, text).await.unwrap_err();
        assert_eq!(err.to_string(), expected);
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    let long = "가".repeat(5001);
    let err = client.translation("ko", "en", &long).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Text parameter exceeds the maximum length, please check it"
    );

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_supported_pairs_reach_the_transport() {
    for source in [Language::Korean, Language::French, Language::Japanese] {
        for target in source.supported_targets() {
            let (client, calls) = client(
                200,
                r#"{
                    "message": {
                        "result": {
                            "srcLangType": "xx",
                            "tarLangType": "yy",
                            "translatedText": "zz"
                        }
                    }
                }"#,
            );
            client
                .translation(source.code(), target.code(), "text")
                .await
                .unwrap();
            assert_eq!(
                calls.load(Ordering::SeqCst),
                1,
                "{} -> {} should dispatch",
                source.code(),
                target.code()
            );
        }
    }
}

#[tokio::test]
async fn test_detect_language() {
    let (client, calls) = client(200, r#"{ "langCode": "ko" }"#);

    let resp = client.detect_language("안녕하세요").await.unwrap();
    assert_eq!(resp.data.lang_code, "ko");
    assert_eq!(resp.normalized.detected, "ko");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_detect_language_rejects_empty_text() {
    let (client, calls) = client(200, "{}");

    let err = client.detect_language("").await.unwrap_err();
    assert_eq!(err.to_string(), "Empty Text, please check it");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_romanizer_picks_best_candidate() {
    let (client, calls) = client(
        200,
        r#"{
            "aResult": [
                {
                    "sFirstName": "허",
                    "aItems": [
                        { "name": "Heo Jae", "score": "100" },
                        { "name": "Huh Jae", "score": "60" },
                        { "name": "Hur Jae", "score": "45" },
                        { "name": "Hu Jae", "score": "26" },
                        { "name": "Heo Je", "score": "10" }
                    ]
                }
            ]
        }"#,
    );

    let resp = client.korean_name_romanizer("허재").await.unwrap();
    assert_eq!(resp.normalized.first_name, "허");
    assert_eq!(resp.normalized.best_matched.name, "Heo Jae");
    assert_eq!(resp.normalized.best_matched.score, "100");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_romanizer_rejects_invalid_names_without_dispatch() {
    let (client, calls) = client(200, "{}");

    let err = client.korean_name_romanizer("").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "KoreanName parameter is needed, please check it"
    );

    for name in ["hubtwork", "허 재"] {
        let err = client.korean_name_romanizer(name).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only full Korean name parameter with no white space is allowed, please check it"
        );
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_romanizer_empty_result_is_malformed() {
    let (client, _) = client(200, r#"{ "aResult": [] }"#);

    let err = client.korean_name_romanizer("허재").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn test_rejected_key_pair_surfaces_status() {
    let (client, _) = client(401, r#"{ "error": "Authentication Failed" }"#);

    let err = client.translation("ko", "en", "안녕하세요").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::HttpStatus(401));
    assert_eq!(err.to_string(), "Unexpected HTTP Status Code : 401");
}
