use crate::providers::{parse_libretranslate, parse_mymemory, TranslationProvider};
use crate::*;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use po_core::config::TranslationConfig;
use po_core::{PoError, Result, Translator};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct Upper {
    calls: Arc<AtomicUsize>,
}

impl TranslationProvider for Upper {
    fn name(&self) -> &'static str {
        "upper"
    }
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(text.to_uppercase())
    }
}

struct Fails {
    calls: Arc<AtomicUsize>,
}

impl TranslationProvider for Fails {
    fn name(&self) -> &'static str {
        "fails"
    }
    fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(PoError::Translation("down".into()))
    }
}

struct Empty;

impl TranslationProvider for Empty {
    fn name(&self) -> &'static str {
        "empty"
    }
    fn translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok("  ".into())
    }
}

/// Fails on any chunk containing `needle`.
struct Picky {
    needle: &'static str,
}

impl TranslationProvider for Picky {
    fn name(&self) -> &'static str {
        "picky"
    }
    fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        if text.contains(self.needle) {
            Err(PoError::Translation("rejected".into()))
        } else {
            Ok(text.to_string())
        }
    }
}

fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}

// ========== Chunking ==========

#[test]
fn test_chunk_packs_words() {
    assert_eq!(chunk::split("a b c", 3), vec!["a b", "c"]);
    assert_eq!(chunk::split("um dois tres", 5), vec!["um", "dois", "tres"]);
}

#[test]
fn test_chunk_empty() {
    assert!(chunk::split("", 5).is_empty());
    assert!(chunk::split("   \n ", 5).is_empty());
}

#[test]
fn test_chunk_long_word() {
    assert_eq!(chunk::split("ab abcdefg", 3), vec!["ab", "abc", "def", "g"]);
}

#[test]
fn test_chunk_counts_chars() {
    assert_eq!(chunk::split("ação ação", 4), vec!["ação", "ação"]);
    assert_eq!(chunk::split("ação ação", 9), vec!["ação ação"]);
}

#[test]
fn test_chunk_limits_and_content() {
    let text = "o rato roeu a roupa do rei de roma e a rainha com raiva resolveu remendar";
    let chunks = chunk::split(text, 20);
    assert!(chunks.iter().all(|c| c.chars().count() <= 20));
    assert_eq!(chunks.join(" "), text);
}

// ========== Response parsing ==========

#[test]
fn test_parse_mymemory_ok() {
    let body = r#"{"responseStatus":200,"responseData":{"translatedText":"hello"}}"#;
    assert_eq!(parse_mymemory(body).unwrap(), "hello");
    let body = r#"{"responseStatus":"200","responseData":{"translatedText":"hi"}}"#;
    assert_eq!(parse_mymemory(body).unwrap(), "hi");
}

#[test]
fn test_parse_mymemory_bad_status() {
    let body = r#"{"responseStatus":403,"responseData":{"translatedText":"LIMIT EXCEEDED"}}"#;
    assert!(matches!(parse_mymemory(body), Err(PoError::Translation(_))));
}

#[test]
fn test_parse_mymemory_malformed() {
    assert!(matches!(parse_mymemory("not json"), Err(PoError::Serialization(_))));
    assert!(parse_mymemory(r#"{"responseStatus":200}"#).is_err());
}

#[test]
fn test_parse_libretranslate() {
    assert_eq!(
        parse_libretranslate(r#"{"translatedText":"cat"}"#).unwrap(),
        "cat"
    );
    assert!(parse_libretranslate(r#"{"error":"bad"}"#).is_err());
}

// ========== Fallback chain ==========

#[test]
fn test_first_provider_wins() {
    let (a, b) = (counter(), counter());
    let t = HttpTranslator::with_providers(
        vec![Box::new(Upper { calls: a.clone() }), Box::new(Fails { calls: b.clone() })],
        500,
    );
    assert_eq!(t.translate("gato", "pt", "en").unwrap(), "GATO");
    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 0);
}

#[test]
fn test_fallback_on_error() {
    let (a, b) = (counter(), counter());
    let t = HttpTranslator::with_providers(
        vec![Box::new(Fails { calls: a.clone() }), Box::new(Upper { calls: b.clone() })],
        500,
    );
    assert_eq!(t.translate("gato", "pt", "en").unwrap(), "GATO");
    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
}

#[test]
fn test_fallback_on_empty_translation() {
    let t = HttpTranslator::with_providers(
        vec![Box::new(Empty), Box::new(Upper { calls: counter() })],
        500,
    );
    assert_eq!(t.translate("gato", "pt", "en").unwrap(), "GATO");
}

#[test]
fn test_all_providers_fail() {
    let t = HttpTranslator::with_providers(
        vec![Box::new(Fails { calls: counter() }), Box::new(Fails { calls: counter() })],
        500,
    );
    assert!(matches!(t.translate("gato", "pt", "en"), Err(PoError::Translation(_))));
}

#[test]
fn test_chunks_translated_separately() {
    let calls = counter();
    let t = HttpTranslator::with_providers(vec![Box::new(Upper { calls: calls.clone() })], 5);
    assert_eq!(
        t.translate("um dois tres", "pt", "en").unwrap(),
        "UM DOIS TRES"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_one_failed_chunk_fails_call() {
    let t = HttpTranslator::with_providers(vec![Box::new(Picky { needle: "dois" })], 5);
    assert!(t.translate("um dois tres", "pt", "en").is_err());
    assert_eq!(t.translate("um tres", "pt", "en").unwrap(), "um tres");
}

#[test]
fn test_passthrough_without_calls() {
    let calls = counter();
    let t = HttpTranslator::with_providers(vec![Box::new(Upper { calls: calls.clone() })], 500);
    assert_eq!(t.translate("", "pt", "en").unwrap(), "");
    assert_eq!(t.translate("cat", "en", "en").unwrap(), "cat");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

// ========== HTTP providers ==========

async fn mymemory_ok(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let q = params.get("q").cloned().unwrap_or_default();
    let pair = params.get("langpair").cloned().unwrap_or_default();
    Json(json!({
        "responseStatus": 200,
        "responseData": { "translatedText": format!("{pair}:{q}") }
    }))
}

async fn mymemory_quota() -> Json<Value> {
    Json(json!({ "responseStatus": 403, "responseData": { "translatedText": "QUOTA" } }))
}

async fn libretranslate_ok(Json(body): Json<Value>) -> Json<Value> {
    let q = body["q"].as_str().unwrap_or_default();
    let target = body["target"].as_str().unwrap_or_default();
    Json(json!({ "translatedText": format!("{target}:{q}") }))
}

async fn unavailable() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

/// Serve `router` on an ephemeral port from a background runtime.
fn serve(router: Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

fn http_translator(base: &str) -> HttpTranslator {
    HttpTranslator::from_config(&TranslationConfig {
        mymemory_url: format!("{base}/get"),
        libretranslate_url: format!("{base}/translate"),
        timeout_secs: 5,
        char_limit: 500,
        source_language: "pt".into(),
    })
}

#[test]
fn test_http_mymemory() {
    let base = serve(
        Router::new()
            .route("/get", get(mymemory_ok))
            .route("/translate", post(libretranslate_ok)),
    );
    let t = http_translator(&base);
    assert_eq!(
        t.translate("olá mundo", "pt", "en").unwrap(),
        "pt|en:olá mundo"
    );
}

#[test]
fn test_http_fallback_on_server_error() {
    let base = serve(
        Router::new()
            .route("/get", get(unavailable))
            .route("/translate", post(libretranslate_ok)),
    );
    let t = http_translator(&base);
    assert_eq!(
        t.translate("olá mundo", "pt", "en").unwrap(),
        "en:olá mundo"
    );
}

#[test]
fn test_http_fallback_on_bad_status_field() {
    let base = serve(
        Router::new()
            .route("/get", get(mymemory_quota))
            .route("/translate", post(libretranslate_ok)),
    );
    let t = http_translator(&base);
    assert_eq!(t.translate("gato", "pt", "en").unwrap(), "en:gato");
}

#[test]
fn test_http_both_down() {
    let base = serve(
        Router::new()
            .route("/get", get(unavailable))
            .route("/translate", post(unavailable)),
    );
    let t = http_translator(&base);
    assert!(t.translate("gato", "pt", "en").is_err());
}
