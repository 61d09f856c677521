//! Remote translation providers.

use po_core::{PoError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// One remote translation API.
pub trait TranslationProvider: Send + Sync {
    fn name(&self) -> &'static str;
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Blocking client built on first request, shared by every provider.
pub struct HttpClient {
    timeout: Duration,
    inner: OnceLock<Client>,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            inner: OnceLock::new(),
        }
    }

    fn get(&self) -> Result<&Client> {
        if let Some(client) = self.inner.get() {
            return Ok(client);
        }
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PoError::Translation(format!("failed to build HTTP client: {e}")))?;
        Ok(self.inner.get_or_init(|| client))
    }
}

fn request_error(provider: &str, err: reqwest::Error) -> PoError {
    PoError::Translation(format!("{provider}: {err}"))
}

/// MyMemory: `GET ?q=..&langpair=src|tgt`.
pub struct MyMemory {
    url: String,
    client: Arc<HttpClient>,
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseStatus")]
    response_status: Value,
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl MyMemory {
    pub fn new(url: String, client: Arc<HttpClient>) -> Self {
        Self { url, client }
    }
}

/// Extract the translation from a MyMemory response body.
pub fn parse_mymemory(body: &str) -> Result<String> {
    let resp: MyMemoryResponse = serde_json::from_str(body)?;
    let status_ok = match &resp.response_status {
        Value::Number(n) => n.as_i64() == Some(200),
        Value::String(s) => s == "200",
        _ => false,
    };
    if !status_ok {
        return Err(PoError::Translation(format!(
            "mymemory: unexpected status {}",
            resp.response_status
        )));
    }
    resp.response_data
        .map(|d| d.translated_text)
        .ok_or_else(|| PoError::Translation("mymemory: missing responseData".into()))
}

impl TranslationProvider for MyMemory {
    fn name(&self) -> &'static str {
        "mymemory"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let langpair = format!("{source}|{target}");
        let body = self
            .client
            .get()?
            .get(&self.url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| request_error(self.name(), e))?;
        parse_mymemory(&body)
    }
}

/// LibreTranslate: `POST {q, source, target}`.
pub struct LibreTranslate {
    url: String,
    client: Arc<HttpClient>,
}

#[derive(Deserialize)]
struct LibreTranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl LibreTranslate {
    pub fn new(url: String, client: Arc<HttpClient>) -> Self {
        Self { url, client }
    }
}

/// Extract the translation from a LibreTranslate response body.
pub fn parse_libretranslate(body: &str) -> Result<String> {
    let resp: LibreTranslateResponse = serde_json::from_str(body)?;
    Ok(resp.translated_text)
}

impl TranslationProvider for LibreTranslate {
    fn name(&self) -> &'static str {
        "libretranslate"
    }

    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let body = self
            .client
            .get()?
            .post(&self.url)
            .json(&json!({ "q": text, "source": source, "target": target }))
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| request_error(self.name(), e))?;
        parse_libretranslate(&body)
    }
}
