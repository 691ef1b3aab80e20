use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use crate::client::pagination::FetchError;
use crate::config::ApiConfig;
use crate::{v_debug, v_error};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Anything that can return the raw body of a collection page.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn get_page(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct SwapiClient {
    client: reqwest::Client,
    api_log_path: Option<PathBuf>,
}

impl SwapiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(SwapiClient {
            client,
            api_log_path: None,
        })
    }

    pub fn set_api_log(&mut self, path: Option<PathBuf>) {
        self.api_log_path = path;
    }

    fn log_api_call(&self, method: &str, url: &str, response_status: u16, response_bytes: Option<usize>) {
        let Some(path) = &self.api_log_path else {
            return;
        };

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!(
            "[{timestamp}] {method} {url} -> {response_status} ({bytes})\n",
            timestamp = timestamp,
            method = method,
            url = url,
            response_status = response_status,
            bytes = response_bytes
                .map(|n| format!("{} bytes", n))
                .unwrap_or_else(|| "body not read".to_string()),
        );

        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| file.write_all(log_entry.as_bytes()));
        if let Err(e) = written {
            v_error!("⚠️ Could not write API log {}: {}", path.display(), e);
        }
    }
}

#[async_trait]
impl PageSource for SwapiClient {
    async fn get_page(&self, url: &str) -> Result<String, FetchError> {
        v_debug!("🌐 GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            self.log_api_call("GET", url, status.as_u16(), None);
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        self.log_api_call("GET", url, status.as_u16(), Some(body.len()));
        Ok(body)
    }
}
