#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use async_trait::async_trait;
use intergalactic_airways::{FetchError, PageSource};
use serde_json::{json, Value};

pub const PEOPLE_URL: &str = "https://swapi.test/api/people/?page=1";
pub const STARSHIPS_URL: &str = "https://swapi.test/api/starships/?page=1";

enum MockPage {
    Body(String),
    Status(u16, &'static str),
}

/// In-memory page source keyed by URL; records every request in order.
#[derive(Default)]
pub struct MockSource {
    pages: HashMap<String, MockPage>,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, body: Value) -> Self {
        self.pages.insert(url.to_string(), MockPage::Body(body.to_string()));
        self
    }

    pub fn with_raw(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), MockPage::Body(body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, code: u16, reason: &'static str) -> Self {
        self.pages.insert(url.to_string(), MockPage::Status(code, reason));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for MockSource {
    async fn get_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(MockPage::Body(body)) => Ok(body.clone()),
            Some(MockPage::Status(code, reason)) => Err(FetchError::Status {
                code: *code,
                reason: reason.to_string(),
                url: url.to_string(),
            }),
            None => Err(FetchError::Status {
                code: 404,
                reason: "Not Found".to_string(),
                url: url.to_string(),
            }),
        }
    }
}

pub fn page(next: Option<&str>, results: Value) -> Value {
    json!({ "count": 0, "next": next, "previous": null, "results": results })
}

pub fn pilot(id: u32, name: &str) -> Value {
    json!({ "name": name, "url": pilot_url(id), "height": "180" })
}

pub fn pilot_url(id: u32) -> String {
    format!("https://swapi.test/api/people/{}/", id)
}

pub fn starship(name: &str, passengers: &str, pilot_ids: &[u32]) -> Value {
    let pilots: Vec<String> = pilot_ids.iter().map(|&id| pilot_url(id)).collect();
    json!({ "name": name, "passengers": passengers, "pilots": pilots, "model": "test" })
}
