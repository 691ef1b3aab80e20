// Lazy traversal of SWAPI's `next`-linked collection pages
use std::collections::VecDeque;
use serde::de::DeserializeOwned;
use thiserror::Error;
use crate::client::api::PageSource;
use crate::models::Page;
use crate::{v_debug, v_info};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Something went wrong with the API: ({code}) {reason} at {url}")]
    Status { code: u16, reason: String, url: String },
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid request header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("malformed page at {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Single-pass cursor over every item of a paginated collection.
///
/// A page is requested only once the items of the previous page are used up,
/// so pages are always visited in `next` order. After an error or the last
/// page the cursor yields nothing further.
pub struct PageCursor<'a, S: ?Sized, T> {
    source: &'a S,
    next_url: Option<String>,
    buffered: VecDeque<T>,
    pages_fetched: usize,
}

impl<'a, S, T> PageCursor<'a, S, T>
where
    S: PageSource + ?Sized,
    T: DeserializeOwned,
{
    pub fn new(source: &'a S, start_url: impl Into<String>) -> Self {
        let start_url = start_url.into();
        Self {
            source,
            next_url: (!start_url.trim().is_empty()).then_some(start_url),
            buffered: VecDeque::new(),
            pages_fetched: 0,
        }
    }

    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    pub async fn next_item(&mut self) -> Result<Option<T>, FetchError> {
        loop {
            if let Some(item) = self.buffered.pop_front() {
                return Ok(Some(item));
            }

            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };

            let body = self.source.get_page(&url).await?;
            let page: Page<T> = serde_json::from_str(&body)
                .map_err(|source| FetchError::Decode { url: url.clone(), source })?;

            self.pages_fetched += 1;
            self.next_url = page.next_url().map(str::to_string);
            v_debug!("📄 Page {} from {}: {} items", self.pages_fetched, url, page.results.len());

            self.buffered.extend(page.results);
        }
    }

    /// Invoke `on_item` once per item, in page and result order.
    pub async fn for_each<F>(mut self, mut on_item: F) -> Result<usize, FetchError>
    where
        F: FnMut(T),
    {
        let mut count = 0;
        while let Some(item) = self.next_item().await? {
            on_item(item);
            count += 1;
        }
        v_info!("📚 Read {} items over {} pages", count, self.pages_fetched);
        Ok(count)
    }

    pub async fn collect_all(self) -> Result<Vec<T>, FetchError> {
        let mut items = Vec::new();
        self.for_each(|item| items.push(item)).await?;
        Ok(items)
    }
}

/// Walk every page starting at `start_url`, handing each item to `on_item`.
pub async fn fetch<S, T, F>(source: &S, start_url: &str, on_item: F) -> Result<usize, FetchError>
where
    S: PageSource + ?Sized,
    T: DeserializeOwned,
    F: FnMut(T),
{
    PageCursor::new(source, start_url).for_each(on_item).await
}
