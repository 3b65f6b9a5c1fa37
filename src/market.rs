//! Thin client for a CoinGecko-compatible price API: symbol search and
//! current spot prices. No retries, no rate-limit handling.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::CandidateAsset;

const USER_AGENT: &str = concat!("gecko-wallet/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

#[derive(Debug, Error)]
pub enum MarketError {
    #[error("market API request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("market API returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// `GET /search` response envelope. Extra fields (thumbs, ranks) are ignored.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    coins: Vec<CandidateAsset>,
}

pub struct MarketClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl MarketClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self, MarketError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    // ---------- Search ----------

    /// `GET /search?query=<q>`. A non-success status is a transient error;
    /// the caller degrades to an empty result set.
    pub async fn search(&self, query: &str) -> Result<Vec<CandidateAsset>, MarketError> {
        let url = format!("{}/search", self.base_url);
        let resp = self.request(&url, &[("query", query)]).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "search request rejected");
            return Err(MarketError::Status(status));
        }
        let body: SearchResponse = resp.json().await?;
        debug!(query, hits = body.coins.len(), "search completed");
        Ok(body.coins)
    }

    // ---------- Prices ----------

    /// `GET /simple/price?ids=<id1,...>&vs_currencies=usd`, flattened to
    /// id -> USD price. An empty id set short-circuits to an empty map
    /// without touching the network.
    pub async fn current_prices(&self, ids: &[String]) -> Result<HashMap<String, f64>, MarketError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let url = format!("{}/simple/price", self.base_url);
        let joined = ids.join(",");
        let resp = self
            .request(&url, &[("ids", joined.as_str()), ("vs_currencies", "usd")])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%status, "price request rejected");
            return Err(MarketError::Status(status));
        }
        let raw: HashMap<String, HashMap<String, f64>> = resp.json().await?;
        debug!(requested = ids.len(), priced = raw.len(), "prices fetched");
        Ok(flatten_usd(raw))
    }

    fn request(&self, url: &str, params: &[(&str, &str)]) -> reqwest::RequestBuilder {
        let mut req = self.http.get(url).query(params);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        req
    }
}

/// Keep only the `usd` quote per id; ids quoted in other currencies only
/// are dropped and later valued at 0.
fn flatten_usd(raw: HashMap<String, HashMap<String, f64>>) -> HashMap<String, f64> {
    raw.into_iter()
        .filter_map(|(id, quotes)| quotes.get("usd").map(|p| (id, *p)))
        .collect()
}
