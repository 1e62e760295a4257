use std::time::Duration;

use log::{error, info, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use url::Url;

use crate::input_loader::CompanyRecord;
use crate::pipeline::PageSearch;

/// Query sent for every company; the capital OR is interpreted by the
/// search API as a logical-or operator.
const FOUNDER_QUERY: &str = "founders OR cofounders";

/// At most this many result links are taken per company, in API
/// relevance order.
pub const MAX_RESULTS: usize = 5;

pub struct SearchEngine {
    client: Client,
    api_key: String,
    engine_id: String,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Option<Vec<SearchItem>>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    link: Option<String>,
}

impl SearchEngine {
    pub fn new(api_key: String, engine_id: String, endpoint: String) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("founder-finder/0.1"));

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .expect("Failed to build Search Client");

        SearchEngine {
            client,
            api_key,
            engine_id,
            endpoint,
        }
    }

    fn run_query(&self, host: &str) -> Result<Vec<String>, reqwest::Error> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
                ("q", FOUNDER_QUERY),
                ("siteSearch", host),
            ])
            .send()?;

        if !resp.status().is_success() {
            warn!("Search API returned status {} for {}", resp.status(), host);
            return Ok(Vec::new());
        }

        let body: SearchResponse = resp.json()?;
        let items = match body.items {
            Some(items) => items,
            None => {
                info!("No search results for {}", host);
                return Ok(Vec::new());
            }
        };

        Ok(items
            .into_iter()
            .take(MAX_RESULTS)
            .filter_map(|item| item.link.filter(|link| !link.is_empty()))
            .collect())
    }
}

impl PageSearch for SearchEngine {
    /// Returns up to `MAX_RESULTS` page URLs on the company's own domain
    /// that mention founders. Any failure is logged and yields no
    /// results; the batch moves on to the next company.
    fn candidate_pages(&self, company: &CompanyRecord) -> Vec<String> {
        let host = match derive_host(&company.url) {
            Some(host) => host,
            None => {
                warn!("Could not parse URL '{}' for {}", company.url, company.name);
                return Vec::new();
            }
        };

        info!("Searching {} for founder pages...", host);
        match self.run_query(&host) {
            Ok(links) => links,
            Err(e) => {
                error!("Search failed for {}: {}", company.name, e);
                Vec::new()
            }
        }
    }
}

/// Extracts the host from a company URL, stripping a leading `www.`.
pub fn derive_host(raw_url: &str) -> Option<String> {
    let parsed = Url::parse(raw_url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_host_strips_www_prefix() {
        assert_eq!(
            derive_host("https://www.acme.com/about"),
            Some("acme.com".to_string())
        );
    }

    #[test]
    fn derive_host_leaves_bare_domain_unchanged() {
        assert_eq!(derive_host("https://acme.com"), Some("acme.com".to_string()));
    }

    #[test]
    fn derive_host_keeps_subdomains() {
        assert_eq!(
            derive_host("https://blog.acme.com"),
            Some("blog.acme.com".to_string())
        );
    }

    #[test]
    fn derive_host_rejects_garbage() {
        assert_eq!(derive_host("not a url"), None);
    }
}
