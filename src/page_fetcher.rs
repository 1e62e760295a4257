use std::time::Duration;

use log::{info, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::StatusCode;

use crate::pipeline::PageFetch;

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        PageFetcher { client }
    }

    fn fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let resp = self.client.get(url).send()?;
        if resp.status() != StatusCode::OK {
            warn!("Fetch of {} returned status {}", url, resp.status());
            return Ok(String::new());
        }
        Ok(clean_body(&resp.text()?))
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        PageFetcher::new()
    }
}

impl PageFetch for PageFetcher {
    /// Fetches a page and returns its cleaned body text. Any failure
    /// (transport error, non-200 status, missing body tags) yields an
    /// empty string and the page is skipped.
    fn fetch_body(&self, url: &str) -> String {
        info!("Fetching {}", url);
        match self.fetch(url) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                String::new()
            }
        }
    }
}

/// Extracts the body fragment and strips script elements. Empty string
/// when the page carries no body tags.
pub fn clean_body(html: &str) -> String {
    match extract_body_content(html) {
        Some(body) => remove_script_tags(body),
        None => {
            info!("No body tags found in page");
            String::new()
        }
    }
}

/// Returns the substring strictly between the first opening body tag's
/// `>` and the first `</body>` after it.
pub fn extract_body_content(html: &str) -> Option<&str> {
    let tag_start = html.find("<body")?;
    let body_end = html[tag_start..].find("</body>").map(|i| tag_start + i)?;
    let content_start = html[tag_start..].find('>').map(|i| tag_start + i + 1)?;
    if content_start > body_end {
        return None;
    }
    Some(&html[content_start..body_end])
}

/// Deletes every `<script ... </script` span, 9 characters past the
/// start of the closing token so the trailing `>` goes with it. A
/// `<script` with no matching close is left in place; malformed HTML is
/// tolerated, not an error.
pub fn remove_script_tags(html: &str) -> String {
    let mut text = html.to_string();
    while let Some(start) = text.find("<script") {
        let close = match text[start..].find("</script") {
            Some(i) => start + i,
            None => break,
        };
        let mut cut = (close + 9).min(text.len());
        while !text.is_char_boundary(cut) {
            cut += 1;
        }
        text.replace_range(start..cut, "");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_body_and_strips_script() {
        let html = "<html><body class=\"x\">HELLO<script>bad()</script>WORLD</body></html>";
        let body = extract_body_content(html).unwrap();
        assert_eq!(remove_script_tags(body), "HELLOWORLD");
    }

    #[test]
    fn missing_body_tags_yield_empty() {
        assert_eq!(clean_body("<html><div>no body here</div></html>"), "");
        assert_eq!(clean_body("<html><body>never closed"), "");
    }

    #[test]
    fn removes_every_script_element() {
        let html = "a<script>1</script>b<script src=\"x.js\"></script>c";
        let cleaned = remove_script_tags(html);
        assert_eq!(cleaned, "abc");
        assert!(!cleaned.contains("<script"));
    }

    #[test]
    fn preserves_content_outside_scripts_in_order() {
        let html = "first<script>x</script> second <script>y</script>third";
        assert_eq!(remove_script_tags(html), "first second third");
    }

    #[test]
    fn unmatched_script_tag_stops_without_hanging() {
        let html = "keep<script>never closed";
        assert_eq!(remove_script_tags(html), "keep<script>never closed");
    }

    #[test]
    fn script_at_end_of_input_does_not_panic() {
        // Closing token flush against the end of the string; the cut is
        // clamped to the string length.
        let html = "x<script>y</script";
        assert_eq!(remove_script_tags(html), "x");
    }

    #[test]
    fn multibyte_text_around_scripts_is_safe() {
        let html = "héllo<script>bad()</script>wörld";
        assert_eq!(remove_script_tags(html), "héllowörld");
    }

    #[test]
    fn body_extraction_ignores_text_before_body() {
        let html = "<html><head><title>t</title></head><body>CONTENT</body></html>";
        assert_eq!(extract_body_content(html), Some("CONTENT"));
    }
}
