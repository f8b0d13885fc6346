use anyhow::{anyhow, Result};
use serde::Deserialize;

/// Random-quote endpoint. Returns a JSON array whose first element
/// carries the quote (`q`) and author (`a`).
const QUOTE_API_URL: &str = "https://zenquotes.io/api/random";

const UNAVAILABLE_FALLBACK: &str = "Sorry, I couldn't fetch a quote at the moment.";
const FAILURE_FALLBACK: &str = "Sorry, something went wrong while fetching the quote.";

#[derive(Debug, Deserialize)]
struct QuoteEntry {
    q: String,
    a: String,
}

/// Fetches motivational quotes from the ZenQuotes API. Failures never
/// reach callers: a non-2xx status or any transport/parse error degrades
/// to one of two fixed fallback strings.
#[derive(Debug, Clone)]
pub struct QuoteFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl QuoteFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(QUOTE_API_URL)
    }

    /// Fetcher pointed at a non-default endpoint, for tests and local
    /// stubs.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns a formatted quote, or a fallback string on any failure.
    pub async fn fetch(&self) -> String {
        match self.try_fetch().await {
            Ok(quote) => quote,
            Err(e) => {
                tracing::error!("Error fetching quote from ZenQuotes: {}", e);
                FAILURE_FALLBACK.to_string()
            }
        }
    }

    async fn try_fetch(&self) -> Result<String> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            tracing::warn!("Quote API returned status {}", response.status());
            return Ok(UNAVAILABLE_FALLBACK.to_string());
        }
        let body = response.text().await?;
        parse_quote(&body)
    }
}

impl Default for QuoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the quote API payload into the `"<quote> — <author>"` line.
fn parse_quote(body: &str) -> Result<String> {
    let entries: Vec<QuoteEntry> = serde_json::from_str(body)?;
    let first = entries
        .first()
        .ok_or_else(|| anyhow!("quote API returned an empty array"))?;
    Ok(format!("{} — {}", first.q, first.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote_takes_first_entry() {
        let body = r#"[{"q":"Stay hungry.","a":"Steve Jobs","h":"<blockquote>...</blockquote>"}]"#;
        let quote = parse_quote(body).unwrap();
        assert_eq!(quote, "Stay hungry. — Steve Jobs");
    }

    #[test]
    fn test_parse_quote_ignores_extra_entries() {
        let body = r#"[{"q":"First","a":"One"},{"q":"Second","a":"Two"}]"#;
        assert_eq!(parse_quote(body).unwrap(), "First — One");
    }

    #[test]
    fn test_parse_quote_rejects_empty_array() {
        assert!(parse_quote("[]").is_err());
    }

    #[test]
    fn test_parse_quote_rejects_malformed_json() {
        assert!(parse_quote("not json").is_err());
        assert!(parse_quote(r#"{"q":"not an array"}"#).is_err());
    }

    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    // One-shot HTTP stub that answers a single request with a canned
    // response, for exercising the fallback paths in fetch().
    async fn spawn_stub_server(response: &'static str) -> std::net::SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Failed to get stub address");
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_yields_unavailable_fallback() {
        let addr = spawn_stub_server(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n",
        )
        .await;
        let fetcher = QuoteFetcher::with_endpoint(format!("http://{addr}/api/random"));

        assert_eq!(fetcher.fetch().await, UNAVAILABLE_FALLBACK);
    }

    #[tokio::test]
    async fn test_fetch_network_error_yields_failure_fallback() {
        // Nothing listens here, so the connection is refused
        let fetcher = QuoteFetcher::with_endpoint("http://127.0.0.1:1/api/random");

        assert_eq!(fetcher.fetch().await, FAILURE_FALLBACK);
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload_yields_failure_fallback() {
        let addr = spawn_stub_server(
            "HTTP/1.1 200 OK\r\ncontent-length: 8\r\ncontent-type: application/json\r\n\r\nnot json",
        )
        .await;
        let fetcher = QuoteFetcher::with_endpoint(format!("http://{addr}/api/random"));

        assert_eq!(fetcher.fetch().await, FAILURE_FALLBACK);
    }
}
