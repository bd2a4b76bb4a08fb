//! Google Books volume search
//!
//! One GET per passage, no retries and no caching. The HTTP layer sits behind
//! [`BooksTransport`] so the client can run against a canned response.

use crate::dto::BookCandidate;
use crate::error::SearchError;
use serde::Deserialize;

/// Default volumes endpoint
pub const DEFAULT_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

/// Default number of candidates kept from a response
pub const DEFAULT_MAX_BOOKS: usize = 3;

/// Status and body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

/// Performs GET requests
pub trait BooksTransport: Send + Sync {
    /// GET `url` with `query` as URL-encoded parameters
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SearchError>;
}

/// [`BooksTransport`] over a blocking reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Transport with reqwest's default settings
    pub fn new() -> Result<Self, SearchError> {
        let client = reqwest::blocking::ClientBuilder::new()
            .user_agent(concat!("lexilens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl BooksTransport for ReqwestTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SearchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SearchError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
}

/// Looks up books a passage might come from
pub struct BookSearchClient {
    transport: Box<dyn BooksTransport>,
    endpoint: String,
    max_results: usize,
}

impl std::fmt::Debug for BookSearchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookSearchClient")
            .field("endpoint", &self.endpoint)
            .field("max_results", &self.max_results)
            .finish_non_exhaustive()
    }
}

impl BookSearchClient {
    /// Client on the default endpoint keeping three candidates
    pub fn new(transport: Box<dyn BooksTransport>) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_BOOKS_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_BOOKS,
        }
    }

    /// Query another endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Keep at most `max_results` candidates
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Search with the passage verbatim as the query
    pub fn search(&self, passage: &str, api_key: &str) -> Result<Vec<BookCandidate>, SearchError> {
        log::debug!("Searching {} for book candidates", self.endpoint);
        let response = self
            .transport
            .get(&self.endpoint, &[("q", passage), ("key", api_key)])?;

        if response.status != 200 {
            log::warn!("Book search answered with status {}", response.status);
            return Err(SearchError::Status(response.status));
        }

        let volumes: VolumesResponse = serde_json::from_str(&response.body)?;
        let candidates: Vec<BookCandidate> = volumes
            .items
            .into_iter()
            .take(self.max_results)
            .map(|v| BookCandidate::new(v.volume_info.title, v.volume_info.authors))
            .collect();

        log::info!("Found {} book candidate(s)", candidates.len());
        Ok(candidates)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Transport answering every request with the same response
    pub(crate) struct CannedTransport {
        pub response: Result<HttpResponse, String>,
        pub requests: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
    }

    impl CannedTransport {
        pub fn new(status: u16, body: &str) -> Self {
            Self {
                response: Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl BooksTransport for CannedTransport {
        fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, SearchError> {
            self.requests.lock().unwrap().push((
                url.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            self.response.clone().map_err(SearchError::Transport)
        }
    }

    const FOUR_VOLUMES: &str = r#"{
        "items": [
            {"volumeInfo": {"title": "Pride and Prejudice", "authors": ["Jane Austen"]}},
            {"volumeInfo": {"authors": ["Anonymous", "Someone Else"]}},
            {"volumeInfo": {"title": "Untitled Authors"}},
            {"volumeInfo": {"title": "Fourth"}}
        ]
    }"#;

    #[test]
    fn test_first_three_items_with_placeholders() {
        let client = BookSearchClient::new(Box::new(CannedTransport::new(200, FOUR_VOLUMES)));
        let books = client.search("passage", "key").unwrap();
        assert_eq!(
            books,
            vec![
                BookCandidate::new(Some("Pride and Prejudice".into()), Some(vec!["Jane Austen".into()])),
                BookCandidate {
                    title: "No title found".into(),
                    authors: vec!["Anonymous".into(), "Someone Else".into()],
                },
                BookCandidate {
                    title: "Untitled Authors".into(),
                    authors: vec!["No authors found".into()],
                },
            ]
        );
    }

    #[test]
    fn test_request_parameters() {
        let transport = CannedTransport::new(200, "{}");
        let requests = Arc::clone(&transport.requests);
        let client = BookSearchClient::new(Box::new(transport)).with_endpoint("http://local/v");
        client.search("It is a truth", "k3y").unwrap();

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "http://local/v");
        assert_eq!(
            requests[0].1,
            vec![
                ("q".to_string(), "It is a truth".to_string()),
                ("key".to_string(), "k3y".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_items_is_empty() {
        let client = BookSearchClient::new(Box::new(CannedTransport::new(200, r#"{"totalItems": 0}"#)));
        assert!(client.search("passage", "key").unwrap().is_empty());
    }

    #[test]
    fn test_not_found_status() {
        let client = BookSearchClient::new(Box::new(CannedTransport::new(404, "not found")));
        let err = client.search("passage", "key").unwrap_err();
        assert!(matches!(err, SearchError::Status(404)));
        assert_eq!(err.to_string(), "Error: 404");
    }

    #[test]
    fn test_malformed_body() {
        let client = BookSearchClient::new(Box::new(CannedTransport::new(200, "<html>")));
        assert!(matches!(
            client.search("passage", "key"),
            Err(SearchError::Malformed(_))
        ));
    }

    #[test]
    fn test_max_results() {
        let client = BookSearchClient::new(Box::new(CannedTransport::new(200, FOUR_VOLUMES)))
            .with_max_results(1);
        assert_eq!(client.search("p", "k").unwrap().len(), 1);
    }
}
