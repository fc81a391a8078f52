//! Upstream access for the prototype tools.
//!
//! [`HttpFetch`] is the seam to the network: production code uses
//! [`ReqwestFetcher`], tests plug in an in-memory fake. [`PrototypeApi`] binds
//! a fetcher to one base URL and turns raw responses into decoded records.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, instrument, warn};

use super::model::{DetailEnvelope, DetailItem, ListingItem, ListingResponse};
use crate::core::config::PrototypesConfig;
use crate::domains::tools::ToolError;

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, lossily decoded for diagnostics.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Blocking HTTP GET.
///
/// `Err` means the request never produced a response (connect failure,
/// timeout, unreadable body). Any status code, including 4xx/5xx, is `Ok`.
pub trait HttpFetch: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse, String>;
}

/// [`HttpFetch`] backed by `reqwest::blocking`.
///
/// Must be created and dropped outside of an async context; tools build one
/// inside `spawn_blocking`.
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
}

impl ReqwestFetcher {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string())?;
        Ok(Self { client })
    }

    #[cfg(test)]
    fn direct(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .unwrap();
        Self { client }
    }
}

impl HttpFetch for ReqwestFetcher {
    fn get(&self, url: &str) -> Result<RawResponse, String> {
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                e.to_string()
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| format!("error reading response: {}", e))?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// One deployment of the prototypes API.
#[derive(Clone)]
pub struct PrototypeApi {
    base_url: String,
    fetcher: Arc<dyn HttpFetch>,
}

impl PrototypeApi {
    const LIST_API: &'static str = "prototypes API";
    const DETAIL_API: &'static str = "prototype detail API";

    /// Bind `fetcher` to the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn HttpFetch>) -> Self {
        Self {
            base_url: base_url.into(),
            fetcher,
        }
    }

    /// The two APIs the tools talk to, sharing one reqwest client.
    ///
    /// Returns `(listing, detail)`.
    pub fn from_config(config: &PrototypesConfig) -> Result<(Self, Self), ToolError> {
        let fetcher = ReqwestFetcher::new(Duration::from_secs(config.request_timeout_secs))
            .map_err(ToolError::ClientInit)?;
        let fetcher: Arc<dyn HttpFetch> = Arc::new(fetcher);
        Ok((
            Self::new(&config.list_base_url, fetcher.clone()),
            Self::new(&config.detail_base_url, fetcher),
        ))
    }

    /// Append `segments` to the base path, percent-encoding each one.
    ///
    /// A segment never spans more than one path level: `/`, `?` and `#` are
    /// escaped, so a value cannot leave the `<base>/prototypes/` subtree.
    fn endpoint(&self, segments: &[&str]) -> Result<String, ToolError> {
        let mut url = reqwest::Url::parse(&self.base_url).map_err(|e| {
            ToolError::usage(format!("Invalid base URL {:?}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                ToolError::usage(format!("Base URL {:?} cannot hold a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    fn listing_url(&self) -> Result<String, ToolError> {
        self.endpoint(&["prototypes"])
    }

    fn detail_url(&self, id: &str) -> Result<String, ToolError> {
        // Dot segments would be dropped or resolved, addressing another resource.
        if id == "." || id == ".." {
            return Err(ToolError::usage(format!("Invalid prototype id {:?}", id)));
        }
        self.endpoint(&["prototypes", id])
    }

    /// GET `<base>/prototypes` and decode the `results` array.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub fn fetch_listing(&self) -> Result<Vec<ListingItem>, ToolError> {
        let body = self.get_ok(&self.listing_url()?, Self::LIST_API)?;
        let listing: ListingResponse =
            serde_json::from_slice(&body).map_err(|e| ToolError::decode("prototypes", e))?;
        debug!("Decoded {} prototype(s)", listing.results.len());
        Ok(listing.results)
    }

    /// GET `<base>/prototypes/<id>` and decode the `data` envelope.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub fn fetch_detail(&self, id: &str) -> Result<DetailItem, ToolError> {
        let body = self.get_ok(&self.detail_url(id)?, Self::DETAIL_API)?;
        let envelope: DetailEnvelope =
            serde_json::from_slice(&body).map_err(|e| ToolError::decode("detail", e))?;
        Ok(envelope.data)
    }

    fn get_ok(&self, url: &str, api: &'static str) -> Result<Vec<u8>, ToolError> {
        let response = self
            .fetcher
            .get(url)
            .map_err(|e| ToolError::network(api, e))?;

        if !response.is_success() {
            warn!("{} answered {} for {}", api, response.status, url);
            return Err(ToolError::Status {
                api,
                status: response.status,
                body: response.body_text(),
            });
        }

        Ok(response.body)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeFetcher;
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    const BASE: &str = "http://mock.test/v1";

    fn api(fetcher: FakeFetcher) -> (PrototypeApi, Arc<FakeFetcher>) {
        let fetcher = Arc::new(fetcher);
        (PrototypeApi::new(BASE, fetcher.clone()), fetcher)
    }

    #[test]
    fn test_urls_tolerate_trailing_slash() {
        let api = PrototypeApi::new("http://mock.test/v1/", Arc::new(FakeFetcher::new()));
        assert_eq!(api.listing_url().unwrap(), "http://mock.test/v1/prototypes");
        assert_eq!(
            api.detail_url("p1").unwrap(),
            "http://mock.test/v1/prototypes/p1"
        );
    }

    #[test]
    fn test_detail_id_stays_one_path_segment() {
        let (api, fetcher) = api(FakeFetcher::new());
        let _ = api.fetch_detail("../../admin?x=1#top");
        assert_eq!(
            fetcher.requested(),
            vec!["http://mock.test/v1/prototypes/..%2F..%2Fadmin%3Fx=1%23top"]
        );
    }

    #[test]
    fn test_dot_segment_id_is_rejected() {
        let (api, fetcher) = api(FakeFetcher::new());
        for id in [".", ".."] {
            let err = api.fetch_detail(id).unwrap_err();
            assert!(matches!(err, ToolError::Usage(_)));
        }
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn test_invalid_base_url_is_usage_error() {
        let fetcher = Arc::new(FakeFetcher::new());
        let api = PrototypeApi::new("not a url", fetcher.clone());
        let err = api.fetch_listing().unwrap_err();
        assert!(matches!(err, ToolError::Usage(_)));
        assert!(err.to_string().contains("not a url"));
        assert!(fetcher.requested().is_empty());
    }

    #[test]
    fn test_listing_missing_results_is_empty() {
        let (api, _) = api(FakeFetcher::new().respond(
            "http://mock.test/v1/prototypes",
            200,
            r#"{"status_code": 200}"#,
        ));
        assert!(api.fetch_listing().unwrap().is_empty());
    }

    #[test]
    fn test_listing_invalid_json_is_decode_error() {
        let (api, _) = api(FakeFetcher::new().respond(
            "http://mock.test/v1/prototypes",
            200,
            "<html>oops</html>",
        ));
        let err = api.fetch_listing().unwrap_err();
        assert!(matches!(err, ToolError::Decode { .. }));
        assert!(err.to_string().starts_with("Error parsing prototypes JSON"));
    }

    #[test]
    fn test_listing_wrong_top_level_shape_is_decode_error() {
        let (api, _) = api(FakeFetcher::new().respond(
            "http://mock.test/v1/prototypes",
            200,
            r#"{"results": "nope"}"#,
        ));
        assert!(matches!(
            api.fetch_listing().unwrap_err(),
            ToolError::Decode { .. }
        ));
    }

    #[test]
    fn test_non_2xx_carries_status_and_body() {
        let (api, _) = api(FakeFetcher::new().respond(
            "http://mock.test/v1/prototypes",
            500,
            "internal error",
        ));
        let err = api.fetch_listing().unwrap_err();
        assert!(err.is_transport());
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal error"));
    }

    #[test]
    fn test_network_failure_is_transport_error() {
        let (api, _) = api(
            FakeFetcher::new().fail("http://mock.test/v1/prototypes/p1", "connection refused"),
        );
        let err = api.fetch_detail("p1").unwrap_err();
        assert!(matches!(err, ToolError::Network { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_detail_fetches_by_id() {
        let (api, fetcher) = api(FakeFetcher::new().respond(
            "http://mock.test/v1/prototypes/p1",
            200,
            r#"{"data": {"id": "p1", "name": "Login"}}"#,
        ));
        let detail = api.fetch_detail("p1").unwrap();
        assert_eq!(detail.id, "p1");
        assert_eq!(fetcher.requested(), vec!["http://mock.test/v1/prototypes/p1"]);
    }

    /// Serve `body` with `status` to exactly one connection on a loopback port.
    ///
    /// Returns the base URL and a handle yielding the request line received.
    fn serve_once(status: &str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let status = status.to_string();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let head = String::from_utf8_lossy(&buf).into_owned();
            head.lines().next().unwrap_or_default().to_string()
        });
        (format!("http://{}/v1", addr), handle)
    }

    #[test]
    fn test_reqwest_fetcher_against_loopback() {
        let (base, _) = serve_once(
            "200 OK",
            r#"{"results":[{"id":"p1","name":"Login","request":{"method":"POST","urlPath":"/login"}}]}"#,
        );
        let fetcher = ReqwestFetcher::direct(Duration::from_secs(5));
        let api = PrototypeApi::new(base, Arc::new(fetcher));
        let items = api.fetch_listing().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].request.url_path, "/login");
    }

    #[test]
    fn test_reqwest_fetcher_reports_status() {
        let (base, _) = serve_once("503 Service Unavailable", "maintenance");
        let fetcher = ReqwestFetcher::direct(Duration::from_secs(5));
        let api = PrototypeApi::new(base, Arc::new(fetcher));
        match api.fetch_detail("p1").unwrap_err() {
            ToolError::Status { status, body, .. } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reqwest_request_stays_under_prototypes() {
        let (base, handle) = serve_once("200 OK", r#"{"data":{"id":"x"}}"#);
        let fetcher = ReqwestFetcher::direct(Duration::from_secs(5));
        let api = PrototypeApi::new(base, Arc::new(fetcher));
        api.fetch_detail("../../admin?x=1").unwrap();

        let request_line = handle.join().unwrap();
        assert_eq!(
            request_line,
            "GET /v1/prototypes/..%2F..%2Fadmin%3Fx=1 HTTP/1.1"
        );
    }
}
