use reqwest::blocking::Client;
use rolodex_types::{Batch, UserRecord};
use std::time::Duration;

use crate::{DataSource, FetchError, Result};

/// Remote directory API reached over HTTP GET.
///
/// The URL is used verbatim and should already carry the locale and count
/// parameters, e.g. `https://randomuser.me/api/?nat=us&results=12`.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// `timeout` of `None` waits for the server indefinitely.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("rolodex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_batch(&self) -> Result<Vec<UserRecord>> {
        tracing::debug!(url = %self.url, "requesting batch");

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "{} returned {}",
                self.url, status
            )));
        }

        let body = response.bytes()?;
        decode_batch(&body)
    }
}

/// Decode a response body into records, keeping API order.
pub fn decode_batch(body: &[u8]) -> Result<Vec<UserRecord>> {
    Ok(Batch::from_slice(body)?.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_testing::fixtures;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answer exactly one request on loopback with `status` and `body`.
    fn serve_once(status: &'static str, body: String) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!(
            "http://{}/api/?nat=us&results=12",
            listener.local_addr().unwrap()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
        });

        (url, handle)
    }

    #[test]
    fn test_decode_batch_keeps_order() {
        let body = fixtures::sample_batch().to_json_pretty().unwrap();
        let records = decode_batch(body.as_bytes()).unwrap();
        assert_eq!(records.len(), fixtures::SAMPLE_SIZE);
        assert_eq!(records[0].full_name(), "Ava Thompson");
        assert_eq!(records[11].full_name(), "Mason Price");
    }

    #[test]
    fn test_decode_batch_rejects_wrong_shape_as_parse_error() {
        let err = decode_batch(br#"{"error": "Uh oh, something has gone wrong"}"#).unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_describe_is_the_request_url() {
        let source = HttpSource::new("https://randomuser.me/api/?nat=us&results=12", None).unwrap();
        assert_eq!(source.describe(), "https://randomuser.me/api/?nat=us&results=12");
    }

    #[test]
    fn test_unreachable_host_is_a_transport_error() {
        // Port 9 on loopback is the discard service and is closed on test hosts.
        let source = HttpSource::new(
            "http://127.0.0.1:9/api/?nat=us&results=12",
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let err = source.fetch_batch().unwrap_err();
        assert_eq!(err.kind(), "transport");
    }

    #[test]
    fn test_error_status_is_a_transport_error() {
        let (url, server) = serve_once("503 Service Unavailable", String::new());
        let source = HttpSource::new(url.as_str(), Some(Duration::from_secs(5))).unwrap();

        let err = source.fetch_batch().unwrap_err();
        server.join().unwrap();

        assert_eq!(err.kind(), "transport");
        assert!(err.to_string().contains("returned 503"), "{}", err);
        assert!(err.to_string().contains(&url), "{}", err);
    }

    #[test]
    fn test_success_status_decodes_body() {
        let body = fixtures::sample_batch().to_json_pretty().unwrap();
        let (url, server) = serve_once("200 OK", body);
        let source = HttpSource::new(url, Some(Duration::from_secs(5))).unwrap();

        let records = source.fetch_batch().unwrap();
        server.join().unwrap();

        assert_eq!(records.len(), fixtures::SAMPLE_SIZE);
        assert_eq!(records[5].full_name(), "John Carter");
    }
}
