use std::io;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Response, StatusCode, redirect};
use tracing::debug;

use crate::core::TEMP_REDIRECT;
use crate::data::Settings;
use crate::effects::transport::{ByteStream, Connection, Transport};
use crate::error::TransportError;

/// Production transport over reqwest.
///
/// Permanent redirect classes are followed internally; a temporary
/// redirect (307) is surfaced so the fetcher can spend its own hop
/// budget on it. Responses whose status marks the resource as gone
/// map to [`TransportError::Missing`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with the timeouts from `settings`.
    pub fn new(settings: &Settings) -> Result<Self, TransportError> {
        let policy = redirect::Policy::custom(|attempt| {
            if attempt.status() == StatusCode::TEMPORARY_REDIRECT {
                attempt.stop()
            } else if attempt.previous().len() > 10 {
                attempt.error("too many redirects")
            } else {
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder()
            .redirect(policy)
            .connect_timeout(settings.connect_timeout)
            .read_timeout(settings.read_timeout)
            .build()
            .map_err(|err| TransportError::fault(err.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn open(
        &self,
        url: &str,
        settings: &Settings,
    ) -> Result<Box<dyn Connection>, TransportError> {
        let mut request = self.client.get(url);
        for (name, value) in &settings.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        debug!(url, "GET");
        let response = request.send().await.map_err(|err| {
            if err.is_builder() {
                TransportError::InvalidUrl(url.to_string())
            } else {
                TransportError::fault(err.to_string())
            }
        })?;

        if let Some(err) = classify_status(response.status(), url) {
            return Err(err);
        }

        Ok(Box::new(HttpConnection {
            status: response.status().as_u16(),
            response: Some(response),
        }))
    }
}

/// Map an error-class status onto the transport taxonomy.
///
/// `None` means the response carries a readable body (success, or the
/// temporary redirect the fetcher resolves itself).
fn classify_status(status: StatusCode, url: &str) -> Option<TransportError> {
    match status.as_u16() {
        404 | 410 => Some(TransportError::Missing {
            url: url.to_string(),
        }),
        TEMP_REDIRECT => None,
        code if status.is_client_error() || status.is_server_error() => Some(
            TransportError::fault(format!("server returned HTTP {code} for {url}")),
        ),
        _ => None,
    }
}

struct HttpConnection {
    status: u16,
    response: Option<Response>,
}

impl Connection for HttpConnection {
    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<String> {
        self.response
            .as_ref()?
            .headers()
            .get(name)?
            .to_str()
            .ok()
            .map(String::from)
    }

    fn body(&mut self) -> Result<ByteStream, TransportError> {
        let response = self
            .response
            .take()
            .ok_or_else(|| TransportError::fault("response body already taken"))?;

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(io::Error::other));
        Ok(Box::pin(stream))
    }

    fn disconnect(&mut self) {
        // Dropping an unread response closes the socket instead of
        // returning it to the pool.
        self.response = None;
    }
}
