use std::path::Path;

use tracing::{debug, warn};

use crate::core::{MAX_REDIRECTS, is_temp_redirect};
use crate::data::{FetchStatus, Settings, SkipCause};
use crate::effects::transport::{ByteStream, Connection, Transport};
use crate::error::{FetchError, Result, TransportError};

#[cfg(feature = "reqwest")]
use crate::effects::http::HttpTransport;

const LOCATION: &str = "Location";

/// Resolves a URL to file bytes or a live stream, following temporary
/// redirects up to a fixed hop budget.
///
/// Stateless across calls: every invocation opens its own connections
/// and carries its own hop counter, so one fetcher can serve any
/// number of concurrent callers.
pub struct Fetcher<T: Transport> {
    transport: T,
    settings: Settings,
}

#[cfg(feature = "reqwest")]
impl Fetcher<HttpTransport> {
    /// Build a fetcher over the production HTTP transport.
    pub fn http(settings: Settings) -> std::result::Result<Self, TransportError> {
        let transport = HttpTransport::new(&settings)?;
        Ok(Self::new(transport, settings))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Fetch `url` into `destination`.
    ///
    /// Follows up to [`MAX_REDIRECTS`] temporary redirects. A missing
    /// remote resource or an unusable destination raises
    /// [`FetchError::ImageNotFound`]; any other fault is absorbed into
    /// the returned [`FetchStatus`] with nothing written.
    pub async fn retrieve_image(&self, url: &str, destination: &Path) -> Result<FetchStatus> {
        if let Err(err) = imago_fs::ensure_destination(destination) {
            debug!(destination = %destination.display(), error = %err, "unusable destination");
            return Err(FetchError::ImageNotFound {
                url: url.to_string(),
            });
        }

        let mut target = url.to_string();
        let mut hops = 0u32;

        loop {
            let mut conn = match self.transport.open(&target, &self.settings).await {
                Ok(conn) => conn,
                Err(err) if err.is_missing() => {
                    return Err(FetchError::ImageNotFound { url: target });
                }
                Err(err) => {
                    warn!(url = %target, error = %err, "absorbed transport fault, nothing written");
                    return Ok(FetchStatus::Skipped(SkipCause::Transport(err)));
                }
            };

            if is_temp_redirect(conn.status()) {
                if hops == MAX_REDIRECTS {
                    self.finish(conn.as_mut());
                    warn!(url = %target, hops, "redirect budget exhausted, giving up without writing");
                    return Ok(FetchStatus::Skipped(SkipCause::RedirectLimit));
                }

                hops += 1;
                let location = conn.header(LOCATION);
                self.finish(conn.as_mut());

                match location {
                    Some(next) => {
                        debug!(from = %target, to = %next, hop = hops, "following temporary redirect");
                        target = next;
                    }
                    None => {
                        warn!(url = %target, "temporary redirect without a Location header");
                        return Ok(FetchStatus::Skipped(SkipCause::Transport(
                            TransportError::fault("redirect without a Location header"),
                        )));
                    }
                }
                continue;
            }

            return self.copy_body(conn, &target, destination).await;
        }
    }

    /// Open `url` and hand the live body stream to the caller.
    ///
    /// The caller owns the stream and closes it by dropping. A missing
    /// remote resource raises [`FetchError::ImageNotFound`]; any other
    /// fault yields `Ok(None)`.
    pub async fn retrieve_stream(&self, url: &str) -> Result<Option<ByteStream>> {
        let mut conn = match self.transport.open(url, &self.settings).await {
            Ok(conn) => conn,
            Err(err) if err.is_missing() => {
                return Err(FetchError::ImageNotFound {
                    url: url.to_string(),
                });
            }
            Err(err) => {
                debug!(url, error = %err, "no stream for caller");
                return Ok(None);
            }
        };

        match conn.body() {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.is_missing() => Err(FetchError::ImageNotFound {
                url: url.to_string(),
            }),
            Err(err) => {
                debug!(url, error = %err, "no stream for caller");
                Ok(None)
            }
        }
    }

    async fn copy_body(
        &self,
        mut conn: Box<dyn Connection>,
        url: &str,
        destination: &Path,
    ) -> Result<FetchStatus> {
        let mut body = match conn.body() {
            Ok(body) => body,
            Err(err) if err.is_missing() => {
                return Err(FetchError::ImageNotFound {
                    url: url.to_string(),
                });
            }
            Err(err) => {
                warn!(url, error = %err, "absorbed transport fault, nothing written");
                return Ok(FetchStatus::Skipped(SkipCause::Transport(err)));
            }
        };

        let mut file = match imago_fs::create_destination(destination).await {
            Ok(file) => file,
            Err(err) => {
                debug!(destination = %destination.display(), error = %err, "unusable destination");
                return Err(FetchError::ImageNotFound {
                    url: url.to_string(),
                });
            }
        };

        let copied = imago_fs::copy_stream(&mut body, &mut file).await;
        imago_fs::close_silently(file).await;
        drop(body);

        match copied {
            Ok(bytes) => {
                self.finish(conn.as_mut());
                debug!(url, bytes, destination = %destination.display(), "image retrieved");
                Ok(FetchStatus::Fetched)
            }
            Err(err) => {
                warn!(url, error = %err, "body copy failed, nothing raised");
                Ok(FetchStatus::Skipped(SkipCause::Copy(err)))
            }
        }
    }

    /// Apply the disconnect policy to a connection leaving a
    /// non-fatal path.
    fn finish(&self, conn: &mut dyn Connection) {
        if self.settings.disconnect_after_each_call {
            conn.disconnect();
        }
    }
}
