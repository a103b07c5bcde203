use std::io;
use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::Stream;

use crate::data::Settings;
use crate::error::TransportError;

/// A boxed stream, pinned and sendable.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// A live response body. The holder owns it and closes it by dropping.
pub type ByteStream = BoxStream<'static, io::Result<Bytes>>;

/// The connection-opening capability injected into the fetcher.
///
/// Production code uses the reqwest-backed
/// [`HttpTransport`](crate::HttpTransport); tests inject scripted
/// implementations.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and hand back the open exchange.
    ///
    /// `settings` supplies the headers for this hop; timeouts are the
    /// implementation's concern.
    async fn open(
        &self,
        url: &str,
        settings: &Settings,
    ) -> Result<Box<dyn Connection>, TransportError>;
}

/// One in-flight request/response pair.
///
/// Owned exclusively by the fetch call that opened it; a call never
/// holds more than one at a time.
pub trait Connection: Send {
    /// The response status code.
    fn status(&self) -> u16;

    /// Read a response header, if present.
    fn header(&self, name: &str) -> Option<String>;

    /// Take the response body. Can succeed at most once.
    fn body(&mut self) -> Result<ByteStream, TransportError>;

    /// Tear the underlying connection down.
    fn disconnect(&mut self);
}
