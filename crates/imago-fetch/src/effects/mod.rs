//! I/O with trait abstraction: the transport seam and the fetcher
//! that drives it.

mod fetcher;
mod transport;

#[cfg(feature = "reqwest")]
mod http;

pub use fetcher::Fetcher;
pub use transport::{BoxStream, ByteStream, Connection, Transport};

#[cfg(feature = "reqwest")]
pub use http::HttpTransport;
