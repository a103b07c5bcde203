//! Bounded-redirect HTTP fetching for the imago image loader.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and outcome types
//! - [`core`] - Pure redirect decisions
//! - [`effects`] - I/O with trait abstraction
//!
//! The [`Fetcher`] resolves a URL to file bytes or a live stream,
//! following temporary redirects up to a fixed hop budget. The only
//! raised failure is [`FetchError::ImageNotFound`]; every other fault
//! is absorbed into [`FetchStatus::Skipped`] so callers always see the
//! difference between "fetched" and "nothing happened".
//!
//! The connection-opening step is a capability
//! ([`Transport`](effects::Transport)) injected at construction, which
//! is also the seam the test suite scripts.

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use crate::core::{MAX_REDIRECTS, TEMP_REDIRECT, is_temp_redirect};
pub use data::{FetchStatus, Settings, SkipCause};
pub use effects::{BoxStream, ByteStream, Connection, Fetcher, Transport};
pub use error::{FetchError, Result, TransportError};

#[cfg(feature = "reqwest")]
pub use effects::HttpTransport;
