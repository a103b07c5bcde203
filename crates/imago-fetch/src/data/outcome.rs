use crate::error::TransportError;

/// What a completed `retrieve_image` call actually did.
///
/// A call that returns `Ok` either wrote the destination file or
/// deliberately did nothing; the two are distinct variants so a
/// skipped fetch can never be mistaken for a populated file.
#[derive(Debug)]
pub enum FetchStatus {
    /// The response body was written to the destination.
    Fetched,

    /// Nothing was written and no error was raised.
    Skipped(SkipCause),
}

impl FetchStatus {
    /// Returns `true` if the destination file was populated.
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchStatus::Fetched)
    }
}

/// Why a fetch completed without writing anything.
#[derive(Debug)]
pub enum SkipCause {
    /// The redirect hop budget ran out before a non-redirect response.
    RedirectLimit,

    /// The transport faulted in a way the fetcher absorbs.
    Transport(TransportError),

    /// The body copy into the destination failed partway.
    Copy(imago_fs::Error),
}
