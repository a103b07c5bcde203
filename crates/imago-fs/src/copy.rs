use std::io;
use std::path::Path;

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::error::{Error, Result};

/// Check that `path` can serve as a download destination.
///
/// A destination must name a file, existing or not; a directory can
/// never be written through and is rejected up front.
pub fn ensure_destination(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::DestinationIsDirectory);
    }
    Ok(())
}

/// Open `path` for writing, truncating any previous content.
pub async fn create_destination(path: &Path) -> Result<File> {
    ensure_destination(path)?;
    File::create(path).await.map_err(Error::Destination)
}

/// Drain `input` into `output` chunk by chunk and flush.
///
/// Returns the number of bytes written. Fails on the first read or
/// write error; bytes already written stay in the file.
pub async fn copy_stream<S>(input: &mut S, output: &mut File) -> Result<u64>
where
    S: Stream<Item = io::Result<Bytes>> + Unpin,
{
    let mut written = 0u64;

    while let Some(chunk) = input.next().await {
        let chunk = chunk.map_err(Error::Stream)?;
        output.write_all(&chunk).await.map_err(Error::Write)?;
        written += chunk.len() as u64;
    }

    output.flush().await.map_err(Error::Write)?;
    Ok(written)
}

/// Flush and close `file`, swallowing any error.
///
/// Close failures are never actionable for the caller; they are logged
/// and dropped.
pub async fn close_silently(mut file: File) {
    if let Err(err) = file.flush().await {
        debug!(error = %err, "ignored close failure");
    }
}
