//! Filesystem side of the imago image loader.
//!
//! Streams a response body into a destination file and closes handles
//! without letting close failures escape. The fetch crate owns all
//! network concerns; this crate only touches the disk.

mod copy;
mod error;

pub use copy::{close_silently, copy_stream, create_destination, ensure_destination};
pub use error::{Error, Result};
