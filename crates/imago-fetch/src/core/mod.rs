//! Pure decisions with no I/O: which statuses redirect and how many
//! hops a single fetch may follow.

mod redirect;

pub use redirect::{MAX_REDIRECTS, TEMP_REDIRECT, is_temp_redirect};
