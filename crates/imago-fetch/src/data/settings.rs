use std::collections::HashMap;
use std::time::Duration;

/// Configuration for every request a [`Fetcher`](crate::Fetcher) makes.
///
/// Constructed once by the surrounding library and read-only for the
/// fetcher's lifetime.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use imago_fetch::Settings;
///
/// let settings = Settings::default()
///     .header("Accept", "image/*")
///     .connect_timeout(Duration::from_secs(5))
///     .disconnect_after_each_call(true);
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Headers applied to every request, including redirect hops.
    pub headers: HashMap<String, String>,

    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,

    /// Timeout for reading from an established connection.
    pub read_timeout: Duration,

    /// Tear the connection down explicitly after each attempt.
    ///
    /// When `false` the transport keeps its own lifecycle and the
    /// fetcher never disconnects.
    pub disconnect_after_each_call: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            headers: HashMap::new(),
            connect_timeout: Duration::from_secs(10),
            read_timeout: Duration::from_secs(30),
            disconnect_after_each_call: false,
        }
    }
}

impl Settings {
    /// Add a single request header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replace all request headers at once.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Set the connection-establishment timeout.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the read timeout.
    #[must_use]
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Set the disconnect policy.
    #[must_use]
    pub fn disconnect_after_each_call(mut self, disconnect: bool) -> Self {
        self.disconnect_after_each_call = disconnect;
        self
    }
}
