use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Snapshot index lookup endpoint.
pub(crate) const AVAILABILITY_ENDPOINT: &str = "https://archive.org/wayback/available";
/// Prefix for direct snapshot URLs: `{prefix}{timestamp}/{url}`.
pub(crate) const WEB_ARCHIVE_PREFIX: &str = "https://web.archive.org/web/";

/// Browser-like User-Agent; some origins refuse the default client identity.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
/// Per-request timeout for page fetches and index lookups.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

// Matches any URL scheme prefix; bare hostnames get `http://` prepended.
regex!(SCHEME_REGEX, r"(?i)^[a-z][a-z0-9+.-]*://");
// A timestamp is day precision (8 digits) or second precision (14 digits).
regex!(TIMESTAMP_REGEX, r"^\d{8}(\d{6})?$");
