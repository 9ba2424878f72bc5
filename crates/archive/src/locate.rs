//! Snapshot lookup against the archive availability index.

use crate::error::{ErrorKind, Result};
use crate::models::Snapshot;
use crate::{ArchiveClient, Timestamp, consts};
use exn::ResultExt;
use serde::Deserialize;
use tracing::instrument;

/// Response shape of the availability endpoint. Only the closest-snapshot
/// field matters; everything else is ignored.
#[derive(Debug, Deserialize)]
struct Availability {
    #[serde(default)]
    archived_snapshots: ArchivedSnapshots,
}

#[derive(Debug, Default, Deserialize)]
struct ArchivedSnapshots {
    closest: Option<ClosestSnapshot>,
}

#[derive(Debug, Deserialize)]
struct ClosestSnapshot {
    url: String,
    #[serde(default)]
    timestamp: Option<String>,
}

impl ArchiveClient {
    /// Locates an archived snapshot of `url`.
    ///
    /// With a timestamp the snapshot URL is constructed directly (the
    /// archive serves the capture closest to the requested moment) and no
    /// network round-trip happens. Without one, the availability index is
    /// queried for the most recent capture; `None` means the index has never
    /// seen the URL.
    #[instrument(skip(self))]
    pub async fn locate(&self, url: &str, timestamp: Option<&Timestamp>) -> Result<Option<Snapshot>> {
        let url = ensure_scheme(url);
        if let Some(timestamp) = timestamp {
            return Ok(Some(Snapshot {
                url: snapshot_url(timestamp, &url),
                timestamp: Some(timestamp.clone()),
            }));
        }
        let lookup = format!("{}?url={url}", consts::AVAILABILITY_ENDPOINT);
        let response = self.http.get(&lookup).send().await.or_raise(|| ErrorKind::Http { url: lookup.clone() })?;
        let status = response.status();
        if !status.is_success() {
            exn::bail!(ErrorKind::Status { url: lookup, status: status.as_u16() });
        }
        let availability: Availability = response.json().await.or_raise(|| ErrorKind::Http { url: lookup })?;
        let Some(closest) = availability.archived_snapshots.closest else {
            return Ok(None);
        };
        tracing::debug!(snapshot = %closest.url, "closest snapshot located");
        Ok(Some(Snapshot {
            url: closest.url,
            timestamp: closest.timestamp.and_then(|raw| raw.parse().ok()),
        }))
    }
}

/// Prepends `http://` to bare hostnames; URLs that already carry a scheme
/// pass through untouched.
pub fn ensure_scheme(url: &str) -> String {
    if consts::SCHEME_REGEX.is_match(url) {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

fn snapshot_url(timestamp: &Timestamp, url: &str) -> String {
    format!("{}{timestamp}/{url}", consts::WEB_ARCHIVE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("example.com", "http://example.com")]
    #[case("example.com/path?q=1", "http://example.com/path?q=1")]
    #[case("http://example.com", "http://example.com")]
    #[case("https://example.com", "https://example.com")]
    #[case("HTTPS://EXAMPLE.COM", "HTTPS://EXAMPLE.COM")]
    #[case("ftp://example.com", "ftp://example.com")]
    fn scheme_defaulting(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(ensure_scheme(input), expected);
    }

    #[test]
    fn snapshot_url_embeds_timestamp_and_target() {
        let timestamp: Timestamp = "20200101".parse().unwrap();
        assert_eq!(
            snapshot_url(&timestamp, "http://example.com"),
            "https://web.archive.org/web/20200101/http://example.com"
        );
    }

    #[test]
    fn deserializes_availability_with_closest_snapshot() {
        let payload = r#"{
            "url": "http://example.com",
            "archived_snapshots": {
                "closest": {
                    "status": "200",
                    "available": true,
                    "url": "http://web.archive.org/web/20230101000000/http://example.com/",
                    "timestamp": "20230101000000"
                }
            }
        }"#;
        let availability: Availability = serde_json::from_str(payload).unwrap();
        let closest = availability.archived_snapshots.closest.unwrap();
        assert_eq!(closest.url, "http://web.archive.org/web/20230101000000/http://example.com/");
        assert_eq!(closest.timestamp.as_deref(), Some("20230101000000"));
    }

    #[test]
    fn deserializes_availability_without_snapshots() {
        let availability: Availability = serde_json::from_str(r#"{"archived_snapshots": {}}"#).unwrap();
        assert!(availability.archived_snapshots.closest.is_none());
    }
}
