//! Firebase Storage resumable upload protocol helpers
//!
//! Pure functions only: URL construction, chunk planning and response header
//! interpretation. Network calls live in `upload.rs`.

use crate::http_client::HttpResponse;

pub(crate) const HEADER_PROTOCOL: &str = "X-Goog-Upload-Protocol";
pub(crate) const HEADER_COMMAND: &str = "X-Goog-Upload-Command";
pub(crate) const HEADER_CONTENT_LENGTH: &str = "X-Goog-Upload-Header-Content-Length";
pub(crate) const HEADER_CONTENT_TYPE: &str = "X-Goog-Upload-Header-Content-Type";
pub(crate) const HEADER_OFFSET: &str = "X-Goog-Upload-Offset";
pub(crate) const HEADER_SESSION_URL: &str = "X-Goog-Upload-URL";
pub(crate) const HEADER_STATUS: &str = "X-Goog-Upload-Status";
pub(crate) const HEADER_SIZE_RECEIVED: &str = "X-Goog-Upload-Size-Received";
pub(crate) const HEADER_APP_ID: &str = "X-Firebase-GMPID";

/// Upload command sent in `X-Goog-Upload-Command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadCommand {
    Start,
    Upload,
    UploadFinalize,
    Query,
}

impl UploadCommand {
    pub(crate) fn as_header(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Upload => "upload",
            Self::UploadFinalize => "upload, finalize",
            Self::Query => "query",
        }
    }
}

/// Session state reported in `X-Goog-Upload-Status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionStatus {
    Active,
    Final,
    Cancelled,
    Missing,
    Other,
}

impl SessionStatus {
    pub(crate) fn from_response(response: &HttpResponse) -> Self {
        match response.header(HEADER_STATUS).map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("active") => Self::Active,
            Some(s) if s.eq_ignore_ascii_case("final") => Self::Final,
            Some(s) if s.eq_ignore_ascii_case("cancelled") => Self::Cancelled,
            Some(_) => Self::Other,
            None => Self::Missing,
        }
    }
}

/// `gs://bucket` and `bucket` both name the same bucket.
pub(crate) fn normalize_bucket(bucket: &str) -> &str {
    bucket.strip_prefix("gs://").unwrap_or(bucket).trim_end_matches('/')
}

/// Endpoint that starts an upload session for `key`.
pub(crate) fn start_url(host: &str, bucket: &str, key: &str) -> String {
    format!(
        "{host}/v0/b/{}/o?name={}",
        urlencoding::encode(normalize_bucket(bucket)),
        urlencoding::encode(key)
    )
}

/// Metadata endpoint of an existing object.
pub(crate) fn object_url(host: &str, bucket: &str, key: &str) -> String {
    format!(
        "{host}/v0/b/{}/o/{}",
        urlencoding::encode(normalize_bucket(bucket)),
        urlencoding::encode(key)
    )
}

/// Public download URL of an object for a given download token.
pub(crate) fn download_url(host: &str, bucket: &str, key: &str, token: &str) -> String {
    format!(
        "{}?alt=media&token={}",
        object_url(host, bucket, key),
        urlencoding::encode(token)
    )
}

/// Byte range of the next chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChunkPlan {
    pub start: u64,
    pub end: u64,
    /// Whether this chunk finalizes the upload.
    pub last: bool,
}

impl ChunkPlan {
    /// Plan the chunk starting at `offset`. A zero-byte object is one empty final chunk.
    pub(crate) fn next(offset: u64, total: u64, chunk_size: u64) -> Self {
        let start = offset.min(total);
        let end = start.saturating_add(chunk_size.max(1)).min(total);
        Self {
            start,
            end,
            last: end == total,
        }
    }

    pub(crate) fn len(&self) -> u64 {
        self.end - self.start
    }

    pub(crate) fn command(&self) -> UploadCommand {
        if self.last {
            UploadCommand::UploadFinalize
        } else {
            UploadCommand::Upload
        }
    }
}

/// Value of `X-Goog-Upload-Size-Received`, if present and numeric.
pub(crate) fn size_received(response: &HttpResponse) -> Option<u64> {
    response
        .header(HEADER_SIZE_RECEIVED)
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    fn response(headers: &[(&'static str, &'static str)]) -> HttpResponse {
        let mut map = HeaderMap::new();
        for (k, v) in headers {
            map.insert(*k, HeaderValue::from_static(v));
        }
        HttpResponse {
            status: 200,
            headers: map,
            body: String::new(),
        }
    }

    #[test]
    fn urls() {
        let host = "https://firebasestorage.googleapis.com";
        assert_eq!(
            start_url(host, "gs://b.appspot.com", "1700-cat photo.png"),
            "https://firebasestorage.googleapis.com/v0/b/b.appspot.com/o?name=1700-cat%20photo.png"
        );
        assert_eq!(
            object_url(host, "b.appspot.com", "dir/a.png"),
            "https://firebasestorage.googleapis.com/v0/b/b.appspot.com/o/dir%2Fa.png"
        );
        assert_eq!(
            download_url(host, "b.appspot.com", "a.png", "tok"),
            "https://firebasestorage.googleapis.com/v0/b/b.appspot.com/o/a.png?alt=media&token=tok"
        );
    }

    #[test]
    fn chunk_plan_walks_the_file() {
        let first = ChunkPlan::next(0, 600, 256);
        assert_eq!((first.start, first.end, first.last), (0, 256, false));
        assert_eq!(first.command(), UploadCommand::Upload);

        let last = ChunkPlan::next(512, 600, 256);
        assert_eq!((last.start, last.end, last.last), (512, 600, true));
        assert_eq!(last.len(), 88);
        assert_eq!(last.command().as_header(), "upload, finalize");
    }

    #[test]
    fn empty_object_is_single_final_chunk() {
        let plan = ChunkPlan::next(0, 0, 256);
        assert_eq!(plan.len(), 0);
        assert!(plan.last);
    }

    #[test]
    fn offset_past_end_is_clamped() {
        let plan = ChunkPlan::next(900, 600, 256);
        assert_eq!((plan.start, plan.end, plan.last), (600, 600, true));
    }

    #[test]
    fn session_status_and_size_headers() {
        let r = response(&[("x-goog-upload-status", "final")]);
        assert_eq!(SessionStatus::from_response(&r), SessionStatus::Final);

        let r = response(&[
            ("x-goog-upload-status", "active"),
            ("x-goog-upload-size-received", "262144"),
        ]);
        assert_eq!(SessionStatus::from_response(&r), SessionStatus::Active);
        assert_eq!(size_received(&r), Some(262_144));

        let r = response(&[]);
        assert_eq!(SessionStatus::from_response(&r), SessionStatus::Missing);
        assert_eq!(size_received(&r), None);
    }
}
