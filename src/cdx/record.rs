// src/cdx/record.rs
// =============================================================================
// The shape of a single capture returned by the CDX API.
//
// The API answers in one of two shapes, picked by the `output` query
// parameter:
// - JSON mode: rows of [original, timestamp, statuscode]
// - text mode: one original URL per line
//
// A run only ever produces one of the two shapes, so every record in a
// collection has the same variant.
// =============================================================================

/// Column names of a JSON-mode row, in order.
///
/// The API also sends this as its first row; the fetcher strips it.
pub const HEADER: [&str; 3] = ["original", "timestamp", "statuscode"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdxRecord {
    /// A JSON-mode row
    Structured {
        url: String,
        timestamp: String,
        /// Kept as sent: the API uses "-" for captures without a status
        status: String,
    },
    /// A text-mode line
    TextOnly { url: String },
}

impl CdxRecord {
    pub fn structured(
        url: impl Into<String>,
        timestamp: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        CdxRecord::Structured {
            url: url.into(),
            timestamp: timestamp.into(),
            status: status.into(),
        }
    }

    pub fn text(url: impl Into<String>) -> Self {
        CdxRecord::TextOnly { url: url.into() }
    }

    /// The original URL of the capture, present in both shapes
    pub fn url(&self) -> &str {
        match self {
            CdxRecord::Structured { url, .. } | CdxRecord::TextOnly { url } => url,
        }
    }

    /// Status code as an integer, if the record carries a numeric one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CdxRecord::Structured { status, .. } => status.trim().parse().ok(),
            CdxRecord::TextOnly { .. } => None,
        }
    }

    /// The record's cells in table column order
    pub fn fields(&self) -> Vec<&str> {
        match self {
            CdxRecord::Structured {
                url,
                timestamp,
                status,
            } => vec![url.as_str(), timestamp.as_str(), status.as_str()],
            CdxRecord::TextOnly { url } => vec![url.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_both_shapes() {
        let structured = CdxRecord::structured("http://a.com/x", "20200101000000", "200");
        let text = CdxRecord::text("http://a.com/y");
        assert_eq!(structured.url(), "http://a.com/x");
        assert_eq!(text.url(), "http://a.com/y");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(
            CdxRecord::structured("http://a.com/", "1", "404").status_code(),
            Some(404)
        );
        assert_eq!(CdxRecord::structured("http://a.com/", "1", "-").status_code(), None);
        assert_eq!(CdxRecord::text("http://a.com/").status_code(), None);
    }
}
