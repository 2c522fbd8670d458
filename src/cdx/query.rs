// src/cdx/query.rs
// =============================================================================
// Turns whatever the user typed into a bare domain, and that domain into
// a CDX API request URL.
//
// Nothing here touches the network. Both functions are plain string
// work so they can be tested by comparing exact output.
//
// Rust concepts:
// - Option combinators: to fall back when URL parsing fails
// - Copy enums: OutputMode is passed by value everywhere
// =============================================================================

use url::Url;

/// Base URL of the Wayback Machine CDX search endpoint
pub const DEFAULT_CDX_ENDPOINT: &str = "https://web.archive.org/cdx/search/cdx";

/// Which shape the CDX API should answer with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Rows of [original, timestamp, statuscode]
    Json,
    /// One original URL per line
    Text,
}

impl OutputMode {
    pub fn from_text_flag(text: bool) -> Self {
        if text {
            OutputMode::Text
        } else {
            OutputMode::Json
        }
    }

    /// Value of the `output` query parameter
    pub fn as_param(self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::Text => "text",
        }
    }

    /// Value of the `fl` (field list) query parameter
    pub fn fields(self) -> &'static str {
        match self {
            OutputMode::Json => "original,timestamp,statuscode",
            OutputMode::Text => "original",
        }
    }
}

// Normalizes a user-supplied domain
//
// Examples:
//   "https://WWW.Example.com/" -> "example.com"
//   "example.com"             -> "example.com"
//
// Never fails: malformed input passes through best-effort and any problem
// shows up later as an HTTP error.
pub fn normalize_domain(raw: &str) -> String {
    let mut domain = raw.trim().to_lowercase();

    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain = host_of(&domain);
    }

    if let Some(rest) = domain.strip_prefix("www.") {
        domain = rest.to_string();
    }

    domain.trim().to_string()
}

// Host (and explicit port) of an absolute URL
//
// If the url crate rejects the input we just cut the scheme off and keep
// everything up to the first '/'.
fn host_of(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            match parsed.port() {
                Some(port) => format!("{}:{}", host, port),
                None => host.to_string(),
            }
        }
        Err(_) => {
            let without_scheme = input.split_once("://").map_or(input, |(_, rest)| rest);
            without_scheme
                .split('/')
                .next()
                .unwrap_or_default()
                .to_string()
        }
    }
}

// Builds the CDX request URL for a normalized domain
//
// `*.<domain>/*` matches the domain, every subdomain and every path.
// `collapse=urlkey` asks the API to return each distinct URL once.
pub fn build_cdx_url(endpoint: &str, domain: &str, mode: OutputMode) -> String {
    format!(
        "{}?url=*.{}/*&collapse=urlkey&output={}&fl={}",
        endpoint.trim_end_matches('?'),
        domain,
        mode.as_param(),
        mode.fields()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_scheme_and_www() {
        assert_eq!(normalize_domain("https://WWW.Example.com/"), "example.com");
        assert_eq!(normalize_domain("http://www.example.com/some/path?q=1"), "example.com");
    }

    #[test]
    fn test_normalize_plain_domain() {
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("  Example.COM \n"), "example.com");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["https://WWW.Example.com/", "WWW.test.org", "sub.example.com", "http://a.b:8080/x"] {
            let once = normalize_domain(input);
            assert_eq!(normalize_domain(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_normalize_keeps_port() {
        assert_eq!(normalize_domain("http://example.com:8080/"), "example.com:8080");
    }

    #[test]
    fn test_normalize_only_strips_one_www() {
        assert_eq!(normalize_domain("www.www.example.com"), "www.example.com");
    }

    #[test]
    fn test_build_json_url() {
        let url = build_cdx_url(DEFAULT_CDX_ENDPOINT, "example.com", OutputMode::Json);
        assert_eq!(
            url,
            "https://web.archive.org/cdx/search/cdx?url=*.example.com/*&collapse=urlkey&output=json&fl=original,timestamp,statuscode"
        );
    }

    #[test]
    fn test_build_text_url() {
        let url = build_cdx_url(DEFAULT_CDX_ENDPOINT, "example.com", OutputMode::Text);
        assert!(url.contains("url=*.example.com/*"));
        assert!(url.contains("output=text"));
        assert!(url.ends_with("fl=original"));
    }

    #[test]
    fn test_output_mode_from_flag() {
        assert_eq!(OutputMode::from_text_flag(true), OutputMode::Text);
        assert_eq!(OutputMode::from_text_flag(false), OutputMode::Json);
    }
}
