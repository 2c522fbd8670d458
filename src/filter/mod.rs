// src/filter/mod.rs
// =============================================================================
// Narrowing a record collection down to what the user asked for.
//
// Two independent filters, applied in this order by main.rs:
// - by file extension (works on both record shapes)
// - by HTTP status code (only meaningful for JSON-mode records)
//
// Both keep the original order and both are the identity when given an
// empty set, so "no filter requested" never looks like "nothing matched".
// =============================================================================

use std::collections::HashSet;

use crate::cdx::CdxRecord;

/// What to keep; an empty field means no filtering on that axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Lower-cased, without the leading dot
    pub extensions: Vec<String>,
    pub status_codes: HashSet<u16>,
}

impl FilterCriteria {
    // Builds criteria from raw CLI values
    //
    // Extensions are lower-cased and stripped of leading dots so that
    // "JS", ".js" and "js" all mean the same thing. A bare "." becomes the
    // empty extension, which matches URLs ending in a dot.
    pub fn new<S: AsRef<str>>(extensions: &[S], status_codes: &[u16]) -> Self {
        FilterCriteria {
            extensions: extensions
                .iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            status_codes: status_codes.iter().copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty() && self.status_codes.is_empty()
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

// Keeps records whose URL ends with "." + one of the extensions
//
// The URL is compared lower-cased, so "x.JS" matches "js". Extensions are
// normalized here as well, so raw user input can be passed straight in.
pub fn filter_by_extensions<S: AsRef<str>>(records: Vec<CdxRecord>, extensions: &[S]) -> Vec<CdxRecord> {
    let suffixes: Vec<String> = extensions
        .iter()
        .map(|ext| format!(".{}", normalize_extension(ext.as_ref())))
        .collect();

    if suffixes.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            let url = record.url().to_lowercase();
            suffixes.iter().any(|suffix| url.ends_with(suffix.as_str()))
        })
        .collect()
}

// Keeps JSON-mode records whose status code is in the set
//
// Text-mode records carry no status code and are passed through as they
// are. A JSON-mode record whose status is not a number (the API sends "-"
// for some captures) never matches.
pub fn filter_by_status_codes(records: Vec<CdxRecord>, status_codes: &HashSet<u16>) -> Vec<CdxRecord> {
    if status_codes.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| match record {
            CdxRecord::Structured { .. } => record
                .status_code()
                .is_some_and(|code| status_codes.contains(&code)),
            CdxRecord::TextOnly { .. } => true,
        })
        .collect()
}
