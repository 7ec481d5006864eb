//! URL to lookup-key resolution
//!
//! Mirrors how the host maps a public URL back to a record: only URLs on the
//! site's own host qualify, `?p=<id>` and `?page_id=<id>` address a record
//! directly, and anything else is matched by permalink path.

use super::types::RecordId;
use url::Url;

/// What a URL points at, before consulting the records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Id(RecordId),
    Path(String),
}

/// Work out the lookup key for `raw`, or `None` when the URL cannot belong to
/// this site
pub fn lookup_key(home: &Url, raw: &str) -> Option<LookupKey> {
    let url = if raw.starts_with(['/', '?', '#']) {
        home.join(raw).ok()?
    } else {
        Url::parse(raw).ok()?
    };

    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    if url.host_str() != home.host_str() {
        return None;
    }
    if url.port().is_some() && url.port() != home.port() {
        return None;
    }

    for (key, value) in url.query_pairs() {
        if key != "p" && key != "page_id" {
            continue;
        }
        if let Some(id) = value.parse::<RecordId>().ok().filter(|id| *id > 0) {
            return Some(LookupKey::Id(id));
        }
    }

    let home_path = normalize_path(home.path());
    let path = normalize_path(url.path());
    let relative = if home_path == "/" {
        path
    } else {
        let rest = path.strip_prefix(&home_path)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        normalize_path(rest)
    };

    if relative == "/" {
        return None;
    }

    Some(LookupKey::Path(relative))
}

/// Leading slash, no trailing slash, no duplicate slashes; the root is `/`
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}
