//! URL clean-up applied before lookup
//!
//! Follows the host's raw URL escaping: spaces become `%20`, characters
//! outside the URL alphabet are dropped, encoded CR/LF are removed, a bare
//! host gets `http://`, and anything with a scheme other than http(s) is
//! rejected.

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Clean `raw` for lookup. `None` means there is nothing left to process.
pub fn sanitize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let spaced = trimmed.replace(' ', "%20");
    let mut url: String = spaced.chars().filter(|c| is_url_char(*c)).collect();
    strip_encoded_newlines(&mut url);

    if url.is_empty() {
        return None;
    }

    if !url.contains(':') {
        if url.starts_with(['/', '#', '?']) {
            return Some(url);
        }
        url.insert_str(0, "http://");
    }

    if let Some(scheme) = scheme_of(&url) {
        if !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
            return None;
        }
    }

    Some(url)
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}

/// Remove `%0d`/`%0a` (any case) until none are left, so nested forms such
/// as `%0%0dd` cannot reassemble one
fn strip_encoded_newlines(url: &mut String) {
    const NEEDLES: &[&str] = &["%0d", "%0a", "%0D", "%0A"];
    while NEEDLES.iter().any(|n| url.contains(n)) {
        for needle in NEEDLES {
            *url = url.replace(needle, "");
        }
    }
}

/// The scheme, if the text before the first `:` looks like one
fn scheme_of(url: &str) -> Option<&str> {
    let (candidate, _) = url.split_once(':')?;
    (!candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_alphanumeric()))
        .then_some(candidate)
}
