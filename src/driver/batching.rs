//! URL list parsing and batch splitting

/// One URL per line; lines are trimmed and blank lines dropped
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Contiguous chunks of `size` URLs, the last one possibly shorter. A size of
/// 0 is treated as 1.
pub fn split_batches(urls: &[String], size: usize) -> Vec<&[String]> {
    urls.chunks(size.max(1)).collect()
}
