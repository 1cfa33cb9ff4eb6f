use crate::constants::MIN_HASH_LEN;

fn looks_like_hash(segment: &str) -> bool {
    segment.len() >= MIN_HASH_LEN
        && segment.chars().all(|c| c.is_ascii_hexdigit())
        && segment.chars().any(|c| c.is_ascii_digit())
}

/// Drops content-hash segments from a bundle file name for display.
///
/// `static/js/main.3f2a9c1b.chunk.js` becomes `static/js/main.chunk.js`. Only
/// the last path component is touched, and its first segment is always kept.
pub fn strip_hashes(name: &str) -> String {
    let (dir, file) = match name.rfind('/') {
        Some(idx) => name.split_at(idx + 1),
        None => ("", name),
    };

    let mut segments = file.split('.');
    let mut kept: Vec<&str> = segments.next().into_iter().collect();
    kept.extend(segments.filter(|s| !looks_like_hash(s)));

    format!("{}{}", dir, kept.join("."))
}
