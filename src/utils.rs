//! Reference normalization and duration formatting helpers.

/// URI prefix accepted in front of a playlist id, e.g. `spotify:playlist:<id>`.
pub const URI_SCHEME: &str = "spotify:";

const CANONICAL_ID_LEN: usize = 22;

/// Turns a user supplied playlist reference into the canonical catalog id.
///
/// Accepted forms:
///
/// - a bare 22 character alphanumeric id, returned unchanged
/// - a URI such as `spotify:playlist:<id>`, the last colon segment is returned
/// - a sharing URL such as `https://open.spotify.com/playlist/<id>?si=...`,
///   the last path segment without the query string is returned
///
/// The function never fails. On garbage input it returns its best guess,
/// which may be empty; the extraction pipeline rejects such ids.
///
/// # Example
///
/// ```
/// let id = normalize_playlist_ref("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M?si=abc");
/// assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
/// ```
pub fn normalize_playlist_ref(input: &str) -> String {
    let s = input.trim();

    if is_canonical_id(s) {
        return s.to_string();
    }

    if let Some(rest) = s.strip_prefix(URI_SCHEME) {
        // <type>:<id>
        if rest.contains(':') {
            return rest.rsplit(':').next().unwrap_or_default().to_string();
        }
    }

    let path = url_path(s);
    let segment = path
        .trim_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    segment.split('?').next().unwrap_or_default().to_string()
}

/// Returns `true` for exactly 22 ASCII alphanumeric characters.
pub fn is_canonical_id(s: &str) -> bool {
    s.len() == CANONICAL_ID_LEN && s.chars().all(|c| c.is_ascii_alphanumeric())
}

// Path component of a URL. A leading `scheme:` is dropped, with or without
// a `//authority` part; without a scheme the whole string is the path.
fn url_path(s: &str) -> &str {
    let without_fragment = s.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();

    let rest = match without_query.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => without_query,
    };

    match rest.strip_prefix("//") {
        Some(authority) => match authority.find('/') {
            Some(slash) => &authority[slash..],
            None => "",
        },
        None => rest,
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Formats milliseconds as `m:ss`. Minutes are not padded and may exceed 59.
///
/// Sub-second precision is truncated: `125_999` gives `"2:05"`.
pub fn format_duration(ms: u64) -> String {
    format!("{}:{:02}", ms / 60_000, (ms / 1000) % 60)
}

/// Parses an `m:ss` string back into milliseconds.
///
/// Anything that is not two colon separated integers, or that overflows,
/// yields `0`.
pub fn parse_duration(s: &str) -> u64 {
    let mut parts = s.trim().split(':');
    let (Some(m), Some(sec), None) = (parts.next(), parts.next(), parts.next()) else {
        return 0;
    };

    match (m.trim().parse::<u64>(), sec.trim().parse::<u64>()) {
        (Ok(m), Ok(sec)) => m
            .checked_mul(60)
            .and_then(|s| s.checked_add(sec))
            .and_then(|s| s.checked_mul(1000))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Formats milliseconds as `h:mm:ss`, used for playlist totals.
pub fn format_long_duration(ms: u64) -> String {
    let secs = ms / 1000;
    let (h, rest) = (secs / 3600, secs % 3600);
    format!("{}:{:02}:{:02}", h, rest / 60, rest % 60)
}
