const INSECURE_SCHEME: &str = "http://";
const SECURE_SCHEME: &str = "https://";

/// Rewrites a leading `http://` to `https://`. Other URLs pass through untouched.
#[must_use]
pub fn normalize_cover_url(url: &str) -> String {
    match url.strip_prefix(INSECURE_SCHEME) {
        Some(rest) => format!("{SECURE_SCHEME}{rest}"),
        None => url.to_owned(),
    }
}
