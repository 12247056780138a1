//! Deep-link reassembly onto a companion app's custom scheme.

use url::Url;

use super::request::NavRequest;

/// Rebuild a request's path, query and fragment onto `scheme://`.
///
/// The path is stripped of leading and trailing slashes; empty query and
/// fragment are omitted entirely (no trailing `?` or `#`). Returns `None`
/// when the reassembled string does not parse back into a URL.
///
/// # Examples
///
/// - `https://twitter.com/user/status/1?q=1#frag` → `echodotapp://user/status/1?q=1#frag`
/// - `https://twitter.com/` → `echodotapp://`
pub fn rewrite(scheme: &str, req: &NavRequest) -> Option<Url> {
    let mut rebuilt = format!("{scheme}://");

    let path = req.path().trim_matches('/');
    if !path.is_empty() {
        rebuilt.push_str(path);
    }
    if let Some(query) = req.query() {
        if !query.is_empty() {
            rebuilt.push('?');
            rebuilt.push_str(query);
        }
    }
    if let Some(fragment) = req.fragment() {
        if !fragment.is_empty() {
            rebuilt.push('#');
            rebuilt.push_str(fragment);
        }
    }

    Url::parse(&rebuilt).ok()
}
