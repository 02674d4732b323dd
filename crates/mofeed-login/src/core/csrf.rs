//! CSRF token resolution.
//!
//! Sources are tried in order: page meta tag, host runtime session token, then the
//! CSRF cookie. The first non-empty value wins; with none found the request is still
//! sent with an empty header and the server decides.

use crate::core::ports::HostContext;

/// Where a resolved token came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsrfSource {
    /// `<meta name="csrf_token">` in the page head.
    MetaTag,
    /// Token exposed by the host framework's client runtime.
    Runtime,
    /// CSRF cookie.
    Cookie,
    /// Nothing found.
    Missing,
}

/// Resolve the CSRF token for `host`, returning the token and its source.
#[must_use]
pub fn resolve_csrf_token<H: HostContext + ?Sized>(
    host: &H,
    cookie_name: &str,
) -> (String, CsrfSource) {
    let candidates = [
        (CsrfSource::MetaTag, host.meta_csrf_token()),
        (CsrfSource::Runtime, host.runtime_csrf_token()),
        (
            CsrfSource::Cookie,
            cookie_value(&host.cookie_header(), cookie_name),
        ),
    ];
    candidates
        .into_iter()
        .find_map(|(source, token)| {
            token
                .filter(|value| !value.is_empty())
                .map(|value| (value, source))
        })
        .unwrap_or((String::new(), CsrfSource::Missing))
}

/// Look up a cookie by name in a `document.cookie` style header and URL-decode it.
#[must_use]
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key != name {
            return None;
        }
        Some(
            urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), std::borrow::Cow::into_owned),
        )
    })
}
