//! Post-login redirect resolution.

/// Decoded value of the first `name` parameter in a URL query string.
///
/// Accepts the string with or without its leading `?`. `+` decodes to a space,
/// matching `URLSearchParams`.
#[must_use]
pub fn query_param(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
}

/// Where to send the browser after a successful login.
///
/// The `param` query value is used verbatim unless it is empty or mentions
/// `login`, which would bounce the user straight back to this page.
#[must_use]
pub fn resolve_redirect_target(search: &str, param: &str, home_path: &str) -> String {
    match query_param(search, param) {
        Some(target) if !target.is_empty() && !target.contains("login") => target,
        _ => home_path.to_string(),
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or(spaced.clone(), std::borrow::Cow::into_owned)
}
