//! Link destination rules: which hrefs get the root-path prefix, and how the current page
//! location is normalized before matching.

/// True for hrefs of the form `scheme://...` (lowercase `[a-z+]` scheme) or `//host/...`.
fn is_absolute_like(href: &str) -> bool {
    if href.starts_with("//") {
        return true;
    }
    let Some((scheme, rest)) = href.split_once(':') else {
        return false;
    };
    !scheme.is_empty()
        && scheme.bytes().all(|b| b.is_ascii_lowercase() || b == b'+')
        && rest.starts_with("//")
}

/// Whether `href` should be rewritten relative to the site root.
///
/// Empty hrefs, fragment references (`#...`), scheme-prefixed URLs (`https://...`) and
/// protocol-relative URLs (`//cdn/...`) are left alone. Everything else is relative.
pub fn is_relative_href(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#') && !is_absolute_like(href)
}

/// Applies the root-path prefix to a relative href; other hrefs are returned unchanged.
pub fn prefix_href(root_path: &str, href: &str) -> String {
    if is_relative_href(href) {
        format!("{root_path}{href}")
    } else {
        href.to_string()
    }
}

/// A directory location stands for its index document.
pub fn current_page(location: &str, index_document: &str) -> String {
    if location.ends_with('/') {
        format!("{location}{index_document}")
    } else {
        location.to_string()
    }
}
