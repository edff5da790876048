use crate::util::char_offset;

/// Directory part of a slash separated path, following POSIX `dirname`.
///
/// Trailing separators are ignored, `"/"` stays `"/"`, a path without any
/// separator yields `"."` and the empty path stays empty.
pub(crate) fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return path;
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        None => ".",
        Some(idx) => {
            let parent = trimmed[..idx].trim_end_matches('/');
            if parent.is_empty() { "/" } else { parent }
        }
    }
}

/// Mount path of the application, always ending in `/`.
pub(crate) fn root(script_name: &str) -> String {
    let dir = dirname(script_name);
    if dir == "/" {
        return dir.to_string();
    }

    let mut root = String::with_capacity(dir.len() + 1);
    root.push_str(dir);
    root.push('/');
    root
}

/// Request path with everything from the first `?` removed.
pub(crate) fn strip_query(request_uri: &str) -> &str {
    match request_uri.find('?') {
        Some(idx) => &request_uri[..idx],
        None => request_uri,
    }
}

/// Request path relative to the mount point.
///
/// Servers disagree on whether `SCRIPT_NAME` is a literal prefix of
/// `REQUEST_URI` (`/app/index.php/foo`) or only shares its directory with it
/// (`/app/foo` behind a rewrite). Both shapes resolve to the same value.
pub(crate) fn path_info<'a>(request_uri: &'a str, script_name: &str) -> &'a str {
    let path = strip_query(request_uri);

    if let Some(rest) = path.strip_prefix(script_name) {
        return rest;
    }

    let root = root(script_name);
    if root == "/" {
        return path;
    }

    // Keep the slash that closes the root.
    let skip = root.chars().count() - 1;
    match char_offset(path, skip) {
        Some(idx) => &path[idx..],
        None => "",
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
