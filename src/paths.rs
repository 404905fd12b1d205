//! File name helpers working on path strings only.

/// Returns the file name of `path` without its last extension.
///
/// Both `/` and `\` separate path segments. Only one extension is stripped,
/// and only when at least one character follows the dot.
///
/// # Examples
/// ```
/// use i18n_page_kit::get_base_name;
///
/// assert_eq!(get_base_name("dir/sub/file.txt"), "file");
/// assert_eq!(get_base_name("a.tar.gz"), "a.tar");
/// assert_eq!(get_base_name("noext"), "noext");
/// ```
#[must_use]
pub fn get_base_name(path: &str) -> &str {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or_default();

    match file_name.rsplit_once('.') {
        Some((stem, extension)) if !extension.is_empty() => stem,
        _ => file_name,
    }
}
