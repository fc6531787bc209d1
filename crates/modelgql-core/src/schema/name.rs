/// Strips the module path and generic arguments from a Rust type name.
///
/// ```
/// use modelgql_core::schema::bare_type_name;
///
/// assert_eq!(bare_type_name("app::models::Human"), "Human");
/// assert_eq!(bare_type_name("app::Page<alloc::string::String>"), "Page");
/// assert_eq!(bare_type_name("Human"), "Human");
/// ```
pub fn bare_type_name(path: &str) -> &str {
    let path = match path.find('<') {
        Some(index) => &path[..index],
        None => path,
    };

    path.rsplit("::").next().unwrap_or(path)
}
