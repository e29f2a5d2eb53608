use regex::Regex;

/// Normalizes a filter value before it is stored: strips characters the
/// search endpoints reject, trims, and collapses whitespace runs. Case is
/// kept; company and skill names are matched by the endpoints, not here.
pub fn sanitize_filter(input: &str) -> String {
    let clean = Regex::new(r"[^A-Za-z0-9@&+.,'/ -]").unwrap();
    let s = clean.replace_all(input, "").into_owned();

    let collapse = Regex::new(r" +").unwrap();
    collapse.replace_all(s.trim(), " ").into_owned()
}
