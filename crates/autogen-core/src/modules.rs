//! Module names derived from declaration file names

use std::cmp::Ordering;

/// Strip a trailing `.d.ts`, or failing that `.ts`, from a file name.
///
/// Names with neither suffix are returned unchanged.
///
/// ```
/// use autogen_core::module_name;
///
/// assert_eq!(module_name("Api.d.ts"), "Api");
/// assert_eq!(module_name("cldr.ts"), "cldr");
/// assert_eq!(module_name("README.md"), "README.md");
/// ```
pub fn module_name(file_name: &str) -> &str {
    file_name
        .strip_suffix(".d.ts")
        .or_else(|| file_name.strip_suffix(".ts"))
        .unwrap_or(file_name)
}

/// Order names case-insensitively, breaking ties by their exact bytes.
///
/// The tie-break makes this a total order, so the sorted list does not
/// depend on the order the directory was listed in.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Turn directory entry names into the sorted, deduplicated module list.
///
/// Entries whose full name appears in `excluded` are dropped before their
/// suffix is stripped.
pub fn collect_module_names<I, S>(entries: I, excluded: &[String]) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            let skipped = excluded.iter().any(|skip| skip == entry);
            (!skipped).then(|| module_name(entry).to_string())
        })
        .collect();

    names.sort_by(|a, b| compare_case_insensitive(a, b));
    names.dedup();
    names
}
