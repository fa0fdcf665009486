//! Import statement rendering

/// Render one side-effect import per module, each on its own line.
///
/// The result always ends with a single newline, so an empty list renders
/// as `"\n"`.
///
/// ```
/// use autogen_core::render_imports;
///
/// let names = vec!["Api".to_string(), "base".to_string()];
/// assert_eq!(render_imports(&names), "import './Api';\nimport './base';\n");
/// ```
pub fn render_imports(names: &[String]) -> String {
    let mut code = names
        .iter()
        .map(|name| format!("import './{name}';"))
        .collect::<Vec<_>>()
        .join("\n");
    code.push('\n');
    code
}
