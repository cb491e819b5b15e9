// Rust guideline compliant 2026-10-18

//! Extension to formatter command mapping.
//!
//! A [`RuleTable`] is built once at startup and never mutated. Each extension
//! (leading dot included) maps to exactly one command template containing the
//! [`PLACEHOLDER`] for the file path.

use serde::Serialize;
use std::path::Path;

/// Placeholder substituted with the file path when rendering a template.
pub const PLACEHOLDER: &str = "{file}";

/// Built-in rules, in lookup-table order.
const DEFAULT_RULES: &[(&str, &str)] = &[
    (".cs", "dotnet format {file}"),
    (".csproj", "dotnet format {file}"),
    (".vue", "prettier --write {file}"),
    (".js", "prettier --write {file}"),
    (".html", "prettier --write {file}"),
    (".css", "prettier --write {file}"),
    (".yml", "yamllint -f parsable {file}"),
    (".xml", "xmllint --format {file} --output {file}"),
];

/// A single extension to command template mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatRule {
    /// Extension including the leading dot, e.g. `.cs`.
    pub extension: String,
    /// Command template containing `{file}`.
    pub template: String,
}

impl FormatRule {
    /// Creates a new rule.
    pub fn new(extension: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            template: template.into(),
        }
    }

    /// Renders the command line for `path`.
    ///
    /// Every occurrence of the placeholder is replaced with the literal path.
    pub fn render(&self, path: &Path) -> String {
        self.template.replace(PLACEHOLDER, &path.to_string_lossy())
    }
}

/// Immutable lookup table from extension to [`FormatRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<FormatRule>,
}

impl RuleTable {
    /// Builds a table from `(extension, template)` pairs.
    ///
    /// A later pair for an extension already present replaces the earlier
    /// template in place, so each extension maps to exactly one command.
    pub fn from_pairs<I, E, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        let mut rules: Vec<FormatRule> = Vec::new();
        for (extension, template) in pairs {
            let rule = FormatRule::new(extension, template);
            match rules.iter_mut().find(|r| r.extension == rule.extension) {
                Some(existing) => existing.template = rule.template,
                None => rules.push(rule),
            }
        }
        Self { rules }
    }

    /// Returns an empty table, under which every file is a no-op.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Looks up the rule for an extension such as `.js`.
    pub fn get(&self, extension: &str) -> Option<&FormatRule> {
        self.rules.iter().find(|r| r.extension == extension)
    }

    /// Looks up the rule that applies to `path`, if any.
    pub fn rule_for(&self, path: &Path) -> Option<&FormatRule> {
        extension_of(path).and_then(|ext| self.get(ext))
    }

    /// Iterates over the rules in table order.
    pub fn iter(&self) -> impl Iterator<Item = &FormatRule> {
        self.rules.iter()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_RULES.iter().copied())
    }
}

/// Extracts the extension of the final path component, dot included.
///
/// Leading dots do not start an extension, so `.bashrc` has none while
/// `archive.tar.gz` yields `.gz`. Matching is case-sensitive. Only the
/// extension itself must be valid UTF-8, the rest of the name may not be.
pub fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.as_encoded_bytes();
    let stem_start = name.iter().take_while(|&&b| b == b'.').count();
    let idx = name[stem_start..].iter().rposition(|&b| b == b'.')?;
    let extension = std::str::from_utf8(&name[stem_start + idx..]).ok();
    if extension.is_none() {
        tracing::debug!(path = %path.display(), "extension is not valid UTF-8");
    }
    extension
}
