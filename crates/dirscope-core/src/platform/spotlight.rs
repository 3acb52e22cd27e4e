/// Spotlight metadata via the macOS `mdls` command-line tool.
///
/// `mdls` answers attribute queries per path; Finder tags come back as a
/// parenthesised, quoted list and missing attributes print `(null)`. The
/// provider shells out per lookup and degrades to empty strings on any
/// spawn, decode, or status failure — extended metadata must never fail a
/// record.
use crate::metadata::ExtendedMetadata;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Extended-metadata provider backed by Spotlight.
pub struct SpotlightMetadata;

impl SpotlightMetadata {
    /// Probe whether `mdls` can be spawned at all.
    ///
    /// Frontends call this once up front to decide between Spotlight and
    /// the empty provider; the per-lookup paths still tolerate failure.
    pub fn is_available() -> bool {
        Command::new("mdls").arg("--help").output().is_ok()
    }

    /// Raw value of one Spotlight attribute, or `None` when the attribute
    /// is absent or the lookup failed.
    fn raw_attribute(path: &Path, attribute: &str) -> Option<String> {
        let output = Command::new("mdls")
            .args(["-name", attribute, "-raw"])
            .arg(path)
            .output()
            .map_err(|err| {
                debug!("mdls spawn failed for {}: {err}", path.display());
                err
            })
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if raw.is_empty() || raw == "(null)" {
            None
        } else {
            Some(raw)
        }
    }
}

impl ExtendedMetadata for SpotlightMetadata {
    fn tags_of(&self, path: &Path) -> String {
        Self::raw_attribute(path, "kMDItemUserTags")
            .map(|raw| clean_tag_list(&raw))
            .unwrap_or_default()
    }

    fn kind_of(&self, path: &Path) -> String {
        Self::raw_attribute(path, "kMDItemKind").unwrap_or_default()
    }
}

/// Clean the raw `mdls` tag-list output into a comma-joined string.
///
/// Input looks like `(\n    "Red",\n    Work\n)`; output is `Red, Work`.
pub fn clean_tag_list(raw: &str) -> String {
    let inner = raw.trim().trim_matches(|c| c == '(' || c == ')');
    inner
        .split(',')
        .map(|tag| tag.trim().trim_matches('"'))
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_tag_list_strips_parens_and_quotes() {
        assert_eq!(clean_tag_list("(\n    \"Red\",\n    \"Work\"\n)"), "Red, Work");
    }

    #[test]
    fn clean_tag_list_handles_unquoted_tags() {
        assert_eq!(clean_tag_list("(Home, \"Taxes 2024\")"), "Home, Taxes 2024");
    }

    #[test]
    fn clean_tag_list_of_empty_input_is_empty() {
        assert_eq!(clean_tag_list(""), "");
        assert_eq!(clean_tag_list("()"), "");
    }

    #[test]
    fn clean_tag_list_single_tag() {
        assert_eq!(clean_tag_list("(\"Important\")"), "Important");
    }

    /// The availability probe must never panic, whatever the platform.
    #[test]
    fn availability_probe_does_not_panic() {
        let _ = SpotlightMetadata::is_available();
    }
}
