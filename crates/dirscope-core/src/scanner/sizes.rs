/// Directory-size pre-computation — one walk, then an O(n) bottom-up fold.
///
/// Computing each directory's recursive size on demand would re-stat shared
/// subtrees over and over (O(n·depth)). Instead the tree is walked exactly
/// once to record every directory's *direct* file bytes, and the totals are
/// then folded upward deepest-first, so each directory's value is final
/// before its own parent is processed.
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Mapping from absolute directory path to its recursive total size in bytes.
///
/// Built once by [`compute_directory_sizes`] and read-only afterwards.
/// Directories that could not be listed are present with size 0 rather than
/// absent, so upward aggregation and later lookups never miss a key.
pub type DirectorySizeMap = HashMap<PathBuf, u64>;

/// Walk `root` once and return the complete recursive-size map.
///
/// Symbolic links are never followed: symlinked files contribute nothing to
/// their parent's sum and symlinked directories are not descended into, so
/// cyclic trees cannot recurse or double-count. An unreadable directory is
/// recorded as 0 and the walk continues past it.
pub fn compute_directory_sizes(root: &Path) -> DirectorySizeMap {
    let mut sizes: DirectorySizeMap = HashMap::new();

    for entry_result in WalkDir::new(root).follow_links(false) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(err) => {
                // Typically access-denied on a directory read. Record the
                // directory as empty and keep walking.
                if let Some(path) = err.path() {
                    sizes.entry(path.to_path_buf()).or_insert(0);
                }
                debug!("size pass: skipping unreadable entry: {err}");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            sizes.entry(entry.path().to_path_buf()).or_insert(0);
        } else if file_type.is_file() {
            // With links unfollowed, symlinks report neither file nor dir,
            // so this branch counts real files only.
            let len = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    debug!("size pass: cannot stat {}: {err}", entry.path().display());
                    continue;
                }
            };
            if let Some(parent) = entry.path().parent() {
                *sizes.entry(parent.to_path_buf()).or_insert(0) += len;
            }
        }
    }

    // Fold child totals into parents, deepest paths first. Component count
    // is the depth ordering; by the time a directory is folded into its
    // parent, all of its own descendants have already been folded into it.
    let mut paths: Vec<PathBuf> = sizes.keys().cloned().collect();
    paths.sort_by_key(|p| std::cmp::Reverse(p.components().count()));
    for path in paths {
        let total = sizes[&path];
        if let Some(parent) = path.parent() {
            if let Some(parent_total) = sizes.get_mut(parent) {
                *parent_total += total;
            }
        }
    }

    sizes
}
