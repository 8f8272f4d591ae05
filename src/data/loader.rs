use std::path::Path;

use super::model::Catalog;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Scan `dir` and build a catalog of the entries whose name starts with
/// `prefix`.
///
/// Best effort: an unreadable or missing directory yields an empty catalog
/// instead of an error, and so does a directory with no matching entries.
/// Entry names that are not valid UTF-8 cannot be shown or used as keys and
/// are skipped.
pub fn load_catalog(dir: &Path, prefix: &str) -> Catalog {
    let names = match list_entry_names(dir) {
        Ok(names) => names,
        Err(e) => {
            log::warn!("Cannot read picture directory {}: {e}", dir.display());
            return Catalog::default();
        }
    };

    let catalog = filter_by_prefix(names, prefix);
    log::info!(
        "Loaded {catalog} from {} (prefix {prefix:?})",
        dir.display()
    );
    catalog
}

/// Keep the names starting with `prefix`, sorted and deduplicated.
pub fn filter_by_prefix<I>(names: I, prefix: &str) -> Catalog
where
    I: IntoIterator<Item = String>,
{
    Catalog::from_names(names.into_iter().filter(|name| name.starts_with(prefix)))
}

// ---------------------------------------------------------------------------
// Directory listing
// ---------------------------------------------------------------------------

fn list_entry_names(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => log::debug!("Skipping non UTF-8 entry name {raw:?}"),
        }
    }
    Ok(names)
}
