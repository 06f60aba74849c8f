use super::types::{MappingEntry, RenameOutcome};
use super::ImageError;
use crate::utils::IMAGE_EXTENSION;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

/// The table shipped with the Sanchez Import photo batch
pub fn default_mapping() -> Vec<MappingEntry> {
    vec![
        MappingEntry::new("imagen1.jpg", "15656416"),
        MappingEntry::new("imagen2.jpg", "2-40-1521"),
    ]
}

/// File name a product image gets once renamed
pub fn new_file_name(code: &str) -> String {
    format!("{}.{}", code, IMAGE_EXTENSION)
}

/// File names a dry run pretends to have renamed
#[derive(Debug, Default)]
struct SimulatedDir {
    added: HashSet<String>,
    removed: HashSet<String>,
}

impl SimulatedDir {
    async fn exists(&self, image_dir: &Path, name: &str) -> Result<bool, ImageError> {
        if self.removed.contains(name) {
            return Ok(false);
        }
        if self.added.contains(name) {
            return Ok(true);
        }
        Ok(fs::try_exists(image_dir.join(name)).await?)
    }

    fn rename(&mut self, old: &str, new: &str) {
        self.added.remove(old);
        self.removed.insert(old.to_string());
        self.removed.remove(new);
        self.added.insert(new.to_string());
    }
}

/// Rename every mapped image in `image_dir` to `{code}.jpg`.
///
/// Entries are handled in order and a missing source file is reported as
/// [`RenameOutcome::NotFound`]. With `dry_run` nothing is touched on disk,
/// but earlier entries still count as renamed for the ones that follow.
pub async fn rename_images(
    image_dir: &Path,
    mapping: &[MappingEntry],
    dry_run: bool,
) -> Result<Vec<RenameOutcome>, ImageError> {
    let mut outcomes = Vec::with_capacity(mapping.len());
    let mut simulated = SimulatedDir::default();

    for entry in mapping {
        let old_path = image_dir.join(&entry.file);
        let new_name = new_file_name(&entry.code);

        let exists = if dry_run {
            simulated.exists(image_dir, &entry.file).await?
        } else {
            fs::try_exists(&old_path).await?
        };

        if !exists {
            warn!("Image not found: {}", old_path.display());
            outcomes.push(RenameOutcome::NotFound {
                old: entry.file.clone(),
            });
            continue;
        }

        if dry_run {
            debug!("Dry run, skipping rename of {}", old_path.display());
            simulated.rename(&entry.file, &new_name);
            outcomes.push(RenameOutcome::WouldRename {
                old: entry.file.clone(),
                new: new_name,
            });
            continue;
        }

        let new_path = image_dir.join(&new_name);
        fs::rename(&old_path, &new_path).await?;
        debug!("Renamed {} -> {}", old_path.display(), new_path.display());

        outcomes.push(RenameOutcome::Renamed {
            old: entry.file.clone(),
            new: new_name,
        });
    }

    info!(
        "Processed {} image mapping entries in {}",
        outcomes.len(),
        image_dir.display()
    );
    Ok(outcomes)
}
