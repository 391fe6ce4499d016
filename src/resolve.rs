use std::cmp::Ordering;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::compare::is_duplicate;
use crate::error::{CullError, Result};
use crate::loader::{Compression, LoadedImage};

/// One duplicate pair after ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kept: PathBuf,
    pub removed: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Survivor {
    First,
    Second,
}

/// Rank two duplicates. `first` must precede `second` in load order.
///
/// More pixels wins. On a tie a lossless `second` beats a lossy `first`;
/// anything else keeps `first`.
pub fn pick_survivor(first: &LoadedImage, second: &LoadedImage) -> Survivor {
    match first.pixel_count().cmp(&second.pixel_count()) {
        Ordering::Greater => Survivor::First,
        Ordering::Less => Survivor::Second,
        Ordering::Equal => match (first.compression(), second.compression()) {
            (Some(Compression::Lossy), Some(Compression::Lossless)) => Survivor::Second,
            _ => Survivor::First,
        },
    }
}

/// Decide every (kept, removed) pair without touching the filesystem.
///
/// Pairs are visited as `i < j` in load order; an image that has lost once is
/// skipped from then on, so each file is removed at most once and a removed
/// file is never reported as kept.
pub fn plan(images: &[LoadedImage]) -> Vec<Resolution> {
    let mut removed = vec![false; images.len()];
    let mut resolutions = Vec::new();

    for i in 0..images.len() {
        if removed[i] {
            continue;
        }
        for j in (i + 1)..images.len() {
            if removed[j] {
                continue;
            }
            let (first, second) = (&images[i], &images[j]);
            if !is_duplicate(&first.thumbnail, &second.thumbnail) {
                continue;
            }

            let (better, worse) = match pick_survivor(first, second) {
                Survivor::First => (i, j),
                Survivor::Second => (j, i),
            };
            log::debug!(
                "{} duplicates {}; keeping {}",
                first.path.display(),
                second.path.display(),
                images[better].path.display()
            );
            removed[worse] = true;
            resolutions.push(Resolution {
                kept: images[better].path.clone(),
                removed: images[worse].path.clone(),
            });

            if worse == i {
                break;
            }
        }
    }

    resolutions
}

/// Report each resolution as `<kept> <removed>` and, unless `dry_run`, delete
/// the removed file right after its line is written.
pub fn apply<W: Write>(resolutions: &[Resolution], dry_run: bool, out: &mut W) -> Result<()> {
    for resolution in resolutions {
        writeln!(
            out,
            "{} {}",
            resolution.kept.display(),
            resolution.removed.display()
        )
        .map_err(CullError::Report)?;

        if dry_run {
            continue;
        }
        fs::remove_file(&resolution.removed).map_err(|source| CullError::Remove {
            path: resolution.removed.clone(),
            source,
        })?;
        log::debug!("Deleted {}", resolution.removed.display());
    }

    if dry_run && !resolutions.is_empty() {
        log::info!("Dry-run only; no files were changed.");
    }
    Ok(())
}
