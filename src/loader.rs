use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::WalkDir;

use crate::error::{CullError, Result};

/// Side length of the square comparison thumbnail.
pub const THUMBNAIL_SIZE: u32 = 128;

const LOSSY_EXTS: [&str; 2] = ["jpg", "jpeg"];
const LOSSLESS_EXTS: [&str; 1] = ["png"];

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg} [{pos}/{len}]";

/// Format class of a source file, judged by its suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Lossy,
    Lossless,
}

impl Compression {
    /// Suffix match is case-sensitive: `photo.JPG` is not picked up.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if LOSSY_EXTS.contains(&ext) {
            Some(Compression::Lossy)
        } else if LOSSLESS_EXTS.contains(&ext) {
            Some(Compression::Lossless)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub thumbnail: RgbImage,
    pub dimensions: (u32, u32),
}

impl LoadedImage {
    pub fn new(path: impl Into<PathBuf>, image: &DynamicImage) -> Self {
        let thumbnail = image
            .resize_exact(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::CatmullRom)
            .to_rgb8();
        Self {
            path: path.into(),
            thumbnail,
            dimensions: image.dimensions(),
        }
    }

    /// Decode `path` by content and build its thumbnail.
    pub fn open(path: &Path) -> Result<Self> {
        let img = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| CullError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .decode()
            .map_err(|source| CullError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(path, &img))
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.dimensions.0) * u64::from(self.dimensions.1)
    }

    pub fn compression(&self) -> Option<Compression> {
        Compression::from_path(&self.path)
    }
}

/// List the direct children of `dir` that are files with a supported suffix,
/// in directory order.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let path = entry?.into_path();
        if path.is_file() && Compression::from_path(&path).is_some() {
            images.push(path);
        }
    }
    Ok(images)
}

/// Decode every supported image directly inside `dir`.
///
/// Any file that fails to open or decode aborts the whole load.
pub fn load_directory(dir: &Path) -> Result<Vec<LoadedImage>> {
    let paths = scan_directory(dir)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template(SPINNER_TEMPLATE)?);
    spinner.set_length(paths.len() as u64);
    spinner.set_message("Loading images…");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let mut images = Vec::with_capacity(paths.len());
    for path in &paths {
        let image = match LoadedImage::open(path) {
            Ok(image) => image,
            Err(e) => {
                spinner.abandon_with_message("Loading failed");
                return Err(e);
            }
        };
        log::debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.dimensions.0,
            image.dimensions.1
        );
        images.push(image);
        spinner.inc(1);
    }
    spinner.finish_and_clear();

    log::info!("Loaded {} images from {}", images.len(), dir.display());
    Ok(images)
}
