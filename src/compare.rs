use image::RgbImage;

use crate::loader::THUMBNAIL_SIZE;

/// Pairs scoring strictly below this are duplicates: 5% of the thumbnail's
/// pixel count.
pub const DUPLICATE_THRESHOLD: f64 = (THUMBNAIL_SIZE * THUMBNAIL_SIZE) as f64 * 0.05;

/// Sum of absolute per-sample differences, scaled so that one sample at full
/// difference contributes 1.0.
pub fn difference(a: &RgbImage, b: &RgbImage) -> f64 {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let total: u64 = a
        .as_raw()
        .iter()
        .zip(b.as_raw())
        .map(|(&x, &y)| u64::from((i32::from(x) - i32::from(y)).unsigned_abs()))
        .sum();
    total as f64 / 255.0
}

pub fn is_duplicate(a: &RgbImage, b: &RgbImage) -> bool {
    difference(a, b) < DUPLICATE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(THUMBNAIL_SIZE, THUMBNAIL_SIZE, Rgb(color))
    }

    #[test]
    fn test_threshold_value() {
        assert!((DUPLICATE_THRESHOLD - 819.2).abs() < 1e-9);
    }

    #[test]
    fn test_identical_thumbnails_are_duplicates() {
        let a = solid([12, 200, 99]);
        assert_eq!(difference(&a, &a.clone()), 0.0);
        assert!(is_duplicate(&a, &a.clone()));
    }

    #[test]
    fn test_offset_is_symmetric() {
        // 49152 samples * 10 / 255 ≈ 1927.5
        let dark = solid([100, 100, 100]);
        let light = solid([110, 110, 110]);
        assert_eq!(difference(&dark, &light), difference(&light, &dark));
        assert!(!is_duplicate(&dark, &light));
        assert!(!is_duplicate(&light, &dark));
    }

    #[test]
    fn test_small_offset_is_duplicate() {
        // 49152 * 4 / 255 ≈ 771.0
        let a = solid([50, 60, 70]);
        let b = solid([54, 56, 74]);
        assert!(is_duplicate(&a, &b));
    }

    #[test]
    fn test_threshold_is_strict() {
        // 4.25 per sample lands exactly on 819.2: a quarter of the samples
        // differ by 5, the rest by 4 (12288 * 5 + 36864 * 4 = 208896 = 819.2 * 255).
        let a = solid([0, 0, 0]);
        let mut b = solid([4, 4, 4]);
        for (i, sample) in b.iter_mut().enumerate() {
            if i % 4 == 0 {
                *sample = 5;
            }
        }
        assert!((difference(&a, &b) - DUPLICATE_THRESHOLD).abs() < 1e-9);
        assert!(!is_duplicate(&a, &b));
    }

    #[test]
    fn test_no_wraparound_on_negative_difference() {
        let black = solid([0, 0, 0]);
        let white = solid([255, 255, 255]);
        assert_eq!(difference(&black, &white), 49152.0);
        assert_eq!(difference(&white, &black), 49152.0);
    }
}
