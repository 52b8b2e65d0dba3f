//! Width-capped resize with the no-enlargement policy.

use image::imageops::FilterType;
use image::DynamicImage;

/// Scales `image` down so its width does not exceed `max_width`.
///
/// Images at or below the cap are returned unchanged; wider images come out
/// at exactly `max_width` with the height scaled proportionally (rounded to
/// the nearest pixel, minimum 1).
pub fn resize_to_width_cap(image: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width <= max_width {
        return image;
    }

    let scaled_height = (height as f64 * max_width as f64 / width as f64)
        .round()
        .max(1.0) as u32;

    image.resize_exact(max_width, scaled_height, FilterType::Lanczos3)
}
