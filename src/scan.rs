use anyhow::{Context, Result};
use rqrr::PreparedImage;
use std::path::Path;

/// Decode every QR symbol found in the image at `path`.
///
/// Payloads come back in detection order. Grids that fail to decode are
/// skipped rather than failing the whole scan.
pub fn scan_image(path: &Path) -> Result<Vec<String>> {
    let gray = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?
        .to_luma8();

    let mut prepared = PreparedImage::prepare_from_greyscale(
        gray.width() as usize,
        gray.height() as usize,
        |x, y| gray.get_pixel(x as u32, y as u32)[0],
    );

    let decoded = prepared
        .detect_grids()
        .iter()
        .flat_map(|grid| grid.decode())
        .map(|(_, content)| content)
        .collect();

    Ok(decoded)
}
