use anyhow::{Context, Result};
use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode};
use std::path::PathBuf;

/// One QR generation job, assembled from CLI arguments.
pub struct QrRequest {
    pub data: String,
    pub error_correction: EcLevel,
    pub box_size: u32,
    pub border: u32,
    pub fill_color: Rgb<u8>,
    pub back_color: Rgb<u8>,
    pub output_path: PathBuf,
}

/// Encode the request data and rasterize the module matrix.
///
/// Each module becomes a `box_size` pixel square, surrounded by a quiet
/// zone of `border` modules on every side.
pub fn render_qr_image(request: &QrRequest) -> Result<RgbImage> {
    let code = QrCode::with_error_correction_level(&request.data, request.error_correction)
        .context("Failed to generate QR code")?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let side = (width + 2 * request.border) * request.box_size;

    let image = ImageBuffer::from_fn(side, side, |x, y| {
        let module_x = (x / request.box_size).checked_sub(request.border);
        let module_y = (y / request.box_size).checked_sub(request.border);

        match (module_x, module_y) {
            (Some(mx), Some(my)) if mx < width && my < width => {
                if modules[(my * width + mx) as usize] == Color::Dark {
                    request.fill_color
                } else {
                    request.back_color
                }
            }
            _ => request.back_color,
        }
    });

    Ok(image)
}

/// Render the request and save it to its output path.
///
/// The image format is inferred from the path extension.
pub fn write_qr_image(request: &QrRequest) -> Result<()> {
    let image = render_qr_image(request)?;

    image
        .save(&request.output_path)
        .with_context(|| format!("Failed to save QR code to {}", request.output_path.display()))?;

    Ok(())
}
