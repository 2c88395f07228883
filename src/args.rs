use clap::{Args, Parser, Subcommand};
use image::Rgb;
use qrcode::EcLevel;
use std::path::PathBuf;

use crate::color::parse_color;

/// Map a single-letter error correction code onto the codec's level.
///
/// Case-insensitive; anything outside L/M/Q/H falls back to M.
pub fn ec_level_from_code(code: &str) -> EcLevel {
    match code.to_ascii_uppercase().as_str() {
        "L" => EcLevel::L,
        "Q" => EcLevel::Q,
        "H" => EcLevel::H,
        _ => EcLevel::M,
    }
}

#[derive(Parser)]
#[command(name = "qr-tool")]
#[command(version)]
#[command(about = "Generate QR code images and scan them back from image files")]
#[command(after_help = "Examples:
  qr-tool generate \"Hello, World!\" -o hello.png
  qr-tool generate \"https://github.com\" -o github.png -e H
  qr-tool scan hello.png")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a QR code image from text
    Generate(GenerateArgs),

    /// Read QR codes from an image file
    Scan(ScanArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Text or URL to encode
    pub data: String,

    /// Output image path
    #[arg(short, long, default_value = "qrcode.png")]
    pub output: PathBuf,

    /// Error correction level: L=low, M=medium, Q=quartile, H=high
    #[arg(short = 'e', long, default_value = "M")]
    pub error_correction: String,

    /// Module color
    #[arg(long, default_value = "black", value_parser = parse_color)]
    pub fill_color: Rgb<u8>,

    /// Background color
    #[arg(long, default_value = "white", value_parser = parse_color)]
    pub back_color: Rgb<u8>,

    /// Pixel size of each module
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    pub box_size: u32,

    /// Quiet zone width in modules
    #[arg(long, default_value = "4")]
    pub border: u32,
}

#[derive(Args)]
pub struct ScanArgs {
    /// Path to the image file
    pub image: PathBuf,
}
