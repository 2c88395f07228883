use anyhow::{bail, Result};
use image::Rgb;

/// Parse a color spec into an RGB pixel.
///
/// Accepts a small set of CSS color names (case-insensitive) plus `#rgb`
/// and `#rrggbb` hex forms.
pub fn parse_color(spec: &str) -> Result<Rgb<u8>> {
    let spec = spec.trim();

    if let Some(hex) = spec.strip_prefix('#') {
        return parse_hex(hex);
    }

    let channels = match spec.to_ascii_lowercase().as_str() {
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "lime" => [0, 255, 0],
        "blue" => [0, 0, 255],
        "navy" => [0, 0, 128],
        "yellow" => [255, 255, 0],
        "cyan" | "aqua" => [0, 255, 255],
        "magenta" | "fuchsia" => [255, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "silver" => [192, 192, 192],
        "maroon" => [128, 0, 0],
        "olive" => [128, 128, 0],
        "purple" => [128, 0, 128],
        "teal" => [0, 128, 128],
        "orange" => [255, 165, 0],
        _ => bail!("unknown color '{spec}', expected a color name or #rrggbb"),
    };

    Ok(Rgb(channels))
}

fn parse_hex(hex: &str) -> Result<Rgb<u8>> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("invalid hex color '#{hex}', expected #rgb or #rrggbb");
    }

    match hex.len() {
        3 => {
            // Single hex digit per channel, e.g. #f0c == #ff00cc
            let r = u8::from_str_radix(&hex[0..1], 16)?;
            let g = u8::from_str_radix(&hex[1..2], 16)?;
            let b = u8::from_str_radix(&hex[2..3], 16)?;
            Ok(Rgb([r * 17, g * 17, b * 17]))
        }
        6 => Ok(Rgb([
            u8::from_str_radix(&hex[0..2], 16)?,
            u8::from_str_radix(&hex[2..4], 16)?,
            u8::from_str_radix(&hex[4..6], 16)?,
        ])),
        _ => bail!("invalid hex color '#{hex}', expected #rgb or #rrggbb"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_color_names() {
        assert_eq!(parse_color("black").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("white").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_color("orange").unwrap(), Rgb([255, 165, 0]));
        assert_eq!(parse_color("grey").unwrap(), parse_color("gray").unwrap());
    }

    #[test]
    fn color_names_are_case_insensitive() {
        assert_eq!(parse_color("Black").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_color("WHITE").unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn parses_long_hex() {
        assert_eq!(parse_color("#ff8800").unwrap(), Rgb([255, 136, 0]));
        assert_eq!(parse_color("#000000").unwrap(), Rgb([0, 0, 0]));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(parse_color("#f80").unwrap(), Rgb([255, 136, 0]));
        assert_eq!(parse_color("#fff").unwrap(), Rgb([255, 255, 255]));
    }

    #[test]
    fn rejects_bad_specs() {
        assert!(parse_color("not-a-color").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#gggggg").is_err());
        assert!(parse_color("").is_err());
    }
}
