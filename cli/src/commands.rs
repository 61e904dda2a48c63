use std::io;

use svg_points::math::Size;
use svg_points::ExtractorOptions;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct ExtractCmd {
    /// SVG text.
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ExtractorOptions,
    /// Overrides the density of the options for this document.
    pub density: Option<f64>,
    pub format: OutputFormat,
    pub metadata: bool,
    pub count: bool,
    pub stats: bool,
}

/// Parses sizes written as `WIDTHxHEIGHT` or `WIDTH,HEIGHT`.
pub fn parse_size(src: &str) -> Option<Size> {
    let mut parts = src.trim().splitn(2, |c: char| c == 'x' || c == 'X' || c == ',');
    let width: f64 = parts.next()?.trim().parse().ok()?;
    let height: f64 = parts.next()?.trim().parse().ok()?;

    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return None;
    }

    Some(Size::new(width, height))
}

#[test]
fn output_formats() {
    assert_eq!(OutputFormat::from_name("csv"), Some(OutputFormat::Csv));
    assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
    assert_eq!(OutputFormat::from_name("xml"), None);
}

#[test]
fn sizes() {
    assert_eq!(parse_size("200x100"), Some(Size::new(200.0, 100.0)));
    assert_eq!(parse_size(" 1.5X2 "), Some(Size::new(1.5, 2.0)));
    assert_eq!(parse_size("30,40"), Some(Size::new(30.0, 40.0)));
    assert_eq!(parse_size("100"), None);
    assert_eq!(parse_size("0x10"), None);
    assert_eq!(parse_size("ax10"), None);
    assert_eq!(parse_size("10x-1"), None);
}
