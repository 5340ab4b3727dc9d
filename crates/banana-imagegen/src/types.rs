use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Target output resolution tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// ~1024px on the long edge
    #[default]
    OneK,
    /// ~2048px on the long edge
    TwoK,
    /// ~4096px on the long edge
    FourK,
}

impl Resolution {
    /// Wire label shared by every provider dialect
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1K" => Ok(Self::OneK),
            "2K" => Ok(Self::TwoK),
            "4K" => Ok(Self::FourK),
            other => Err(format!("unknown resolution '{other}' (expected 1K, 2K, or 4K)")),
        }
    }
}

/// Aspect ratio labels accepted by the structured dialect fields
pub const SUPPORTED_ASPECT_RATIOS: [&str; 10] = [
    "1:1", "2:3", "3:2", "3:4", "4:3", "4:5", "5:4", "9:16", "16:9", "21:9",
];

/// Pick the supported ratio label closest to `width:height`
///
/// Host panels call this to turn arbitrary canvas proportions into a
/// label the providers understand.
pub fn nearest_aspect_ratio(width: u32, height: u32) -> &'static str {
    if width == 0 || height == 0 {
        return "1:1";
    }

    let target = f64::from(width) / f64::from(height);

    SUPPORTED_ASPECT_RATIOS
        .iter()
        .min_by(|a, b| {
            let da = (ratio_value(a) - target).abs();
            let db = (ratio_value(b) - target).abs();
            da.total_cmp(&db)
        })
        .copied()
        .unwrap_or("1:1")
}

fn ratio_value(label: &str) -> f64 {
    let (w, h) = label.split_once(':').unwrap_or(("1", "1"));
    let w: f64 = w.parse().unwrap_or(1.0);
    let h: f64 = h.parse().unwrap_or(1.0);
    w / h
}

/// A single image generation request
///
/// Constructed fresh per call and immutable for its duration. The
/// provider is referenced by name; credentials stay in the
/// configuration owned by the generator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Name of the configured provider to use
    pub provider: String,
    /// Text description of the desired image
    pub prompt: String,
    /// Output resolution tier
    pub resolution: Resolution,
    /// Aspect ratio label, e.g. "16:9"
    pub aspect_ratio: String,
    /// Optional reference image fed to the model
    pub input_image: Option<PathBuf>,
    /// Let the provider consult web search while generating
    pub search_web: bool,
    /// Echo and persist the outgoing payload
    pub debug_mode: bool,
}

impl GenerationRequest {
    /// Create a request with default resolution, square ratio, and no
    /// extras
    pub fn new(provider: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            prompt: prompt.into(),
            resolution: Resolution::default(),
            aspect_ratio: "1:1".to_owned(),
            input_image: None,
            search_web: false,
            debug_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_labels() {
        assert_eq!(Resolution::OneK.as_str(), "1K");
        assert_eq!(Resolution::TwoK.as_str(), "2K");
        assert_eq!(Resolution::FourK.as_str(), "4K");
    }

    #[test]
    fn resolution_parses_case_insensitively() {
        assert_eq!("4k".parse::<Resolution>().unwrap(), Resolution::FourK);
        assert!("8K".parse::<Resolution>().is_err());
    }

    #[test]
    fn nearest_ratio_exact_matches() {
        assert_eq!(nearest_aspect_ratio(1024, 1024), "1:1");
        assert_eq!(nearest_aspect_ratio(1920, 1080), "16:9");
        assert_eq!(nearest_aspect_ratio(1080, 1920), "9:16");
    }

    #[test]
    fn nearest_ratio_approximate_canvas() {
        // A4 paper is close to 3:4 in portrait
        assert_eq!(nearest_aspect_ratio(210, 297), "3:4");
    }

    #[test]
    fn nearest_ratio_degenerate_dimensions() {
        assert_eq!(nearest_aspect_ratio(0, 100), "1:1");
    }
}
