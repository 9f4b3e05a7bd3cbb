use std::fmt;
use std::str::FromStr;

/// The fixed maze dimension tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MazeSize {
    /// 7×7
    #[default]
    Small,
    /// 15×15
    Medium,
    /// 25×25
    Large,
}

impl MazeSize {
    pub const ALL: [MazeSize; 3] = [MazeSize::Small, MazeSize::Medium, MazeSize::Large];

    /// `(rows, cols)` of the tier.
    pub const fn dims(self) -> (i32, i32) {
        match self {
            MazeSize::Small => (7, 7),
            MazeSize::Medium => (15, 15),
            MazeSize::Large => (25, 25),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MazeSize::Small => "small",
            MazeSize::Medium => "medium",
            MazeSize::Large => "large",
        }
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MazeSize {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" => Ok(MazeSize::Small),
            "medium" => Ok(MazeSize::Medium),
            "large" => Ok(MazeSize::Large),
            _ => Err(SizeError::Unknown(s.to_string())),
        }
    }
}

/// Errors that can occur when parsing a size token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    Unknown(String),
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(
                f,
                "invalid maze size \u{201c}{s}\u{201d}, choose small, medium or large"
            ),
        }
    }
}

impl std::error::Error for SizeError {}
