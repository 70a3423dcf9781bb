//! Origin conventions for normalized region coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where `(0, 0)` sits and which way Y grows for user-supplied regions.
///
/// One convention applies to every region of an invocation. It is passed
/// explicitly to whatever needs it rather than kept as process state.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OriginConvention {
    /// Math-style axes: origin bottom-left, Y grows upward, so a region's
    /// `top` is numerically larger than its `bottom`.
    #[default]
    LeftBottom,
    /// Image-style axes: origin top-left, Y grows downward, so `top` is
    /// numerically smaller than `bottom`.
    LeftTop,
}

impl OriginConvention {
    /// Returns the command-line spelling of the convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            OriginConvention::LeftBottom => "left-bottom",
            OriginConvention::LeftTop => "left-top",
        }
    }

    /// Describes the vertical ordering a valid region must satisfy.
    pub fn vertical_rule(&self) -> &'static str {
        match self {
            OriginConvention::LeftBottom => "top > bottom",
            OriginConvention::LeftTop => "top < bottom",
        }
    }
}

impl fmt::Display for OriginConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left-bottom" | "left_bottom" | "lb" => Ok(OriginConvention::LeftBottom),
            "left-top" | "left_top" | "lt" => Ok(OriginConvention::LeftTop),
            other => Err(format!(
                "unknown origin '{}' (supported: left-bottom, left-top)",
                other
            )),
        }
    }
}
