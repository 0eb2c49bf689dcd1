//! Byte-size parsing and formatting utilities
//!
//! Handles conversion between human-readable size strings ("30 mb",
//! "~10 kb") and raw byte counts. Sizes normalized from byte counts pick
//! the largest unit that keeps the value below 1024.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use thiserror::Error;

/// Size unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    /// Bytes
    B,
    /// Kibibytes (1024 bytes)
    Kb,
    /// Mebibytes (1024^2 bytes)
    Mb,
    /// Gibibytes (1024^3 bytes)
    Gb,
}

impl SizeUnit {
    /// Units in ascending order of magnitude.
    const ASCENDING: [SizeUnit; 4] = [SizeUnit::B, SizeUnit::Kb, SizeUnit::Mb, SizeUnit::Gb];

    /// Byte multiplier for this unit
    pub fn multiplier(self) -> f64 {
        match self {
            Self::B => 1.0,
            Self::Kb => 1024.0,
            Self::Mb => 1_048_576.0,
            Self::Gb => 1_073_741_824.0,
        }
    }
}

impl Default for SizeUnit {
    fn default() -> Self {
        Self::B
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::B => write!(f, "b"),
            Self::Kb => write!(f, "kb"),
            Self::Mb => write!(f, "mb"),
            Self::Gb => write!(f, "gb"),
        }
    }
}

impl FromStr for SizeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" => Ok(Self::B),
            "kb" => Ok(Self::Kb),
            "mb" => Ok(Self::Mb),
            "gb" => Ok(Self::Gb),
            _ => Err(format!("Unknown size unit: {}", s)),
        }
    }
}

/// Error types for byte-size parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilesizeError {
    /// The string is not a valid size expression
    #[error("invalid size string '{input}'")]
    InvalidString {
        /// The rejected input.
        input: String,
    },
}

/// A representation of a file size
///
/// Pairs a display value/unit with the exact raw byte count, plus an
/// approximation marker rendered as a leading `~`.
///
/// ```rust,ignore
/// let fs = Filesize::parse("30 mb")?;
/// assert_eq!(fs.to_string(), "30 mb");
///
/// let fs = Filesize::from_bytes(1024.0, false);
/// assert_eq!(fs.to_string(), "1 kb");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Filesize {
    /// Size value expressed in `unit`
    pub size: f64,
    /// Size in bytes
    pub raw_bytes: f64,
    /// Size unit
    pub unit: SizeUnit,
    /// True if the size is approximate
    pub approximate: bool,
}

impl Filesize {
    /// Parse a string expressing a file size
    ///
    /// The string is an integer without leading zeros, optional whitespace,
    /// and a unit (`b`, `kb`, `mb`, or `gb`, case-insensitive). A leading
    /// `~` marks the size as approximate.
    pub fn parse(input: &str) -> Result<Self, FilesizeError> {
        let invalid = || FilesizeError::InvalidString {
            input: input.to_string(),
        };

        let trimmed = input.trim();
        let (approximate, rest) = match trimmed.strip_prefix('~') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };

        let digit_count = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        let (digits, unit_part) = rest.split_at(digit_count);
        if digits.is_empty() || digits.starts_with('0') {
            return Err(invalid());
        }

        let unit: SizeUnit = unit_part.trim().parse().map_err(|_| invalid())?;
        let size: f64 = digits.parse().map_err(|_| invalid())?;

        Ok(Self {
            size,
            raw_bytes: size * unit.multiplier(),
            unit,
            approximate,
        })
    }

    /// Build a `Filesize` from a raw byte count
    ///
    /// Picks the largest unit that keeps the displayed value below 1024
    /// and rounds it to two decimal places. The raw byte count is kept
    /// exact.
    pub fn from_bytes(value: f64, approximate: bool) -> Self {
        let mut size = value;
        let mut index = 0;
        while size >= 1024.0 && index < SizeUnit::ASCENDING.len() - 1 {
            size /= 1024.0;
            index += 1;
        }

        Self {
            size: (size * 100.0).round() / 100.0,
            raw_bytes: value,
            unit: SizeUnit::ASCENDING[index],
            approximate,
        }
    }
}

impl FromStr for Filesize {
    type Err = FilesizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Filesize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.approximate { "~" } else { "" };
        if self.unit == SizeUnit::B {
            write!(f, "{}{} {}", marker, self.size as i64, self.unit)
        } else {
            write!(f, "{}{} {}", marker, self.size, self.unit)
        }
    }
}

impl Add for Filesize {
    type Output = Filesize;

    fn add(self, other: Filesize) -> Filesize {
        Filesize::from_bytes(
            self.raw_bytes + other.raw_bytes,
            self.approximate || other.approximate,
        )
    }
}
