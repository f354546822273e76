//! Boss bar shown to every player in the limbo.

use std::str::FromStr;

use serde::Serialize;

use super::{normalize_name, UnknownName};

/// Boss bar color. The discriminant is the protocol id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum BossBarColor {
    Pink = 0,
    Blue = 1,
    Red = 2,
    Green = 3,
    Yellow = 4,
    Purple = 5,
    White = 6,
}

impl BossBarColor {
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl FromStr for BossBarColor {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "PINK" => Ok(BossBarColor::Pink),
            "BLUE" => Ok(BossBarColor::Blue),
            "RED" => Ok(BossBarColor::Red),
            "GREEN" => Ok(BossBarColor::Green),
            "YELLOW" => Ok(BossBarColor::Yellow),
            "PURPLE" => Ok(BossBarColor::Purple),
            "WHITE" => Ok(BossBarColor::White),
            _ => Err(UnknownName {
                what: "boss bar color",
                name: s.to_string(),
                expected: "PINK, BLUE, RED, GREEN, YELLOW, PURPLE, WHITE",
            }),
        }
    }
}

/// How the bar is divided into segments. The discriminant is the protocol id.
///
/// Both the `SOLID`/`DASHED_n` names and the `PROGRESS`/`NOTCHED_n` names are
/// accepted when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum BossBarOverlay {
    Solid = 0,
    #[serde(rename = "DASHED_6")]
    Dashed6 = 1,
    #[serde(rename = "DASHED_10")]
    Dashed10 = 2,
    #[serde(rename = "DASHED_12")]
    Dashed12 = 3,
    #[serde(rename = "DASHED_20")]
    Dashed20 = 4,
}

impl BossBarOverlay {
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl FromStr for BossBarOverlay {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "SOLID" | "PROGRESS" => Ok(BossBarOverlay::Solid),
            "DASHED_6" | "NOTCHED_6" => Ok(BossBarOverlay::Dashed6),
            "DASHED_10" | "NOTCHED_10" => Ok(BossBarOverlay::Dashed10),
            "DASHED_12" | "NOTCHED_12" => Ok(BossBarOverlay::Dashed12),
            "DASHED_20" | "NOTCHED_20" => Ok(BossBarOverlay::Dashed20),
            _ => Err(UnknownName {
                what: "boss bar overlay",
                name: s.to_string(),
                expected: "SOLID, DASHED_6, DASHED_10, DASHED_12, DASHED_20",
            }),
        }
    }
}

/// A boss bar definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossBar {
    /// Title, with color codes already expanded.
    pub text: String,
    /// Fill fraction in `0.0..=1.0`.
    pub health: f32,
    pub color: BossBarColor,
    pub overlay: BossBarOverlay,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names_are_case_insensitive() {
        assert_eq!("pink".parse(), Ok(BossBarColor::Pink));
        assert_eq!("Purple".parse(), Ok(BossBarColor::Purple));
        assert_eq!(" WHITE ".parse(), Ok(BossBarColor::White));
    }

    #[test]
    fn test_unknown_color_lists_expected_names() {
        let err = "orange".parse::<BossBarColor>().unwrap_err();
        assert_eq!(err.name, "orange");
        assert!(err.to_string().contains("PINK"));
    }

    #[test]
    fn test_overlay_accepts_both_naming_schemes() {
        assert_eq!("SOLID".parse(), Ok(BossBarOverlay::Solid));
        assert_eq!("progress".parse(), Ok(BossBarOverlay::Solid));
        assert_eq!("dashed-12".parse(), Ok(BossBarOverlay::Dashed12));
        assert_eq!("NOTCHED_20".parse(), Ok(BossBarOverlay::Dashed20));
    }

    #[test]
    fn test_protocol_ids_follow_declaration_order() {
        assert_eq!(BossBarColor::Pink.id(), 0);
        assert_eq!(BossBarColor::White.id(), 6);
        assert_eq!(BossBarOverlay::Solid.id(), 0);
        assert_eq!(BossBarOverlay::Dashed20.id(), 4);
    }
}
