//! Line descriptors for reporting which triple won.

use super::Position;
use serde::{Deserialize, Serialize};

/// One of the eight lines of three on the board.
///
/// The display and serde names are stable identifiers used by front ends
/// to pick the overlay to draw.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Line {
    /// Row 0.
    #[serde(rename = "horizontal_0")]
    #[strum(serialize = "horizontal_0")]
    Horizontal0,
    /// Row 1.
    #[serde(rename = "horizontal_1")]
    #[strum(serialize = "horizontal_1")]
    Horizontal1,
    /// Row 2.
    #[serde(rename = "horizontal_2")]
    #[strum(serialize = "horizontal_2")]
    Horizontal2,
    /// Column 0.
    #[serde(rename = "vertical_0")]
    #[strum(serialize = "vertical_0")]
    Vertical0,
    /// Column 1.
    #[serde(rename = "vertical_1")]
    #[strum(serialize = "vertical_1")]
    Vertical1,
    /// Column 2.
    #[serde(rename = "vertical_2")]
    #[strum(serialize = "vertical_2")]
    Vertical2,
    /// Top-left to bottom-right.
    #[serde(rename = "diagonal_principal")]
    #[strum(serialize = "diagonal_principal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[serde(rename = "diagonal_secundaria")]
    #[strum(serialize = "diagonal_secundaria")]
    AntiDiagonal,
}

impl Line {
    /// Order in which the evaluator looks for a completed line.
    ///
    /// Row i is checked before column i, for i = 0..2, then the two
    /// diagonals. The first complete line in this order is the one reported.
    pub const SCAN_ORDER: [Line; 8] = [
        Line::Horizontal0,
        Line::Vertical0,
        Line::Horizontal1,
        Line::Vertical1,
        Line::Horizontal2,
        Line::Vertical2,
        Line::MainDiagonal,
        Line::AntiDiagonal,
    ];

    /// The three cells forming this line.
    pub fn cells(self) -> [Position; 3] {
        match self {
            Line::Horizontal0 => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            Line::Horizontal1 => [
                Position::MiddleLeft,
                Position::Center,
                Position::MiddleRight,
            ],
            Line::Horizontal2 => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            Line::Vertical0 => [
                Position::TopLeft,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
            Line::Vertical1 => [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            Line::Vertical2 => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            Line::MainDiagonal => [Position::TopLeft, Position::Center, Position::BottomRight],
            Line::AntiDiagonal => [Position::TopRight, Position::Center, Position::BottomLeft],
        }
    }
}
