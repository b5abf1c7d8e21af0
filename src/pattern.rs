use crate::{GridError, GridResult};
use std::fmt;
use std::str::FromStr;

/// Named seed layouts, reproduced from the standard definitions.
///
/// Each pattern is a fixed set of `(row, column)` offsets, normalized so
/// the smallest row and column offsets are 0; grids stamp them at a
/// caller-chosen origin via [`crate::GoLGrid::apply_pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Glider,
    Blinker,
    Beacon,
    Toad,
    Pulsar,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Beacon,
        Pattern::Toad,
        Pattern::Pulsar,
    ];

    /// Relative coordinates of the pattern's live cells.
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Pattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Pattern::Blinker => &[(0, 0), (1, 0), (2, 0)],
            Pattern::Beacon => &[
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 2),
                (2, 3),
                (3, 2),
                (3, 3),
            ],
            Pattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Pattern::Pulsar => &[
                (0, 2),
                (0, 3),
                (0, 4),
                (0, 8),
                (0, 9),
                (0, 10),
                (2, 0),
                (2, 5),
                (2, 7),
                (2, 12),
                (3, 0),
                (3, 5),
                (3, 7),
                (3, 12),
                (4, 0),
                (4, 5),
                (4, 7),
                (4, 12),
                (5, 2),
                (5, 3),
                (5, 4),
                (5, 8),
                (5, 9),
                (5, 10),
                (7, 2),
                (7, 3),
                (7, 4),
                (7, 8),
                (7, 9),
                (7, 10),
                (8, 0),
                (8, 5),
                (8, 7),
                (8, 12),
                (9, 0),
                (9, 5),
                (9, 7),
                (9, 12),
                (10, 0),
                (10, 5),
                (10, 7),
                (10, 12),
                (12, 2),
                (12, 3),
                (12, 4),
                (12, 8),
                (12, 9),
                (12, 10),
            ],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Beacon => "beacon",
            Pattern::Toad => "toad",
            Pattern::Pulsar => "pulsar",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| {
                log::warn!("unknown pattern: {:?}", s);
                GridError::UnknownPattern(s.to_owned())
            })
    }
}
