use crate::{Cell, CellEvent, GridError, GridResult, Pattern};
use std::str::FromStr;

/// Direction of a rigid translation of the live population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// `(row, column)` offset of a translation by `magnitude` cells.
    pub fn offset(self, magnitude: i64) -> (i64, i64) {
        match self {
            Direction::Left => (0, -magnitude),
            Direction::Right => (0, magnitude),
            Direction::Up => (-magnitude, 0),
            Direction::Down => (magnitude, 0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => {
                log::warn!("unknown shift direction: {:?}", s);
                Err(GridError::UnknownDirection(s.to_owned()))
            }
        }
    }
}

/// Common contract of the Game of Life grid engines.
///
/// Both engines advance generations with the same double-buffered protocol:
/// every relevant cell's future is computed from a snapshot of the current
/// generation before any cell commits. State transitions queue a
/// [`CellEvent`] that the caller drains after each operation.
pub trait GoLGrid {
    /// Pure lookup of the cell at `(row, column)`.
    ///
    /// Never materializes; on a sparse grid a missing cell means "dead".
    fn get_cell(&self, row: i64, column: i64) -> Option<&Cell>;

    /// Set the cell at `(row, column)` to `alive`.
    ///
    /// Coordinates outside a bounded grid are ignored.
    fn set_cell(&mut self, row: i64, column: i64, alive: bool);

    /// Flip the cell at `(row, column)`.
    fn toggle_cell(&mut self, row: i64, column: i64);

    /// Unordered iteration over the currently materialized cells.
    ///
    /// The borrow ties the iterator to the grid, so it cannot outlive a
    /// mutating operation; snapshot with [`GoLGrid::live_cells`] instead
    /// when coordinates must survive an advance or a shift.
    fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_>;

    /// Advance the whole field by one generation.
    fn age_one_generation(&mut self);

    /// Translate the live population by the configured shift magnitude.
    fn shift(&mut self, direction: Direction);

    /// Kill every cell.
    fn clear(&mut self);

    /// Take all state-transition events queued since the last drain.
    fn drain_events(&mut self) -> Vec<CellEvent>;

    /// Whether the cell at `(row, column)` is alive. Missing cells are dead.
    fn is_alive(&self, row: i64, column: i64) -> bool {
        self.get_cell(row, column).map_or(false, Cell::is_living)
    }

    /// Coordinates of all living cells, unordered.
    fn live_cells(&self) -> Vec<(i64, i64)> {
        self.cells()
            .filter(|cell| cell.is_living())
            .map(|cell| (cell.row(), cell.column()))
            .collect()
    }

    /// Total number of alive cells.
    fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_living()).count()
    }

    /// Stamp `pattern` with its offsets applied to the given origin.
    fn apply_pattern(&mut self, pattern: Pattern, origin_row: i64, origin_column: i64) {
        for &(dr, dc) in pattern.offsets() {
            self.set_cell(origin_row + dr, origin_column + dc, true);
        }
    }

    /// Fill a `rows x columns` window at `(top, left)` with random cells.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    fn randomize(
        &mut self,
        top: i64,
        left: i64,
        rows: i64,
        columns: i64,
        seed: Option<u64>,
        fill_rate: f64,
    ) {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        for row in top..top + rows {
            for column in left..left + columns {
                self.set_cell(row, column, rng.gen_bool(fill_rate));
            }
        }
    }

    /// Render a `rows x columns` window at `(top, left)` as text,
    /// `'#'` for alive and `'.'` for dead, one line per row.
    fn dump(&self, top: i64, left: i64, rows: i64, columns: i64) -> String {
        let mut result = String::new();
        for row in top..top + rows {
            for column in left..left + columns {
                result.push(if self.is_alive(row, column) { '#' } else { '.' });
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_names_roundtrip() {
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(direction.name().parse::<Direction>(), Ok(direction));
        }
    }

    #[test]
    fn test_unknown_direction_rejected() {
        assert_eq!(
            "sideways".parse::<Direction>(),
            Err(GridError::UnknownDirection("sideways".to_owned()))
        );
    }

    #[test]
    fn test_offsets() {
        assert_eq!(Direction::Left.offset(5), (0, -5));
        assert_eq!(Direction::Right.offset(5), (0, 5));
        assert_eq!(Direction::Up.offset(3), (-3, 0));
        assert_eq!(Direction::Down.offset(3), (3, 0));
    }
}
