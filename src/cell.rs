use crate::{GridError, GridResult};

/// Scratch state of a cell's pending generation.
///
/// `NotComputed` until the compute phase stages a future, reset to
/// `NotComputed` as soon as `advance` consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NextState {
    #[default]
    NotComputed,
    Computed(bool),
}

/// State-transition notification: the cell at `(row, column)` is now `alive`.
///
/// Grids queue one of these for every committed transition; a rendering
/// collaborator drains the queue and repaints the affected cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub row: i64,
    pub column: i64,
    pub alive: bool,
}

/// A single automaton unit.
///
/// Coordinates are fixed at creation; cells are never moved, only recreated
/// at new coordinates. The `next` slot is the second half of the double
/// buffer that keeps generation advances simultaneous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: i64,
    column: i64,
    living: bool,
    next: NextState,
}

impl Cell {
    /// Creates a dead cell at `(row, column)` with no computed future.
    pub fn new(row: i64, column: i64) -> Self {
        Self {
            row,
            column,
            living: false,
            next: NextState::NotComputed,
        }
    }

    pub fn row(&self) -> i64 {
        self.row
    }

    pub fn column(&self) -> i64 {
        self.column
    }

    pub fn is_living(&self) -> bool {
        self.living
    }

    /// Sets the current state and discards any staged future.
    ///
    /// Returns the transition event if the state actually changed.
    pub fn set_living(&mut self, alive: bool) -> Option<CellEvent> {
        let changed = self.living != alive;
        self.living = alive;
        self.next = NextState::NotComputed;
        changed.then(|| self.event())
    }

    /// Flips the current state. Always a transition.
    pub fn toggle_living(&mut self) -> CellEvent {
        self.living = !self.living;
        self.next = NextState::NotComputed;
        self.event()
    }

    /// Stages the state this cell takes on the next commit.
    ///
    /// Never touches `living`; the neighbor scan that produces `next` reads
    /// only current states.
    pub fn stage_next(&mut self, next: bool) {
        self.next = NextState::Computed(next);
    }

    /// Whether a future has been staged for the pending generation.
    pub fn has_next(&self) -> bool {
        self.next != NextState::NotComputed
    }

    /// Commits the staged future and resets the scratch slot.
    ///
    /// Returns the transition event if the state changed, or
    /// [`GridError::PrematureAdvance`] if no future was staged.
    pub fn advance(&mut self) -> GridResult<Option<CellEvent>> {
        match self.next {
            NextState::NotComputed => Err(GridError::PrematureAdvance {
                row: self.row,
                column: self.column,
            }),
            NextState::Computed(next) => {
                let changed = self.living != next;
                self.living = next;
                self.next = NextState::NotComputed;
                Ok(changed.then(|| self.event()))
            }
        }
    }

    fn event(&self) -> CellEvent {
        CellEvent {
            row: self.row,
            column: self.column,
            alive: self.living,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_without_future_fails() {
        let mut cell = Cell::new(3, 7);
        assert_eq!(
            cell.advance(),
            Err(GridError::PrematureAdvance { row: 3, column: 7 })
        );
    }

    #[test]
    fn test_advance_commits_and_resets() {
        let mut cell = Cell::new(0, 0);
        cell.stage_next(true);
        let event = cell.advance().unwrap();
        assert_eq!(
            event,
            Some(CellEvent {
                row: 0,
                column: 0,
                alive: true
            })
        );
        assert!(cell.is_living());
        assert!(!cell.has_next());
        // second advance has nothing staged
        assert!(cell.advance().is_err());
    }

    #[test]
    fn test_advance_without_transition_is_silent() {
        let mut cell = Cell::new(0, 0);
        cell.stage_next(false);
        assert_eq!(cell.advance().unwrap(), None);
    }

    #[test]
    fn test_set_living_reports_transitions_only() {
        let mut cell = Cell::new(1, 2);
        assert!(cell.set_living(true).is_some());
        assert!(cell.set_living(true).is_none());
        assert!(cell.set_living(false).is_some());
    }

    #[test]
    fn test_set_living_discards_staged_future() {
        let mut cell = Cell::new(0, 0);
        cell.stage_next(true);
        cell.set_living(false);
        assert!(!cell.has_next());
    }

    #[test]
    fn test_toggle() {
        let mut cell = Cell::new(5, 5);
        let event = cell.toggle_living();
        assert!(event.alive);
        assert!(cell.is_living());
        assert!(!cell.toggle_living().alive);
    }
}
