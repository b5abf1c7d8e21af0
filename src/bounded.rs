use crate::{get_config, next_state, Cell, CellEvent, Direction, GoLGrid};

/// Dense fixed-size field.
///
/// Every cell is allocated at construction. Neighbor scans at the border
/// exclude out-of-range coordinates entirely; there is no wraparound and
/// the field never grows.
pub struct BoundedGrid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    events: Vec<CellEvent>,
}

impl BoundedGrid {
    /// Creates an all-dead field with `rows x columns` cells.
    pub fn blank(rows: usize, columns: usize) -> Self {
        assert!(rows >= 1 && columns >= 1);
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(row as i64, column as i64));
            }
        }
        Self {
            rows,
            columns,
            cells,
            events: vec![],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    fn index(&self, row: i64, column: i64) -> Option<usize> {
        if row < 0 || column < 0 || row >= self.rows as i64 || column >= self.columns as i64 {
            return None;
        }
        Some(row as usize * self.columns + column as usize)
    }

    fn count_live_neighbors(&self, row: i64, column: i64) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(i) = self.index(row + dr, column + dc) {
                    count += self.cells[i].is_living() as usize;
                }
            }
        }
        count
    }
}

impl GoLGrid for BoundedGrid {
    fn get_cell(&self, row: i64, column: i64) -> Option<&Cell> {
        self.index(row, column).map(|i| &self.cells[i])
    }

    fn set_cell(&mut self, row: i64, column: i64, alive: bool) {
        if let Some(i) = self.index(row, column) {
            if let Some(event) = self.cells[i].set_living(alive) {
                self.events.push(event);
            }
        }
    }

    fn toggle_cell(&mut self, row: i64, column: i64) {
        if let Some(i) = self.index(row, column) {
            let event = self.cells[i].toggle_living();
            self.events.push(event);
        }
    }

    fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_> {
        Box::new(self.cells.iter())
    }

    fn age_one_generation(&mut self) {
        // compute phase: stage every cell's future from the current snapshot
        for i in 0..self.cells.len() {
            let (row, column) = (self.cells[i].row(), self.cells[i].column());
            let next = next_state(
                self.cells[i].is_living(),
                self.count_live_neighbors(row, column),
            );
            self.cells[i].stage_next(next);
        }
        // advance phase: commit all staged futures
        let mut transitions = 0;
        for cell in self.cells.iter_mut() {
            if let Some(event) = cell.advance().expect("future staged before advance") {
                self.events.push(event);
                transitions += 1;
            }
        }
        log::debug!(
            "bounded generation advanced: {} transitions, population {}",
            transitions,
            self.population()
        );
    }

    fn shift(&mut self, direction: Direction) {
        let magnitude = get_config().shift_magnitude;
        let (dr, dc) = direction.offset(magnitude);
        let live = self.live_cells();
        // kill the originals first, then raise the translated copies;
        // translated coordinates that leave the field are dropped
        for &(row, column) in &live {
            self.set_cell(row, column, false);
        }
        for &(row, column) in &live {
            self.set_cell(row + dr, column + dc, true);
        }
        log::debug!(
            "shift {} by {}: {} live cells moved",
            direction.name(),
            magnitude,
            live.len()
        );
    }

    fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Some(event) = cell.set_living(false) {
                self.events.push(event);
            }
        }
    }

    fn drain_events(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }
}
