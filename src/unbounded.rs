use crate::{get_config, next_state, Cell, CellEvent, Direction, GoLGrid};
use ahash::AHashMap;

/// Sparse field keyed by `(row, column)`, logically infinite in both axes.
///
/// A coordinate absent from the map is a dead cell and behaves identically
/// to an explicit dead cell when queried. Each generation the engine
/// materializes the dead boundary around the live population so the birth
/// rule can fire one step outside it, then compacts the map back down to
/// the cells that are actually alive.
pub struct UnboundedGrid {
    cells: AHashMap<(i64, i64), Cell>,
    events: Vec<CellEvent>,
}

impl UnboundedGrid {
    /// Creates an empty field.
    pub fn blank() -> Self {
        Self {
            cells: AHashMap::new(),
            events: vec![],
        }
    }

    /// Inserts a dead cell at `(row, column)` unless one is already present.
    ///
    /// Reads never allocate; this is the only path that grows the map.
    fn materialize(&mut self, row: i64, column: i64) -> &mut Cell {
        self.cells
            .entry((row, column))
            .or_insert_with(|| Cell::new(row, column))
    }

    fn count_live_neighbors(&self, row: i64, column: i64) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                count += self.is_alive(row + dr, column + dc) as usize;
            }
        }
        count
    }

    /// Rebuilds the map with only the living cells.
    fn compact(&mut self) {
        let old = std::mem::take(&mut self.cells);
        self.cells = old
            .into_iter()
            .filter(|(_, cell)| cell.is_living())
            .collect();
    }

    /// Number of materialized cells, dead ones included.
    pub fn materialized(&self) -> usize {
        self.cells.len()
    }
}

impl Default for UnboundedGrid {
    fn default() -> Self {
        Self::blank()
    }
}

impl GoLGrid for UnboundedGrid {
    fn get_cell(&self, row: i64, column: i64) -> Option<&Cell> {
        self.cells.get(&(row, column))
    }

    fn set_cell(&mut self, row: i64, column: i64, alive: bool) {
        // killing a cell that was never materialized is a no-op
        if !alive && !self.cells.contains_key(&(row, column)) {
            return;
        }
        if let Some(event) = self.materialize(row, column).set_living(alive) {
            self.events.push(event);
        }
    }

    fn toggle_cell(&mut self, row: i64, column: i64) {
        let event = self.materialize(row, column).toggle_living();
        self.events.push(event);
    }

    fn cells(&self) -> Box<dyn Iterator<Item = &Cell> + '_> {
        Box::new(self.cells.values())
    }

    fn age_one_generation(&mut self) {
        // compute phase: stage a future for every cell known at entry
        let known: Vec<(i64, i64)> = self.cells.keys().copied().collect();
        for &(row, column) in &known {
            let next = next_state(
                self.is_alive(row, column),
                self.count_live_neighbors(row, column),
            );
            if let Some(cell) = self.cells.get_mut(&(row, column)) {
                cell.stage_next(next);
            }
        }
        // materialize the dead boundary around the known cells, then close
        // over it: every cell the compute phase did not cover gets a future
        // too, so births one step outside the live footprint are not missed
        for &(row, column) in &known {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    self.materialize(row + dr, column + dc);
                }
            }
        }
        let fresh: Vec<(i64, i64)> = self
            .cells
            .iter()
            .filter(|(_, cell)| !cell.has_next())
            .map(|(&coord, _)| coord)
            .collect();
        for &(row, column) in &fresh {
            let next = next_state(
                self.is_alive(row, column),
                self.count_live_neighbors(row, column),
            );
            if let Some(cell) = self.cells.get_mut(&(row, column)) {
                cell.stage_next(next);
            }
        }
        // advance phase: commit all staged futures
        let mut transitions = 0;
        for cell in self.cells.values_mut() {
            if let Some(event) = cell.advance().expect("future staged before advance") {
                self.events.push(event);
                transitions += 1;
            }
        }
        // compaction: drop everything that is dead now
        self.compact();
        log::debug!(
            "unbounded generation advanced: {} transitions, population {}",
            transitions,
            self.cells.len()
        );
    }

    fn shift(&mut self, direction: Direction) {
        let magnitude = get_config().shift_magnitude;
        let (dr, dc) = direction.offset(magnitude);
        let live = self.live_cells();
        // all death events fire before any birth event, so a renderer
        // replaying the queue stays consistent when the translated
        // population overlaps the original one
        for &(row, column) in &live {
            if let Some(cell) = self.cells.get_mut(&(row, column)) {
                if let Some(event) = cell.set_living(false) {
                    self.events.push(event);
                }
            }
        }
        // install a fresh map holding only the translated population
        let mut future = AHashMap::with_capacity(live.len());
        for &(row, column) in &live {
            let (row, column) = (row + dr, column + dc);
            let mut cell = Cell::new(row, column);
            if let Some(event) = cell.set_living(true) {
                self.events.push(event);
            }
            future.insert((row, column), cell);
        }
        self.cells = future;
        log::debug!(
            "shift {} by {}: {} live cells moved",
            direction.name(),
            magnitude,
            live.len()
        );
    }

    fn clear(&mut self) {
        for cell in self.cells.values_mut() {
            if let Some(event) = cell.set_living(false) {
                self.events.push(event);
            }
        }
        self.cells.clear();
    }

    fn drain_events(&mut self) -> Vec<CellEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pattern;

    fn sorted_live(grid: &UnboundedGrid) -> Vec<(i64, i64)> {
        let mut live = grid.live_cells();
        live.sort_unstable();
        live
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let mut grid = UnboundedGrid::blank();
        grid.age_one_generation();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.materialized(), 0);
    }

    #[test]
    fn test_lookup_never_materializes() {
        let grid = UnboundedGrid::blank();
        assert!(grid.get_cell(3, 3).is_none());
        assert!(!grid.is_alive(3, 3));
        assert_eq!(grid.materialized(), 0);
    }

    #[test]
    fn test_negative_coordinates() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Blinker, -5, -5);
        grid.age_one_generation();
        assert_eq!(sorted_live(&grid), vec![(-4, -6), (-4, -5), (-4, -4)]);
    }

    #[test]
    fn test_compaction_keeps_live_cells_only() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Glider, 0, 0);
        for _ in 0..3 {
            grid.age_one_generation();
            assert_eq!(grid.materialized(), grid.population());
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Blinker, 2, 3);
        let vertical = sorted_live(&grid);

        grid.age_one_generation();
        assert_eq!(sorted_live(&grid), vec![(3, 2), (3, 3), (3, 4)]);

        grid.age_one_generation();
        assert_eq!(sorted_live(&grid), vertical);
    }

    #[test]
    fn test_glider_translates_each_period() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Glider, 2, 3);
        let start = sorted_live(&grid);
        for period in 1..=3 {
            for _ in 0..4 {
                grid.age_one_generation();
            }
            let expected: Vec<(i64, i64)> = start
                .iter()
                .map(|&(row, column)| (row + period, column + period))
                .collect();
            assert_eq!(sorted_live(&grid), expected);
        }
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Pulsar, 0, 0);
        let start = sorted_live(&grid);
        for generation in 1..=6 {
            grid.age_one_generation();
            if generation % 3 == 0 {
                assert_eq!(sorted_live(&grid), start);
            } else {
                assert_ne!(sorted_live(&grid), start);
            }
        }
    }

    #[test]
    fn test_clear_discards_the_map() {
        let mut grid = UnboundedGrid::blank();
        grid.apply_pattern(Pattern::Toad, 10, 10);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.materialized(), 0);
    }
}
