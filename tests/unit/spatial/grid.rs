//! Tests for grid placement and blank-defaulting neighbor lookup

#[cfg(test)]
mod tests {
    use sokotiles::spatial::grid::{Grid, PlacedTile};
    use sokotiles::spatial::symbol::Symbol;
    use sokotiles::spatial::tiles::{Direction, Orientation, Tile};

    fn placed(symbol: Symbol, source_index: usize) -> PlacedTile {
        PlacedTile {
            tile: Tile::filled(3, symbol),
            source_index,
            orientation: Orientation::default(),
        }
    }

    // Tests a new grid is empty with the requested dimensions
    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 2, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.cell_count(), 8);
        assert_eq!(grid.placed_count(), 0);
        assert!(!grid.is_complete());
        assert_eq!(grid.blank_tile(), &Tile::blank(3));
    }

    // Tests lookups outside the grid resolve to the blank tile
    #[test]
    fn test_neighbor_outside_is_blank() {
        let mut grid = Grid::new(2, 2, 3);
        grid.place(0, 0, placed(Symbol::Wall, 0)).expect("empty cell");

        let blank = Tile::blank(3);
        assert_eq!(grid.neighbor(-1, 0), &blank);
        assert_eq!(grid.neighbor(0, -1), &blank);
        assert_eq!(grid.neighbor(2, 0), &blank);
        assert_eq!(grid.neighbor(0, 2), &blank);
        assert_eq!(grid.neighbor(0, 0), &Tile::filled(3, Symbol::Wall));
    }

    // Tests unpopulated cells inside the grid also resolve to the blank tile
    #[test]
    fn test_neighbor_unplaced_is_blank() {
        let grid = Grid::new(3, 3, 5);
        assert_eq!(grid.neighbor(1, 1), &Tile::blank(5));
        assert_eq!(grid.neighbor_of(0, 0, Direction::Top), &Tile::blank(5));
    }

    // Tests directional lookup reads the adjacent cell
    #[test]
    fn test_neighbor_of_directions() {
        let mut grid = Grid::new(3, 3, 3);
        grid.place(0, 1, placed(Symbol::Wall, 0)).expect("empty cell");
        grid.place(1, 0, placed(Symbol::Floor, 1)).expect("empty cell");
        grid.place(1, 2, placed(Symbol::Goal, 2)).expect("empty cell");
        grid.place(2, 1, placed(Symbol::Box, 3)).expect("empty cell");

        assert_eq!(grid.neighbor_of(1, 1, Direction::Top), &Tile::filled(3, Symbol::Wall));
        assert_eq!(grid.neighbor_of(1, 1, Direction::Left), &Tile::filled(3, Symbol::Floor));
        assert_eq!(grid.neighbor_of(1, 1, Direction::Right), &Tile::filled(3, Symbol::Goal));
        assert_eq!(grid.neighbor_of(1, 1, Direction::Bottom), &Tile::filled(3, Symbol::Box));
    }

    // Tests populated cells can never be replaced
    #[test]
    fn test_place_is_write_once() {
        let mut grid = Grid::new(1, 1, 3);
        assert!(grid.place(0, 0, placed(Symbol::Wall, 0)).is_ok());
        assert!(grid.place(0, 0, placed(Symbol::Floor, 1)).is_err());
        assert_eq!(grid.get(0, 0).map(|p| p.source_index), Some(0));
        assert!(grid.is_complete());
    }

    // Tests placement outside the grid is rejected
    #[test]
    fn test_place_out_of_bounds() {
        let mut grid = Grid::new(2, 1, 3);
        assert!(grid.place(1, 0, placed(Symbol::Wall, 0)).is_err());
        assert!(grid.place(0, 2, placed(Symbol::Wall, 0)).is_err());
        assert_eq!(grid.placed_count(), 0);
    }

    // Tests populated cells are listed in row-major order
    #[test]
    fn test_placed_iteration_order() {
        let mut grid = Grid::new(2, 2, 3);
        grid.place(1, 0, placed(Symbol::Wall, 2)).expect("empty cell");
        grid.place(0, 1, placed(Symbol::Wall, 1)).expect("empty cell");

        let order: Vec<(usize, usize)> = grid.placed().map(|(index, _)| index).collect();
        assert_eq!(order, vec![(0, 1), (1, 0)]);
    }
}
