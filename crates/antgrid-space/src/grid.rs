//! The toroidal cell store.

use crate::error::SpaceError;
use crate::torus::Torus;
use antgrid_core::{Cell, CellView, TrailCodec, TrailLevel};

/// A fixed-size toroidal array of [`Cell`]s.
///
/// Storage is row-major. All accessors take signed coordinates and wrap
/// them onto the torus first, so callers never index out of bounds.
/// `Clone` is a deep copy; [`snapshot`](Grid::snapshot) is the named way
/// to take one for external consumption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    torus: Torus,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid with every cell empty and coloured as `codec`'s background.
    ///
    /// # Examples
    ///
    /// ```
    /// use antgrid_core::TrailCodec;
    /// use antgrid_space::Grid;
    ///
    /// let grid = Grid::new_empty(53, 7, &TrailCodec::default()).unwrap();
    /// assert_eq!(grid.cell_count(), 371);
    /// assert!(grid.is_extinct());
    /// ```
    pub fn new_empty(width: usize, height: usize, codec: &TrailCodec) -> Result<Self, SpaceError> {
        let torus = Torus::new(width, height)?;
        Ok(Self {
            torus,
            cells: vec![Cell::empty(codec); torus.cell_count()],
        })
    }

    /// The grid topology.
    pub fn torus(&self) -> &Torus {
        &self.torus
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.torus.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.torus.height()
    }

    /// Total cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Cell at a wrapped coordinate.
    pub fn get(&self, x: i64, y: i64) -> &Cell {
        &self.cells[self.torus.index(x, y)]
    }

    /// Mutable cell at a wrapped coordinate.
    pub fn get_mut(&mut self, x: i64, y: i64) -> &mut Cell {
        let i = self.torus.index(x, y);
        &mut self.cells[i]
    }

    /// Replace the cell at a wrapped coordinate.
    pub fn set(&mut self, x: i64, y: i64, cell: Cell) {
        *self.get_mut(x, y) = cell;
    }

    /// Cell at an in-range `(x, y)` position.
    pub fn at(&self, pos: (usize, usize)) -> &Cell {
        self.get(pos.0 as i64, pos.1 as i64)
    }

    /// Mutable cell at an in-range `(x, y)` position.
    pub fn at_mut(&mut self, pos: (usize, usize)) -> &mut Cell {
        self.get_mut(pos.0 as i64, pos.1 as i64)
    }

    /// A fully independent deep copy.
    pub fn snapshot(&self) -> Grid {
        self.clone()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cells.len()).map(|i| self.torus.position(i))
    }

    /// `(position, cell)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (self.torus.position(i), c))
    }

    /// Renderer-facing view of one wrapped coordinate.
    pub fn view(&self, x: i64, y: i64) -> CellView {
        let (wx, wy) = self.torus.wrap(x, y);
        self.at((wx, wy)).view(wx, wy)
    }

    /// Views of every cell in row-major order.
    pub fn views(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells().map(|((x, y), c)| c.view(x, y))
    }

    /// Positions of every alive cell, row-major.
    pub fn alive_points(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|(_, c)| c.alive())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// True when no cell carries trail or an ant.
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(Cell::alive)
    }

    /// Number of cells whose stored level equals `level`.
    pub fn count_level(&self, level: TrailLevel) -> usize {
        self.cells.iter().filter(|c| c.level() == level).count()
    }

    /// Number of cells carrying an ant overlay.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}

/// Serialises as `{ width, height, cells }` with `cells[x][y]`, the
/// column-major layout renderers index by.
#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let columns: Vec<Vec<CellView>> = (0..self.width())
            .map(|x| {
                (0..self.height())
                    .map(|y| self.at((x, y)).view(x, y))
                    .collect()
            })
            .collect();
        let mut s = serializer.serialize_struct("Grid", 3)?;
        s.serialize_field("width", &self.width())?;
        s.serialize_field("height", &self.height())?;
        s.serialize_field("cells", &columns)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TrailCodec {
        TrailCodec::default()
    }

    #[test]
    fn new_empty_dimensions() {
        let g = Grid::new_empty(53, 7, &codec()).unwrap();
        assert_eq!(g.width(), 53);
        assert_eq!(g.height(), 7);
        assert_eq!(g.cell_count(), 53 * 7);
        assert_eq!(g.count_level(TrailLevel::EMPTY), 53 * 7);
    }

    #[test]
    fn new_empty_rejects_zero() {
        assert_eq!(
            Grid::new_empty(0, 7, &codec()),
            Err(SpaceError::EmptySpace)
        );
    }

    #[test]
    fn new_empty_rejects_overflowing_cell_count() {
        let side = 1usize << (usize::BITS / 2);
        assert!(matches!(
            Grid::new_empty(side, side, &codec()),
            Err(SpaceError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn get_and_set_wrap() {
        let codec = codec();
        let mut g = Grid::new_empty(4, 3, &codec).unwrap();
        g.set(-1, -1, Cell::trail(TrailLevel::MARKER, &codec));
        assert_eq!(g.at((3, 2)).level(), TrailLevel::MARKER);
        assert_eq!(g.get(7, 5).level(), TrailLevel::MARKER);
        assert_eq!(g.view(-1, 2).x, 3);
    }

    #[test]
    fn snapshot_is_independent() {
        let codec = codec();
        let mut g = Grid::new_empty(3, 3, &codec).unwrap();
        let snap = g.snapshot();
        g.at_mut((1, 1)).cover(codec.ant);
        assert!(!snap.at((1, 1)).is_occupied());
        assert!(g.at((1, 1)).is_occupied());
    }

    #[test]
    fn alive_points_and_extinction() {
        let codec = codec();
        let mut g = Grid::new_empty(3, 2, &codec).unwrap();
        assert!(g.is_extinct());
        g.set(2, 0, Cell::trail(TrailLevel::ordinary(0), &codec));
        g.at_mut((0, 1)).cover(codec.ant);
        assert_eq!(g.alive_points(), vec![(2, 0), (0, 1)]);
        assert!(!g.is_extinct());
        assert_eq!(g.occupied_count(), 1);
    }

    #[test]
    fn positions_are_row_major() {
        let g = Grid::new_empty(2, 2, &codec()).unwrap();
        let p: Vec<_> = g.positions().collect();
        assert_eq!(p, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(g.views().count(), 4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialises_column_major() {
        let codec = codec();
        let mut g = Grid::new_empty(2, 1, &codec).unwrap();
        g.set(1, 0, Cell::trail(TrailLevel::MARKER, &codec));
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["width"], 2);
        assert_eq!(json["cells"][1][0]["trailLevel"], 4);
        assert_eq!(json["cells"][1][0]["displayColor"], "#39d353");
        assert_eq!(json["cells"][0][0]["alive"], false);
    }
}
