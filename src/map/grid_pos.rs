use super::Direction;

/// The location of a single cell in the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    /// Returns the difference between this position and another position
    /// This is like self - other, but negative values are allowed
    /// Returns (delta x, delta y)
    pub fn difference(self, other: GridPos) -> (isize, isize) {
        (self.x as isize - other.x as isize, self.y as isize - other.y as isize)
    }

    /// Returns the position one step in the given direction, or None if the
    /// step would leave a grid of the given width and height
    pub(in crate::map) fn step(self, dir: Direction, width: usize, height: usize) -> Option<GridPos> {
        let (dx, dy) = dir.delta();
        let x = self.x as isize + dx;
        let y = self.y as isize + dy;

        if x < 0 || x >= width as isize || y < 0 || y >= height as isize {
            None
        } else {
            Some(GridPos {x: x as usize, y: y as usize})
        }
    }
}
