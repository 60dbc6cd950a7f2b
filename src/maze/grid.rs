use super::cell::Cell;

/// Flat row-major storage for the cells of a maze.
pub struct Grid {
    data: Box<[Cell]>,
    width: u8,
    height: u8,
}

impl Grid {
    pub fn new(width: u8, height: u8, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, coord: (u8, u8)) -> usize {
        if !self.is_in_bounds(coord) {
            panic!(
                "Cell {:?} is out of bounds for a {}x{} grid",
                coord, self.width, self.height
            );
        }
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Overwrites every cell, bypassing any per-wall bookkeeping.
    pub fn fill(&mut self, cell: Cell) {
        self.data.fill(cell);
    }
}

impl std::ops::Index<(u8, u8)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::IndexMut<(u8, u8)> for Grid {
    fn index_mut(&mut self, index: (u8, u8)) -> &mut Self::Output {
        let idx = self.ravel_index(index);
        &mut self.data[idx]
    }
}
