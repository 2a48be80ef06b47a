//! Tile grid: 0 = empty, anything else is a wall.
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    name: String,
    cells: Vec<Vec<u8>>,
}

impl Maze {
    /// Builds a grid from rows, rejecting empty or ragged input.
    pub fn new(name: impl Into<String>, cells: Vec<Vec<u8>>) -> Result<Self> {
        let name = name.into();
        let expected = match cells.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::EmptyGrid { map: name }),
        };
        if let Some((row, r)) = cells.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(Error::NonRectangularGrid {
                map: name,
                row,
                expected,
                found: r.len(),
            });
        }
        Ok(Self { name, cells })
    }

    /// Text form: one row per line, one digit per cell. Spaces inside a row
    /// are ignored and blank lines are skipped.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self> {
        let name = name.into();
        let mut cells = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                match ch.to_digit(10) {
                    Some(d) => row.push(d as u8),
                    None => {
                        return Err(Error::BadCell {
                            map: name,
                            line: line_no + 1,
                            ch,
                        });
                    }
                }
            }
            if !row.is_empty() {
                cells.push(row);
            }
        }
        Self::new(name, cells)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Tile value at column `i`, row `j`; `None` outside the grid.
    #[inline]
    pub fn tile(&self, i: isize, j: isize) -> Option<u8> {
        if i < 0 || j < 0 {
            return None;
        }
        self.cells.get(j as usize)?.get(i as usize).copied()
    }

    #[inline]
    pub fn is_wall(&self, i: isize, j: isize) -> bool {
        matches!(self.tile(i, j), Some(t) if t > 0)
    }

    /// Tile coordinates containing a world point.
    #[inline]
    pub fn tile_coords(wx: f32, wy: f32, tile_size: f32) -> (isize, isize) {
        ((wx / tile_size).floor() as isize, (wy / tile_size).floor() as isize)
    }
}

const MAPA_1: &str = "
11111111
10000001
10010001
10010001
10000101
10000001
11111111
";

const MAPA_2: &str = "
11111111
10100001
10101101
10000101
10110001
10000101
11111111
";

/// The two stock mazes shipped with the game.
pub fn builtin_maps() -> Vec<Maze> {
    [("Mapa 1", MAPA_1), ("Mapa 2", MAPA_2)]
        .into_iter()
        .map(|(name, text)| Maze::parse(name, text).expect("stock maps are valid grids"))
        .collect()
}
