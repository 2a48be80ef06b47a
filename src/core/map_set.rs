//! Ordered set of mazes with one current entry.
use crate::core::maze::Maze;
use crate::error::{Error, Result};

/// A maze plus the enemies it starts with.
#[derive(Clone, Debug)]
pub struct MapEntry {
    pub maze: Maze,
    pub enemies: Vec<(f32, f32)>,
}

#[derive(Clone, Debug)]
pub struct MapSet {
    entries: Vec<MapEntry>,
    current: usize,
}

impl MapSet {
    pub fn new(entries: Vec<MapEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyMapSet);
        }
        Ok(Self { entries, current: 0 })
    }

    #[inline]
    pub fn current(&self) -> &MapEntry {
        &self.entries[self.current]
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves to the next map, wrapping after the last one.
    pub fn advance(&mut self) -> &MapEntry {
        self.current = (self.current + 1) % self.entries.len();
        &self.entries[self.current]
    }
}
