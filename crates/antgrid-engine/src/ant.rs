//! Ant agents and the append-only registry that owns them.

use antgrid_core::{AntId, Color, Heading};

/// A single Langton's ant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntAgent {
    /// Current cell, always in range.
    pub position: (usize, usize),
    /// Direction of the next move.
    pub heading: Heading,
    /// Overlay colour drawn on the occupied cell.
    pub color: Color,
}

/// Ordered, append-only list of ants.
///
/// Every phase of a generation iterates ants in registry order, and ants
/// are never removed, so iteration order is stable for the whole run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AntRegistry {
    ants: Vec<AntAgent>,
}

impl AntRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ant and return its id.
    pub fn push(&mut self, ant: AntAgent) -> AntId {
        let id = AntId(self.ants.len() as u32);
        self.ants.push(ant);
        id
    }

    /// Ant by id.
    pub fn get(&self, id: AntId) -> Option<&AntAgent> {
        self.ants.get(id.0 as usize)
    }

    /// Number of ants.
    pub fn len(&self) -> usize {
        self.ants.len()
    }

    /// Whether no ant has been placed.
    pub fn is_empty(&self) -> bool {
        self.ants.is_empty()
    }

    /// Ants in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, AntAgent> {
        self.ants.iter()
    }

    /// Mutable ants in registry order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AntAgent> {
        self.ants.iter_mut()
    }

    /// Whether any ant stands on `pos`.
    pub fn occupies(&self, pos: (usize, usize)) -> bool {
        self.ants.iter().any(|a| a.position == pos)
    }

    /// Positions in registry order. Duplicates are kept.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        self.ants.iter().map(|a| a.position).collect()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[AntAgent] {
        &self.ants
    }
}

impl<'a> IntoIterator for &'a AntRegistry {
    type Item = &'a AntAgent;
    type IntoIter = std::slice::Iter<'a, AntAgent>;

    fn into_iter(self) -> Self::IntoIter {
        self.ants.iter()
    }
}
