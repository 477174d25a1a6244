//! Growable scratch buffer holding one closed vertex loop.

use std::ops::Index;

use crate::math::Vec3;

const DEFAULT_CAPACITY: usize = 10;

/// An ordered, implicitly closed loop of vertices.
///
/// The last vertex connects back to the first; the first vertex is never
/// repeated at the end. Storage is kept separate from the active length:
/// slots at index `>= len()` are scratch and carry no meaning between calls.
/// Capacity grows geometrically and is never given back, so a loop can be
/// reused as clipping output across many calls without allocating.
#[derive(Clone, Debug)]
pub struct VertexLoop {
    vertices: Vec<Vec3>,
    size: usize,
}

impl VertexLoop {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: vec![Vec3::ZERO; capacity],
            size: 0,
        }
    }

    /// Wraps existing vertices; all of them become active.
    pub fn from_vertices(vertices: Vec<Vec3>) -> Self {
        let size = vertices.len();
        Self { vertices, size }
    }

    /// Grows storage so at least `min_capacity` vertices fit.
    ///
    /// The new capacity is `max(min_capacity, old * 3 / 2 + 1)`. Active
    /// vertices are preserved. Does nothing if the capacity is already enough.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        let old = self.vertices.len();
        if min_capacity <= old {
            return;
        }

        let new_capacity = (old * 3 / 2 + 1).max(min_capacity);
        self.vertices.resize(new_capacity, Vec3::ZERO);
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the loop has enough vertices to enclose an area.
    pub fn is_polygon(&self) -> bool {
        self.size >= 3
    }

    /// Drops all active vertices. Capacity is kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Appends a vertex, growing the storage if it is full.
    #[inline]
    pub fn push(&mut self, v: Vec3) {
        if self.size == self.vertices.len() {
            self.ensure_capacity(self.size + 1);
        }
        self.vertices[self.size] = v;
        self.size += 1;
    }

    /// Active vertices.
    pub fn as_slice(&self) -> &[Vec3] {
        &self.vertices[..self.size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.as_slice().iter()
    }

    pub fn first(&self) -> Option<&Vec3> {
        self.as_slice().first()
    }

    pub fn last(&self) -> Option<&Vec3> {
        self.as_slice().last()
    }

    /// Shortens the active loop. Has no effect if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        self.size = self.size.min(len);
    }

    /// Replaces the active vertices with `src`.
    pub fn copy_from(&mut self, src: &[Vec3]) {
        self.ensure_capacity(src.len());
        self.vertices[..src.len()].copy_from_slice(src);
        self.size = src.len();
    }
}

impl Default for VertexLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for VertexLoop {
    type Output = Vec3;

    fn index(&self, index: usize) -> &Vec3 {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a VertexLoop {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vec<Vec3>> for VertexLoop {
    fn from(vertices: Vec<Vec3>) -> Self {
        Self::from_vertices(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty_with_default_capacity() {
        let lp = VertexLoop::new();
        assert!(lp.is_empty());
        assert_eq!(lp.capacity(), 10);
        assert!(!lp.is_polygon());
        assert_eq!(lp.first(), None);
    }

    #[test]
    fn test_ensure_capacity_grows_geometrically() {
        let mut lp = VertexLoop::with_capacity(10);
        lp.ensure_capacity(11);
        assert_eq!(lp.capacity(), 16);

        lp.ensure_capacity(100);
        assert_eq!(lp.capacity(), 100);

        // Never shrinks.
        lp.ensure_capacity(4);
        assert_eq!(lp.capacity(), 100);
    }

    #[test]
    fn test_ensure_capacity_from_zero() {
        let mut lp = VertexLoop::with_capacity(0);
        lp.ensure_capacity(1);
        assert_eq!(lp.capacity(), 1);
        lp.ensure_capacity(2);
        assert_eq!(lp.capacity(), 2);
    }

    #[test]
    fn test_push_grows_and_preserves_vertices() {
        let mut lp = VertexLoop::with_capacity(1);
        lp.push(Vec3::X);
        lp.push(Vec3::Y);
        lp.push(Vec3::Z);
        assert_eq!(lp.len(), 3);
        assert!(lp.capacity() >= 3);
        assert_eq!(lp.as_slice(), &[Vec3::X, Vec3::Y, Vec3::Z]);
        assert!(lp.is_polygon());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut lp = VertexLoop::from_vertices(vec![Vec3::ONE; 12]);
        assert_eq!(lp.len(), 12);
        lp.clear();
        assert!(lp.is_empty());
        assert_eq!(lp.capacity(), 12);
        assert!(lp.as_slice().is_empty());
    }

    #[test]
    fn test_copy_from_and_truncate() {
        let mut lp = VertexLoop::with_capacity(2);
        lp.copy_from(&[Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE]);
        assert_eq!(lp.len(), 4);
        assert_eq!(lp[3], Vec3::ONE);

        assert_eq!(lp.first(), Some(&Vec3::X));
        assert_eq!(lp.last(), Some(&Vec3::ONE));

        lp.truncate(2);
        assert_eq!(lp.as_slice(), &[Vec3::X, Vec3::Y]);
        assert_eq!(lp.last(), Some(&Vec3::Y));
        lp.truncate(5);
        assert_eq!(lp.len(), 2);
    }
}
