//! Indexed binary min-heap with in-place decrease-key.
//!
//! A bare `Vec` of cell ids plus a comparator, where every swap also updates
//! a back-reference so a cell always knows its own position. The
//! back-reference lives in the `NodeTable` rather than on the element
//! itself, to avoid pointer-identity tricks.

use crate::grid::CellId;
use crate::node_table::NodeTable;

/// `less(a, b)` defines "smaller = higher priority"; implementors compare
/// two cells against a table of mutable search state (and, for A*/JPS,
/// against a fixed goal).
pub trait Comparator {
    fn less(&self, table: &NodeTable, a: CellId, b: CellId) -> bool;
}

pub struct IndexedHeap<'c, C: Comparator> {
    elements: Vec<CellId>,
    cmp: &'c C,
}

impl<'c, C: Comparator> IndexedHeap<'c, C> {
    pub fn new(cmp: &'c C) -> Self {
        IndexedHeap {
            elements: Vec::with_capacity(256),
            cmp,
        }
    }

    pub fn empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }

    fn swap(&mut self, table: &mut NodeTable, i: usize, j: usize) {
        self.elements.swap(i, j);
        table.set_heap_index(self.elements[i], i);
        table.set_heap_index(self.elements[j], j);
    }

    fn sift_up(&mut self, table: &mut NodeTable, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.cmp.less(table, self.elements[i], self.elements[p]) {
                self.swap(table, i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, table: &mut NodeTable, mut i: usize) {
        loop {
            let (l, r) = (Self::left(i), Self::right(i));
            let mut smallest = i;
            if l < self.elements.len()
                && self.cmp.less(table, self.elements[l], self.elements[smallest])
            {
                smallest = l;
            }
            if r < self.elements.len()
                && self.cmp.less(table, self.elements[r], self.elements[smallest])
            {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap(table, i, smallest);
            i = smallest;
        }
    }

    /// Appends `cell` at the tail and sifts it up into place.
    pub fn insert(&mut self, table: &mut NodeTable, cell: CellId) {
        let idx = self.elements.len();
        self.elements.push(cell);
        table.set_heap_index(cell, idx);
        self.sift_up(table, idx);
    }

    /// Removes and returns the minimum element, or `None` if the heap is
    /// empty.
    pub fn extract_min(&mut self, table: &mut NodeTable) -> Option<CellId> {
        if self.elements.is_empty() {
            return None;
        }
        let min = self.elements[0];
        let last = self.elements.pop().unwrap();
        if !self.elements.is_empty() {
            self.elements[0] = last;
            table.set_heap_index(last, 0);
            self.sift_down(table, 0);
        }
        Some(min)
    }

    /// Re-establishes heap order after `cell`'s priority has *decreased*.
    /// `cell` must already be present in the heap (i.e. its colour is
    /// `Grey`); the driver never calls this otherwise.
    pub fn decrease_key(&mut self, table: &mut NodeTable, cell: CellId) {
        let idx = table.heap_index(cell);
        debug_assert!(
            idx < self.elements.len() && self.elements[idx] == cell,
            "decrease_key called on a cell not present in the heap"
        );
        self.sift_up(table, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_table::NodeTable;

    struct ByDist;
    impl Comparator for ByDist {
        fn less(&self, table: &NodeTable, a: CellId, b: CellId) -> bool {
            table.dist(a) < table.dist(b)
        }
    }

    #[test]
    fn extracts_in_ascending_order() {
        let cmp = ByDist;
        let mut table = NodeTable::new(10);
        table.reset(0);
        for (cell, d) in [(0, 5.0), (1, 2.0), (2, 8.0), (3, 1.0), (4, 4.0)] {
            table.set_dist(cell, d);
        }
        let mut heap = IndexedHeap::new(&cmp);
        for cell in [0, 1, 2, 3, 4] {
            heap.insert(&mut table, cell);
        }
        let mut out = Vec::new();
        while let Some(c) = heap.extract_min(&mut table) {
            out.push(table.dist(c));
        }
        assert_eq!(out, vec![1.0, 2.0, 4.0, 5.0, 8.0]);
    }

    #[test]
    fn heap_index_invariant_holds_after_every_operation() {
        let cmp = ByDist;
        let mut table = NodeTable::new(20);
        table.reset(0);
        let mut heap = IndexedHeap::new(&cmp);
        for cell in 0..20 {
            table.set_dist(cell, (19 - cell) as f64);
            heap.insert(&mut table, cell);
            for (i, &c) in heap.elements.iter().enumerate() {
                assert_eq!(table.heap_index(c), i);
            }
        }
        // Decrease a key buried in the middle and re-check the invariant.
        table.set_dist(15, -1.0);
        heap.decrease_key(&mut table, 15);
        for (i, &c) in heap.elements.iter().enumerate() {
            assert_eq!(table.heap_index(c), i);
        }
        assert_eq!(heap.extract_min(&mut table), Some(15));
    }

    #[test]
    fn extract_from_empty_heap_returns_none() {
        let cmp = ByDist;
        let mut table = NodeTable::new(1);
        let mut heap = IndexedHeap::new(&cmp);
        assert!(heap.empty());
        assert_eq!(heap.extract_min(&mut table), None);
    }
}
