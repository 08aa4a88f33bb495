//! Per-cell dominance index over present masks.
//!
//! A [`DominanceIndex`] stores every mask the search has already enqueued
//! for one cell and answers a single question: is there a stored mask
//! `V` with `V ⊆ query`? If so, the query state can collect nothing the
//! stored state could not, and it is pruned.
//!
//! The index is a binary trie over the mask bits, lowest bit first. Nodes
//! live in one arena vector and refer to their children by index, so the
//! whole structure can be exported and reimported without pointer fixups.

use smallvec::SmallVec;

use crate::error::DominanceImportError;
use glide_core::PresentMask;

/// One trie node: the child for a `0` bit and the child for a `1` bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    /// Arena indices of the children, `[zero, one]`.
    pub children: [Option<u32>; 2],
}

/// Subset-query trie for one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DominanceIndex {
    width: u32,
    nodes: Vec<TrieNode>,
}

const ROOT: u32 = 0;

impl DominanceIndex {
    /// An empty index over masks of `width` bits.
    ///
    /// # Panics
    ///
    /// Panics if `width > 32`.
    pub fn new(width: u32) -> Self {
        assert!(
            width <= PresentMask::MAX_WIDTH,
            "dominance width {width} exceeds {}",
            PresentMask::MAX_WIDTH
        );
        Self {
            width,
            nodes: Vec::new(),
        }
    }

    /// Rebuild an index from an exported node arena.
    ///
    /// Node 0 is the root. Every child index must point past its parent and
    /// inside the arena, which rules out cycles and dangling references.
    ///
    /// # Errors
    ///
    /// Returns [`DominanceImportError`] if the width exceeds 32 or a child
    /// index is out of range or not greater than its parent's index.
    pub fn from_nodes(width: u32, nodes: Vec<TrieNode>) -> Result<Self, DominanceImportError> {
        if width > PresentMask::MAX_WIDTH {
            return Err(DominanceImportError::WidthTooLarge { width });
        }
        let node_count = nodes.len();
        for (parent, node) in nodes.iter().enumerate() {
            for child in node.children.into_iter().flatten() {
                let idx = child as usize;
                if idx >= node_count {
                    return Err(DominanceImportError::DanglingChild {
                        parent,
                        child,
                        node_count,
                    });
                }
                if idx <= parent {
                    return Err(DominanceImportError::BackwardChild { parent, child });
                }
            }
        }
        Ok(Self { width, nodes })
    }

    /// Mask width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` until the first insert.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node arena, root first.
    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Record `value`.
    ///
    /// Creates the root if needed, then walks one level per bit, allocating
    /// missing nodes. With width 0 only the root is ensured.
    ///
    /// # Examples
    ///
    /// ```
    /// use glide_core::PresentMask;
    /// use glide_search::DominanceIndex;
    ///
    /// let mut index = DominanceIndex::new(3);
    /// assert!(!index.has_subset_of(PresentMask(0b111)));
    /// index.insert(PresentMask(0b101));
    /// assert!(index.has_subset_of(PresentMask(0b111)));
    /// assert!(index.has_subset_of(PresentMask(0b101)));
    /// assert!(!index.has_subset_of(PresentMask(0b011)));
    /// ```
    pub fn insert(&mut self, value: PresentMask) {
        if self.nodes.is_empty() {
            self.nodes.push(TrieNode::default());
        }
        let mut node = ROOT;
        for depth in 0..self.width {
            let bit = usize::from(value.contains(depth as u8));
            node = match self.nodes[node as usize].children[bit] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::default());
                    self.nodes[node as usize].children[bit] = Some(child);
                    child
                }
            };
        }
    }

    /// Whether some stored mask is a subset of `value`.
    ///
    /// A stored `0` matches either query bit; a stored `1` only matches a
    /// query `1`. Always `false` before the first insert.
    pub fn has_subset_of(&self, value: PresentMask) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        let mut pending: SmallVec<[(u32, u32); 32]> = SmallVec::new();
        pending.push((ROOT, 0));
        while let Some((node, depth)) = pending.pop() {
            if depth == self.width {
                return true;
            }
            let [zero, one] = self.nodes[node as usize].children;
            if value.contains(depth as u8) {
                if let Some(one) = one {
                    pending.push((one, depth + 1));
                }
            }
            // Pushed last so the zero branch is explored first.
            if let Some(zero) = zero {
                pending.push((zero, depth + 1));
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_index_matches_nothing() {
        let index = DominanceIndex::new(4);
        assert!(index.is_empty());
        assert!(!index.has_subset_of(PresentMask(0b1111)));
        assert!(!index.has_subset_of(PresentMask(0)));
    }

    #[test]
    fn insert_is_reflexive() {
        let mut index = DominanceIndex::new(5);
        index.insert(PresentMask(0b10110));
        assert!(index.has_subset_of(PresentMask(0b10110)));
    }

    #[test]
    fn stored_zero_bits_match_anything() {
        let mut index = DominanceIndex::new(4);
        index.insert(PresentMask(0));
        for q in 0..16 {
            assert!(index.has_subset_of(PresentMask(q)));
        }
    }

    #[test]
    fn stored_one_bits_need_query_ones() {
        let mut index = DominanceIndex::new(4);
        index.insert(PresentMask(0b0100));
        assert!(index.has_subset_of(PresentMask(0b0110)));
        assert!(!index.has_subset_of(PresentMask(0b1011)));
    }

    #[test]
    fn width_zero_needs_only_a_root() {
        let mut index = DominanceIndex::new(0);
        assert!(!index.has_subset_of(PresentMask(0)));
        index.insert(PresentMask(0));
        assert_eq!(index.node_count(), 1);
        assert!(index.has_subset_of(PresentMask(0)));
    }

    #[test]
    fn full_width_uses_the_top_bit() {
        let mut index = DominanceIndex::new(32);
        index.insert(PresentMask(1 << 31));
        assert!(!index.has_subset_of(PresentMask(u32::MAX >> 1)));
        assert!(index.has_subset_of(PresentMask(u32::MAX)));
        assert_eq!(index.node_count(), 33);
    }

    #[test]
    fn duplicate_inserts_allocate_nothing() {
        let mut index = DominanceIndex::new(3);
        index.insert(PresentMask(0b011));
        let count = index.node_count();
        index.insert(PresentMask(0b011));
        assert_eq!(index.node_count(), count);
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn wide_index_panics() {
        let _ = DominanceIndex::new(33);
    }

    #[test]
    fn import_rejects_bad_children() {
        let dangling = vec![TrieNode {
            children: [Some(3), None],
        }];
        assert_eq!(
            DominanceIndex::from_nodes(1, dangling),
            Err(DominanceImportError::DanglingChild {
                parent: 0,
                child: 3,
                node_count: 1
            })
        );
        let cycle = vec![
            TrieNode {
                children: [Some(1), None],
            },
            TrieNode {
                children: [None, Some(0)],
            },
        ];
        assert_eq!(
            DominanceIndex::from_nodes(2, cycle),
            Err(DominanceImportError::BackwardChild {
                parent: 1,
                child: 0
            })
        );
        assert_eq!(
            DominanceIndex::from_nodes(40, Vec::new()),
            Err(DominanceImportError::WidthTooLarge { width: 40 })
        );
    }

    #[test]
    fn export_import_preserves_answers() {
        let mut index = DominanceIndex::new(6);
        for v in [0b101010, 0b000111, 0b110000] {
            index.insert(PresentMask(v));
        }
        let copy = DominanceIndex::from_nodes(6, index.nodes().to_vec()).unwrap();
        assert_eq!(copy, index);
    }

    proptest! {
        #[test]
        fn matches_brute_force(
            width in 0u32..=8,
            stored in prop::collection::vec(any::<u32>(), 0..12),
            queries in prop::collection::vec(any::<u32>(), 1..24),
        ) {
            let limit = PresentMask::full(width).bits();
            let stored: Vec<u32> = stored.into_iter().map(|v| v & limit).collect();
            let mut index = DominanceIndex::new(width);
            for &v in &stored {
                index.insert(PresentMask(v));
            }
            for q in queries {
                let q = PresentMask(q & limit);
                let expected = stored.iter().any(|&v| PresentMask(v).is_subset_of(q));
                prop_assert_eq!(index.has_subset_of(q), expected);
            }
        }
    }
}
