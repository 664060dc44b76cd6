use smallvec::SmallVec;

/// One outgoing edge of a [`super::Rax`] node. Edges are compressed: `label`
/// may span more than one byte, and no two sibling edges may share a first
/// byte (the standard PATRICIA/radix invariant).
#[derive(Debug)]
pub(super) struct RaxEdge {
    pub(super) label: Box<[u8]>,
    pub(super) child: u32,
}

/// A node in the trie. `children` is kept sorted by `label[0]` so lookups
/// and inserts can binary-search for the matching edge.
#[derive(Debug)]
pub(super) struct RaxNode<V> {
    pub(super) children: SmallVec<[RaxEdge; 8]>,
    pub(super) value: Option<V>,
}

// Hand-written rather than `#[derive(Default)]`: the derive macro would add
// a `V: Default` bound to the generated impl, even though a node with no
// value (`None`) never actually needs one.
impl<V> Default for RaxNode<V> {
    fn default() -> Self {
        Self {
            children: SmallVec::new(),
            value: None,
        }
    }
}

#[inline]
pub(super) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
