/// Mesh indices whose positions come from the target rather than from integration.
///
/// Always ascending with no repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedSet {
    indices: Vec<usize>,
}

impl FixedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from indices that are already strictly ascending.
    /// Returns `None` when they are not.
    pub fn from_sorted(indices: Vec<usize>) -> Option<Self> {
        if indices.windows(2).all(|w| w[0] < w[1]) {
            Some(Self { indices })
        } else {
            None
        }
    }

    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(self.indices.last().map_or(true, |&last| last < index));
        self.indices.push(index);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Largest index in the set, if any.
    pub fn max(&self) -> Option<usize> {
        self.indices.last().copied()
    }
}
