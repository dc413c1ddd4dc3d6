/// Species names flagged for conservation relocation, in the order they were flagged.
///
/// Despite the name there is no priority ordering and no dequeue: membership is
/// advisory. A name enters once, when a high-risk species is created, and leaves
/// once, when a birth brings it back above the recovery threshold. It never re-enters.
#[derive(Debug, Clone, Default)]
pub struct RelocationQueue {
    names: Vec<String>,
}

impl RelocationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn enqueue(&mut self, name: String) {
        self.names.push(name);
    }

    /// Drop every entry for `name`. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
