//! The stored edge record.

use std::sync::Arc;

use super::Key;

/// A directed edge from `source` to `target` with an optional value.
#[derive(Debug)]
pub struct EdgeRecord<E> {
    source: Key,
    target: Key,
    value: Option<Arc<E>>,
}

impl<E> EdgeRecord<E> {
    pub(crate) fn new(source: Key, target: Key, value: Option<Arc<E>>) -> Self {
        Self {
            source,
            target,
            value,
        }
    }

    /// Node the edge leaves.
    pub fn source(&self) -> &Key {
        &self.source
    }

    /// Node the edge enters.
    pub fn target(&self) -> &Key {
        &self.target
    }

    /// The associated value, `None` when unset.
    pub fn value(&self) -> Option<&E> {
        self.value.as_deref()
    }

    /// The associated value with shared identity.
    pub fn shared_value(&self) -> Option<Arc<E>> {
        self.value.clone()
    }

    /// Whether the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    pub(crate) fn into_value(self) -> Option<Arc<E>> {
        self.value
    }
}

// Cloning shares the value, so no `E: Clone` bound.
impl<E> Clone for EdgeRecord<E> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            target: self.target.clone(),
            value: self.value.clone(),
        }
    }
}

impl<E: PartialEq> PartialEq for EdgeRecord<E> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target && self.value == other.value
    }
}
