//! The stored node record.

use std::sync::Arc;

/// A node's value slot. Incidence lives in the adjacency index, not here.
#[derive(Debug)]
pub struct NodeRecord<N> {
    value: Option<Arc<N>>,
}

impl<N> NodeRecord<N> {
    pub(crate) fn new(value: Option<Arc<N>>) -> Self {
        Self { value }
    }

    /// The associated value, `None` when unset.
    pub fn value(&self) -> Option<&N> {
        self.value.as_deref()
    }

    /// The associated value with shared identity.
    pub fn shared_value(&self) -> Option<Arc<N>> {
        self.value.clone()
    }

    pub(crate) fn into_value(self) -> Option<Arc<N>> {
        self.value
    }
}

impl<N> Clone for NodeRecord<N> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<N: PartialEq> PartialEq for NodeRecord<N> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
