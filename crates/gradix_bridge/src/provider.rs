//! Selection providers
//!
//! The host exposes its current selection through [`SelectionProvider`].
//! Each request takes exactly one snapshot, so extraction never observes a
//! selection changing underneath it.

use std::sync::Arc;

use gradix_extract::SelectionSnapshot;
use parking_lot::RwLock;

use crate::message::HostMode;

/// Source of the host's current selection
pub trait SelectionProvider {
    /// Capture the current selection
    fn snapshot(&self) -> SelectionSnapshot;

    /// Mode the host is running in
    fn mode(&self) -> HostMode {
        HostMode::Default
    }
}

impl<P: SelectionProvider + ?Sized> SelectionProvider for Arc<P> {
    fn snapshot(&self) -> SelectionSnapshot {
        (**self).snapshot()
    }

    fn mode(&self) -> HostMode {
        (**self).mode()
    }
}

/// Provider over a fixed snapshot
#[derive(Clone, Debug, Default)]
pub struct StaticSelection {
    snapshot: SelectionSnapshot,
    mode: HostMode,
}

impl StaticSelection {
    pub fn new(snapshot: SelectionSnapshot) -> Self {
        Self {
            snapshot,
            mode: HostMode::Default,
        }
    }

    pub fn with_mode(mut self, mode: HostMode) -> Self {
        self.mode = mode;
        self
    }
}

impl SelectionProvider for StaticSelection {
    fn snapshot(&self) -> SelectionSnapshot {
        self.snapshot.clone()
    }

    fn mode(&self) -> HostMode {
        self.mode
    }
}

/// Provider whose selection can be replaced while a host is running
///
/// Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct SharedSelection {
    current: Arc<RwLock<SelectionSnapshot>>,
    mode: HostMode,
}

impl SharedSelection {
    pub fn new(mode: HostMode) -> Self {
        Self {
            current: Arc::new(RwLock::new(SelectionSnapshot::empty())),
            mode,
        }
    }

    /// Replace the current selection
    pub fn set(&self, snapshot: SelectionSnapshot) {
        *self.current.write() = snapshot;
    }

    pub fn clear(&self) {
        self.set(SelectionSnapshot::empty());
    }
}

impl SelectionProvider for SharedSelection {
    fn snapshot(&self) -> SelectionSnapshot {
        self.current.read().clone()
    }

    fn mode(&self) -> HostMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradix_extract::{SceneNode, ShapeBounds};

    #[test]
    fn test_shared_selection_clones_share_state() {
        let selection = SharedSelection::new(HostMode::Dev);
        let handle = selection.clone();

        assert!(selection.snapshot().is_empty());
        handle.set(SelectionSnapshot::single(SceneNode::new(
            ShapeBounds::new(1.0, 1.0),
            Vec::new(),
        )));
        assert_eq!(selection.snapshot().selection.len(), 1);
        assert_eq!(selection.mode(), HostMode::Dev);

        handle.clear();
        assert!(selection.snapshot().is_empty());
    }

    #[test]
    fn test_static_selection_default_mode() {
        let provider = Arc::new(StaticSelection::new(SelectionSnapshot::empty()));
        assert_eq!(provider.mode(), HostMode::Default);
        assert!(provider.snapshot().is_empty());
    }
}
