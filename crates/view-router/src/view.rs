//! View activation surface
//!
//! The router never builds views itself. The host implements [`ViewHost`] and
//! is asked to mount a view when its route becomes current and to tear it down
//! when it stops being current.

use crate::RouteEntry;

/// Host-side factory and lifecycle hooks for views
pub trait ViewHost {
    /// Opaque view-factory key stored in each route entry
    type Key;
    /// Live view instance owned by the router while it is active
    type Handle;

    /// Build and mount the view for `route`
    fn activate(&mut self, route: &RouteEntry<Self::Key>) -> Self::Handle;

    /// Unmount a view that is no longer current
    fn deactivate(&mut self, route: &RouteEntry<Self::Key>, handle: Self::Handle) {
        let _ = (route, handle);
    }
}

/// Summary of the view mounted by a successful navigation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveView {
    pub path: String,
    pub name: String,
    /// Logical timestamp of the history entry that is now current
    pub sequence: u64,
}

/// How a navigation moved through history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    /// New entry after the cursor
    Push,
    /// Current entry overwritten
    Replace,
    /// Cursor moved by the given offset, entries untouched
    Traverse(isize),
}

/// Delivered to navigation listeners after the new view is mounted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationEvent {
    pub from: Option<String>,
    pub to: String,
    pub kind: NavigationKind,
}

pub(crate) type Listener = Box<dyn FnMut(&NavigationEvent)>;
