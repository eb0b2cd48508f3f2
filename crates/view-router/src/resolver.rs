//! Resolver - owns the route table, history, and the active view
//!
//! The resolver is single-threaded. Navigation takes `&self` so a host can
//! keep observing it (e.g. `current_path()`) from inside its view hooks, while
//! a second navigation started from such a hook is rejected with
//! [`NavigationError::NavigationInProgress`].

use crate::history::{History, HistoryEntry};
use crate::table::RouteTable;
use crate::view::{ActiveView, Listener, NavigationEvent, NavigationKind, ViewHost};
use crate::{NavigationError, Result, RouteEntry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};

/// Configuration for the resolver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum number of history entries to retain. `None` keeps everything.
    /// When exceeded, the oldest entries are dropped first.
    pub max_history: Option<usize>,
}

/// A view currently mounted by the host
struct Mounted<T> {
    route: usize,
    handle: T,
}

struct NavState<T> {
    history: History,
    active: Option<Mounted<T>>,
}

/// Clears the in-progress flag when the navigation ends, even on unwind
struct NavigationGuard<'a>(&'a Cell<bool>);

impl<'a> NavigationGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Result<Self> {
        if flag.replace(true) {
            tracing::warn!("Rejected navigation started while another one is running");
            return Err(NavigationError::NavigationInProgress);
        }
        Ok(Self(flag))
    }
}

impl Drop for NavigationGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Client-side route resolver
///
/// Lifecycle: routes are registered while unsealed, [`seal`](Self::seal)
/// freezes the table, and from then on navigation is allowed.
pub struct Resolver<H: ViewHost> {
    table: RouteTable<H::Key>,
    sealed: bool,
    host: RefCell<H>,
    state: RefCell<NavState<H::Handle>>,
    listeners: RefCell<Vec<Listener>>,
    navigating: Cell<bool>,
}

#[cfg_attr(feature = "profiling", profiling::all_functions)]
impl<H: ViewHost> Resolver<H> {
    /// Create an unsealed resolver with an empty route table
    pub fn new(host: H) -> Self {
        Self::with_config(host, Config::default())
    }

    pub fn with_config(host: H, config: Config) -> Self {
        Self {
            table: RouteTable::default(),
            sealed: false,
            host: RefCell::new(host),
            state: RefCell::new(NavState {
                history: History::with_limit(config.max_history),
                active: None,
            }),
            listeners: RefCell::new(Vec::new()),
            navigating: Cell::new(false),
        }
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Add a route to the table
    ///
    /// Fails if the resolver is sealed, if the path does not start with `/`,
    /// or if the path or name is already taken. The table is unchanged on
    /// failure.
    pub fn register(&mut self, entry: RouteEntry<H::Key>) -> Result<()> {
        if self.sealed {
            return Err(NavigationError::ResolverSealed);
        }
        let index = self.table.insert(entry)?;
        if let Some(entry) = self.table.get(index) {
            tracing::debug!("Registered route {} -> {}", entry.path(), entry.name());
        }
        Ok(())
    }

    /// Register routes in order, stopping at the first failure
    pub fn register_all<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = RouteEntry<H::Key>>,
    {
        entries.into_iter().try_for_each(|entry| self.register(entry))
    }

    /// Freeze the route table and allow navigation. Sealing twice is a no-op.
    pub fn seal(&mut self) {
        if !self.sealed {
            self.sealed = true;
            tracing::info!("Route table sealed with {} routes", self.table.len());
        }
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Add a hook run after every successful navigation
    ///
    /// Listeners run while the navigation is still in progress, so navigating
    /// from a listener fails with `NavigationInProgress`.
    pub fn on_navigate(&mut self, listener: impl FnMut(&NavigationEvent) + 'static) {
        self.listeners.get_mut().push(Box::new(listener));
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Activate the route registered under exactly `target_path`
    ///
    /// Every successful call records a new history entry, even when the path
    /// is already current. Forward history past the cursor is discarded.
    pub fn navigate(&self, target_path: &str) -> Result<ActiveView> {
        #[cfg(feature = "profiling")]
        profiling::scope!("resolver::navigate");
        let _guard = self.begin()?;
        let route = self.table.index_of_path(target_path).ok_or_else(|| {
            tracing::debug!("No route matches {target_path}");
            NavigationError::RouteNotFound(target_path.to_string())
        })?;
        self.switch_to(NavigationKind::Push, route, |history, path| {
            history.push(path, route).clone()
        })
    }

    /// Activate the route registered under `name`
    pub fn navigate_by_name(&self, name: &str) -> Result<ActiveView> {
        let _guard = self.begin()?;
        let route = self
            .table
            .index_of_name(name)
            .ok_or_else(|| NavigationError::RouteNameNotFound(name.to_string()))?;
        self.switch_to(NavigationKind::Push, route, |history, path| {
            history.push(path, route).clone()
        })
    }

    /// Like [`navigate`](Self::navigate), but overwrites the current history
    /// entry instead of adding one. Forward entries are kept.
    pub fn replace(&self, target_path: &str) -> Result<ActiveView> {
        let _guard = self.begin()?;
        let route = self
            .table
            .index_of_path(target_path)
            .ok_or_else(|| NavigationError::RouteNotFound(target_path.to_string()))?;
        self.switch_to(NavigationKind::Replace, route, |history, path| {
            history.replace(path, route).clone()
        })
    }

    /// Step one entry back in history
    pub fn back(&self) -> Result<ActiveView> {
        self.go(-1)
    }

    /// Step one entry forward in history
    pub fn forward(&self) -> Result<ActiveView> {
        self.go(1)
    }

    /// Move the cursor by `delta` entries and activate the view found there
    ///
    /// `go(0)` remounts the current view. History entries are never modified.
    pub fn go(&self, delta: isize) -> Result<ActiveView> {
        #[cfg(feature = "profiling")]
        profiling::scope!("resolver::go");
        let _guard = self.begin()?;
        let (index, route) = {
            let state = self.state.borrow();
            let index = state
                .history
                .target(delta)
                .ok_or(NavigationError::NoHistory { delta })?;
            (index, state.history.entries()[index].route())
        };
        self.switch_to(NavigationKind::Traverse(delta), route, |history, _| {
            history.move_to(index).clone()
        })
    }

    fn begin(&self) -> Result<NavigationGuard<'_>> {
        let guard = NavigationGuard::acquire(&self.navigating)?;
        if !self.sealed {
            return Err(NavigationError::NotSealed);
        }
        Ok(guard)
    }

    /// Tear down the active view, update history, and mount `route`
    ///
    /// No `RefCell` borrow is held while host hooks or listeners run.
    fn switch_to(
        &self,
        kind: NavigationKind,
        route: usize,
        update: impl FnOnce(&mut History, &str) -> HistoryEntry,
    ) -> Result<ActiveView> {
        let target = &self.table.entries()[route];
        let from = self.current_path();

        let previous = self.state.borrow_mut().active.take();
        if let Some(mounted) = previous {
            let old = &self.table.entries()[mounted.route];
            tracing::trace!("Deactivating {}", old.path());
            self.host.borrow_mut().deactivate(old, mounted.handle);
        }

        let entry = update(&mut self.state.borrow_mut().history, target.path());

        let handle = self.host.borrow_mut().activate(target);
        self.state.borrow_mut().active = Some(Mounted { route, handle });

        tracing::debug!(
            "Navigated to {} ({}) [{:?}, seq {}]",
            target.path(),
            target.name(),
            kind,
            entry.sequence()
        );

        let event = NavigationEvent {
            from,
            to: target.path().to_string(),
            kind,
        };
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(&event);
        }

        Ok(ActiveView {
            path: target.path().to_string(),
            name: target.name().to_string(),
            sequence: entry.sequence(),
        })
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Path of the history entry under the cursor
    pub fn current_path(&self) -> Option<String> {
        self.state
            .borrow()
            .history
            .current()
            .map(|entry| entry.path().to_string())
    }

    /// Name of the route of the history entry under the cursor
    pub fn current_name(&self) -> Option<String> {
        let state = self.state.borrow();
        let entry = state.history.current()?;
        self.table
            .get(entry.route())
            .map(|route| route.name().to_string())
    }

    /// Summary of the mounted view, if any
    pub fn active(&self) -> Option<ActiveView> {
        let state = self.state.borrow();
        let mounted = state.active.as_ref()?;
        let route = self.table.get(mounted.route)?;
        let entry = state.history.current()?;
        Some(ActiveView {
            path: route.path().to_string(),
            name: route.name().to_string(),
            sequence: entry.sequence(),
        })
    }

    /// Run `f` on the mounted view handle
    ///
    /// Returns `None` when no view is mounted or a navigation is running.
    /// Navigating from inside `f` fails with `NavigationInProgress`.
    pub fn with_active<R>(
        &self,
        f: impl FnOnce(&RouteEntry<H::Key>, &H::Handle) -> R,
    ) -> Option<R> {
        self.with_active_mut(|route, handle| f(route, handle))
    }

    /// Run `f` on the mounted view handle with mutable access
    ///
    /// Same rules as [`with_active`](Self::with_active).
    pub fn with_active_mut<R>(
        &self,
        f: impl FnOnce(&RouteEntry<H::Key>, &mut H::Handle) -> R,
    ) -> Option<R> {
        let _guard = NavigationGuard::acquire(&self.navigating).ok()?;
        let mut mounted = self.state.borrow_mut().active.take()?;
        let result = f(&self.table.entries()[mounted.route], &mut mounted.handle);
        self.state.borrow_mut().active = Some(mounted);
        Some(result)
    }

    /// Run `f` on the view host, unless a navigation is using it
    pub fn with_host<R>(&self, f: impl FnOnce(&mut H) -> R) -> Option<R> {
        let mut host = self.host.try_borrow_mut().ok()?;
        Some(f(&mut host))
    }

    /// Side-effect free lookup of a path
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<H::Key>> {
        self.table
            .index_of_path(path)
            .and_then(|index| self.table.get(index))
    }

    /// Side-effect free lookup of a route name
    pub fn resolve_name(&self, name: &str) -> Option<&RouteEntry<H::Key>> {
        self.table
            .index_of_name(name)
            .and_then(|index| self.table.get(index))
    }

    /// Registered routes in registration order
    #[inline]
    pub fn routes(&self) -> &[RouteEntry<H::Key>] {
        self.table.entries()
    }

    /// Snapshot of the history entries
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.state.borrow().history.entries().to_vec()
    }

    /// Cursor into [`history`](Self::history), `None` while history is empty
    pub fn cursor(&self) -> Option<usize> {
        self.state.borrow().history.cursor()
    }

    pub fn can_go_back(&self) -> bool {
        self.state.borrow().history.target(-1).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.state.borrow().history.target(1).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::{Rc, Weak};

    /// Records every lifecycle call as a readable string
    #[derive(Default)]
    struct RecordingHost {
        log: Rc<RefCell<Vec<String>>>,
        built: usize,
    }

    impl ViewHost for RecordingHost {
        type Key = &'static str;
        type Handle = usize;

        fn activate(&mut self, route: &RouteEntry<Self::Key>) -> usize {
            self.built += 1;
            self.log
                .borrow_mut()
                .push(format!("activate {} {}", route.path(), route.view()));
            self.built
        }

        fn deactivate(&mut self, route: &RouteEntry<Self::Key>, handle: usize) {
            self.log
                .borrow_mut()
                .push(format!("deactivate {} #{handle}", route.path()));
        }
    }

    fn sealed_resolver() -> (Resolver<RecordingHost>, Rc<RefCell<Vec<String>>>) {
        let host = RecordingHost::default();
        let log = host.log.clone();
        let mut resolver = Resolver::new(host);
        resolver
            .register_all([
                RouteEntry::new("/", "Home", "MainComponent"),
                RouteEntry::new("/test", "Test", "ElecComponent"),
                RouteEntry::new("/about", "About", "AboutComponent"),
            ])
            .unwrap();
        resolver.seal();
        (resolver, log)
    }

    fn history_paths(resolver: &Resolver<RecordingHost>) -> Vec<String> {
        resolver
            .history()
            .iter()
            .map(|e| e.path().to_string())
            .collect()
    }

    #[test]
    fn test_every_registered_path_navigates() {
        let (resolver, _) = sealed_resolver();
        for route in resolver.routes().to_vec() {
            let view = resolver.navigate(route.path()).unwrap();
            assert_eq!(view.path, route.path());
            assert_eq!(view.name, route.name());
            assert_eq!(resolver.current_path().as_deref(), Some(route.path()));
        }
    }

    #[test]
    fn test_unknown_path_leaves_state_unchanged() {
        let (resolver, log) = sealed_resolver();
        resolver.navigate("/test").unwrap();
        let before = resolver.active();
        let log_len = log.borrow().len();

        let err = resolver.navigate("/nope").unwrap_err();
        assert_eq!(err, NavigationError::RouteNotFound("/nope".to_string()));
        assert_eq!(resolver.active(), before);
        assert_eq!(history_paths(&resolver), vec!["/test"]);
        assert_eq!(log.borrow().len(), log_len);
    }

    #[test]
    fn test_no_trailing_slash_normalization() {
        let (resolver, _) = sealed_resolver();
        assert!(matches!(
            resolver.navigate("/test/"),
            Err(NavigationError::RouteNotFound(_))
        ));
        assert!(matches!(
            resolver.navigate("/test?x=1"),
            Err(NavigationError::RouteNotFound(_))
        ));
        assert!(resolver.current_path().is_none());
    }

    #[test]
    fn test_duplicate_path_keeps_first() {
        let mut resolver = Resolver::new(RecordingHost::default());
        resolver
            .register(RouteEntry::new("/", "Home", "MainComponent"))
            .unwrap();
        let err = resolver
            .register(RouteEntry::new("/", "Other", "OtherComponent"))
            .unwrap_err();

        assert!(matches!(err, NavigationError::DuplicateRoute { .. }));
        assert_eq!(resolver.routes().len(), 1);
        assert_eq!(resolver.resolve("/").map(|r| r.name()), Some("Home"));
    }

    #[test]
    fn test_register_after_seal_fails() {
        let (mut resolver, _) = sealed_resolver();
        let err = resolver
            .register(RouteEntry::new("/late", "Late", "LateComponent"))
            .unwrap_err();

        assert_eq!(err, NavigationError::ResolverSealed);
        assert_eq!(resolver.routes().len(), 3);
        assert!(resolver.resolve("/late").is_none());
    }

    #[test]
    fn test_register_all_stops_at_first_error() {
        let mut resolver = Resolver::new(RecordingHost::default());
        let result = resolver.register_all([
            RouteEntry::new("/", "Home", "A"),
            RouteEntry::new("/", "Again", "B"),
            RouteEntry::new("/c", "C", "C"),
        ]);

        assert!(result.is_err());
        assert_eq!(resolver.routes().len(), 1);
    }

    #[test]
    fn test_navigate_before_seal_fails() {
        let mut resolver = Resolver::new(RecordingHost::default());
        resolver
            .register(RouteEntry::new("/", "Home", "MainComponent"))
            .unwrap();

        assert_eq!(resolver.navigate("/"), Err(NavigationError::NotSealed));
        assert!(!resolver.is_sealed());
        resolver.seal();
        resolver.seal();
        assert!(resolver.is_sealed());
        assert!(resolver.navigate("/").is_ok());
    }

    #[test]
    fn test_back_then_new_navigation_discards_forward() {
        let (resolver, _) = sealed_resolver();
        resolver.navigate("/").unwrap();
        resolver.navigate("/test").unwrap();
        resolver.back().unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/"));

        resolver.navigate("/about").unwrap();
        assert_eq!(
            resolver.forward(),
            Err(NavigationError::NoHistory { delta: 1 })
        );
        assert_eq!(history_paths(&resolver), vec!["/", "/about"]);
    }

    #[test]
    fn test_home_test_scenario() {
        let (resolver, _) = sealed_resolver();

        resolver.navigate("/").unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/"));
        assert_eq!(history_paths(&resolver), vec!["/"]);
        assert_eq!(resolver.cursor(), Some(0));

        resolver.navigate("/test").unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/test"));
        assert_eq!(history_paths(&resolver), vec!["/", "/test"]);
        assert_eq!(resolver.cursor(), Some(1));

        resolver.back().unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/"));
        assert_eq!(resolver.cursor(), Some(0));

        resolver.forward().unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/test"));
        assert_eq!(resolver.cursor(), Some(1));
        assert_eq!(history_paths(&resolver), vec!["/", "/test"]);
    }

    #[test]
    fn test_same_path_twice_still_records_history() {
        let (resolver, log) = sealed_resolver();
        let first = resolver.navigate("/test").unwrap();
        let second = resolver.navigate("/test").unwrap();

        assert_eq!(first.path, second.path);
        assert_eq!(first.name, second.name);
        assert!(second.sequence > first.sequence);
        assert_eq!(history_paths(&resolver), vec!["/test", "/test"]);
        assert_eq!(
            *log.borrow(),
            vec![
                "activate /test ElecComponent",
                "deactivate /test #1",
                "activate /test ElecComponent",
            ]
        );
    }

    #[test]
    fn test_back_and_forward_boundaries() {
        let (resolver, _) = sealed_resolver();
        assert_eq!(resolver.back(), Err(NavigationError::NoHistory { delta: -1 }));
        assert_eq!(resolver.forward(), Err(NavigationError::NoHistory { delta: 1 }));

        resolver.navigate("/").unwrap();
        assert!(!resolver.can_go_back());
        assert!(!resolver.can_go_forward());
        assert!(resolver.back().is_err());
        assert_eq!(resolver.current_path().as_deref(), Some("/"));
        assert!(resolver.active().is_some());
    }

    #[test]
    fn test_traversal_does_not_mutate_history() {
        let (resolver, _) = sealed_resolver();
        resolver.navigate("/").unwrap();
        resolver.navigate("/test").unwrap();
        resolver.navigate("/about").unwrap();
        let before = resolver.history();

        resolver.go(-2).unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/"));
        resolver.go(2).unwrap();
        assert_eq!(resolver.current_path().as_deref(), Some("/about"));
        assert_eq!(resolver.go(1), Err(NavigationError::NoHistory { delta: 1 }));
        assert_eq!(resolver.history(), before);
    }

    #[test]
    fn test_go_zero_remounts_current_view() {
        let (resolver, log) = sealed_resolver();
        assert_eq!(resolver.go(0), Err(NavigationError::NoHistory { delta: 0 }));

        resolver.navigate("/").unwrap();
        resolver.go(0).unwrap();
        assert_eq!(
            *log.borrow(),
            vec![
                "activate / MainComponent",
                "deactivate / #1",
                "activate / MainComponent",
            ]
        );
        assert_eq!(resolver.history().len(), 1);
    }

    #[test]
    fn test_lifecycle_order_on_back() {
        let (resolver, log) = sealed_resolver();
        resolver.navigate("/").unwrap();
        resolver.navigate("/test").unwrap();
        resolver.back().unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "activate / MainComponent",
                "deactivate / #1",
                "activate /test ElecComponent",
                "deactivate /test #2",
                "activate / MainComponent",
            ]
        );
        assert_eq!(resolver.with_active(|_, handle| *handle), Some(3));
    }

    #[test]
    fn test_navigate_by_name() {
        let (resolver, _) = sealed_resolver();
        let view = resolver.navigate_by_name("Test").unwrap();
        assert_eq!(view.path, "/test");
        assert_eq!(resolver.current_name().as_deref(), Some("Test"));

        assert_eq!(
            resolver.navigate_by_name("Missing"),
            Err(NavigationError::RouteNameNotFound("Missing".to_string()))
        );
    }

    #[test]
    fn test_replace_overwrites_current_entry() {
        let (resolver, _) = sealed_resolver();
        resolver.replace("/").unwrap();
        assert_eq!(history_paths(&resolver), vec!["/"]);

        resolver.navigate("/test").unwrap();
        resolver.back().unwrap();
        resolver.replace("/about").unwrap();

        assert_eq!(history_paths(&resolver), vec!["/about", "/test"]);
        assert_eq!(resolver.cursor(), Some(0));
        assert!(resolver.can_go_forward());
    }

    #[test]
    fn test_history_limit() {
        let mut resolver = Resolver::with_config(
            RecordingHost::default(),
            Config {
                max_history: Some(2),
            },
        );
        resolver
            .register_all([
                RouteEntry::new("/", "Home", "A"),
                RouteEntry::new("/test", "Test", "B"),
            ])
            .unwrap();
        resolver.seal();

        resolver.navigate("/").unwrap();
        resolver.navigate("/test").unwrap();
        resolver.navigate("/").unwrap();

        assert_eq!(history_paths(&resolver), vec!["/test", "/"]);
        assert_eq!(resolver.cursor(), Some(1));
        resolver.back().unwrap();
        assert!(resolver.back().is_err());
    }

    #[test]
    fn test_listeners_see_every_navigation() {
        let (mut resolver, _) = sealed_resolver();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        resolver.on_navigate(move |event| sink.borrow_mut().push(event.clone()));

        resolver.navigate("/").unwrap();
        resolver.navigate("/test").unwrap();
        resolver.back().unwrap();
        let _ = resolver.navigate("/missing");

        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].from, None);
        assert_eq!(events[0].kind, NavigationKind::Push);
        assert_eq!(events[1].from.as_deref(), Some("/"));
        assert_eq!(events[1].to, "/test");
        assert_eq!(events[2].kind, NavigationKind::Traverse(-1));
        assert_eq!(events[2].to, "/");
    }

    /// Host whose views try to navigate while being mounted
    struct ReentrantHost {
        resolver: Rc<RefCell<Weak<Resolver<ReentrantHost>>>>,
        observed: Rc<RefCell<Vec<(Option<String>, Result<ActiveView>)>>>,
    }

    impl ViewHost for ReentrantHost {
        type Key = ();
        type Handle = ();

        fn activate(&mut self, _route: &RouteEntry<Self::Key>) -> Self::Handle {
            let resolver = self.resolver.borrow().upgrade();
            if let Some(resolver) = resolver {
                let current = resolver.current_path();
                let nested = resolver.navigate("/");
                self.observed.borrow_mut().push((current, nested));
            }
        }
    }

    #[test]
    fn test_reentrant_navigation_is_rejected() {
        let slot = Rc::new(RefCell::new(Weak::new()));
        let observed = Rc::new(RefCell::new(Vec::new()));
        let mut resolver = Resolver::new(ReentrantHost {
            resolver: slot.clone(),
            observed: observed.clone(),
        });
        resolver.register(RouteEntry::new("/", "Home", ())).unwrap();
        resolver.register(RouteEntry::new("/test", "Test", ())).unwrap();
        resolver.seal();
        let resolver = Rc::new(resolver);
        *slot.borrow_mut() = Rc::downgrade(&resolver);

        resolver.navigate("/test").unwrap();

        let observed = observed.borrow();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].0.as_deref(), Some("/test"));
        assert_eq!(observed[0].1, Err(NavigationError::NavigationInProgress));
        assert_eq!(resolver.current_path().as_deref(), Some("/test"));
        assert_eq!(resolver.history().len(), 1);
        drop(observed);

        // The guard is released once the outer navigation returns
        assert!(resolver.navigate("/").is_ok());
    }

    #[test]
    fn test_with_active_mut_blocks_navigation() {
        let (resolver, _) = sealed_resolver();
        assert!(resolver.with_active(|_, _| ()).is_none());

        resolver.navigate("/").unwrap();
        let nested = resolver.with_active_mut(|route, handle| {
            *handle += 100;
            (route.path().to_string(), resolver.navigate("/test"))
        });

        let (path, result) = nested.unwrap();
        assert_eq!(path, "/");
        assert_eq!(result, Err(NavigationError::NavigationInProgress));
        assert_eq!(resolver.with_active(|_, handle| *handle), Some(101));
    }

    #[test]
    fn test_resolve_has_no_side_effects() {
        let (resolver, log) = sealed_resolver();
        assert_eq!(
            resolver.resolve("/test").map(|r| *r.view()),
            Some("ElecComponent")
        );
        assert_eq!(
            resolver.resolve_name("About").map(|r| r.path()),
            Some("/about")
        );
        assert!(resolver.resolve("/nope").is_none());
        assert!(resolver.current_path().is_none());
        assert!(log.borrow().is_empty());
        assert_eq!(resolver.with_host(|host| host.built), Some(0));
    }
}
