//! Views mounted by the resolver
//!
//! `ViewMounter` is the application's view factory: the resolver calls it
//! whenever a route becomes current, and the returned `MountedView` lives in
//! the resolver until the route stops being current.

use instant::Instant;
use view_router::{RouteEntry, ViewHost};
use walkers::MapMemory;

/// View factory keys usable in the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    /// Full-window slippy map
    Home,
    /// Router diagnostics
    Test,
}

/// Map view state, fresh on every mount
pub struct HomeView {
    pub map_memory: MapMemory,
    pub lat: f64,
    pub lon: f64,
}

impl HomeView {
    fn new(lat: f64, lon: f64, zoom: f64) -> Self {
        let mut map_memory = MapMemory::default();
        map_memory.center_at(walkers::lat_lon(lat, lon));
        if map_memory.set_zoom(zoom).is_err() {
            tracing::warn!("Zoom level {zoom} is out of range, keeping the default");
        }
        Self {
            map_memory,
            lat,
            lon,
        }
    }
}

/// Diagnostics view state
pub struct TestView {
    pub mounted_at: Instant,
    /// Mount counter value when this view was built
    pub mount_number: usize,
}

pub enum MountedView {
    Home(HomeView),
    Test(TestView),
}

/// Builds and tears down views for the resolver
pub struct ViewMounter {
    home_lat: f64,
    home_lon: f64,
    home_zoom: f64,
    mounts: usize,
    unmounts: usize,
}

impl ViewMounter {
    pub fn new(home_lat: f64, home_lon: f64, home_zoom: f64) -> Self {
        Self {
            home_lat,
            home_lon,
            home_zoom,
            mounts: 0,
            unmounts: 0,
        }
    }

    /// Total views built so far
    pub fn mounts(&self) -> usize {
        self.mounts
    }

    /// Total views torn down so far
    pub fn unmounts(&self) -> usize {
        self.unmounts
    }
}

impl ViewHost for ViewMounter {
    type Key = ViewKind;
    type Handle = MountedView;

    fn activate(&mut self, route: &RouteEntry<ViewKind>) -> MountedView {
        self.mounts += 1;
        tracing::debug!("Mounting {} at {}", route.name(), route.path());
        match route.view() {
            ViewKind::Home => {
                MountedView::Home(HomeView::new(self.home_lat, self.home_lon, self.home_zoom))
            }
            ViewKind::Test => MountedView::Test(TestView {
                mounted_at: Instant::now(),
                mount_number: self.mounts,
            }),
        }
    }

    fn deactivate(&mut self, route: &RouteEntry<ViewKind>, handle: MountedView) {
        self.unmounts += 1;
        match handle {
            MountedView::Home(home) => {
                tracing::debug!("Unmounting map at {} ({}, {})", route.path(), home.lat, home.lon)
            }
            MountedView::Test(test) => tracing::debug!(
                "Unmounting {} after {:.1}s",
                route.path(),
                test.mounted_at.elapsed().as_secs_f64()
            ),
        }
    }
}
