//! Route table configuration
//!
//! `RouteConfig` is the startup input of the router: an ordered list of
//! `{path, name, view}` records plus resolver settings. With the `serde`
//! feature it can be loaded from any serde format.

use crate::{Config, Resolver, Result, RouteEntry, ViewHost};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One configured route
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteSpec<K> {
    pub path: String,
    pub name: String,
    pub view: K,
}

impl<K> RouteSpec<K> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: K) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

impl<K> From<RouteSpec<K>> for RouteEntry<K> {
    fn from(spec: RouteSpec<K>) -> Self {
        RouteEntry::new(spec.path, spec.name, spec.view)
    }
}

/// Ordered route list and resolver settings
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteConfig<K> {
    pub routes: Vec<RouteSpec<K>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub resolver: Config,
}

impl<K> Default for RouteConfig<K> {
    fn default() -> Self {
        Self {
            routes: Vec::new(),
            resolver: Config::default(),
        }
    }
}

impl<K> RouteConfig<K> {
    pub fn new(routes: Vec<RouteSpec<K>>) -> Self {
        Self {
            routes,
            resolver: Config::default(),
        }
    }

    /// Register every route in order and seal the resulting resolver
    ///
    /// Fails on the first invalid or duplicate entry.
    pub fn build<H>(self, host: H) -> Result<Resolver<H>>
    where
        H: ViewHost<Key = K>,
    {
        let mut resolver = Resolver::with_config(host, self.resolver);
        resolver.register_all(self.routes.into_iter().map(RouteEntry::from))?;
        resolver.seal();
        Ok(resolver)
    }
}
