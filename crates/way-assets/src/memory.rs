//! In-memory asset store.
//!
//! Holds a set of existing paths plus paths whose requests (or only fetches) fail, and
//! records every probe and fetch in call order.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use way_core::{AssetLayout, AssetPath, Destination};

use crate::{AssetError, AssetStore};

#[derive(Debug, Default)]
pub struct MemoryAssetStore {
    existing: HashSet<AssetPath>,
    failing: HashSet<AssetPath>,
    failing_fetches: HashSet<AssetPath>,
    probes: Mutex<Vec<AssetPath>>,
    fetches: Mutex<Vec<AssetPath>>,
}

impl MemoryAssetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish steps `1..=count` for `destination`.
    #[must_use]
    pub fn with_route(mut self, layout: &AssetLayout, destination: &Destination, count: u32) -> Self {
        for index in 1..=count {
            self.existing.insert(layout.step_path(destination, index));
        }
        self
    }

    /// Publish a single asset.
    #[must_use]
    pub fn with_asset(mut self, path: AssetPath) -> Self {
        self.existing.insert(path);
        self
    }

    /// Make every request for `path` fail with [`AssetError::Unavailable`].
    #[must_use]
    pub fn with_failure(mut self, path: AssetPath) -> Self {
        self.failing.insert(path);
        self
    }

    /// Make only fetches of `path` fail; probes still see it.
    #[must_use]
    pub fn with_fetch_failure(mut self, path: AssetPath) -> Self {
        self.failing_fetches.insert(path);
        self
    }

    /// Paths probed so far, in call order.
    #[must_use]
    pub fn probes(&self) -> Vec<AssetPath> {
        lock(&self.probes).clone()
    }

    /// Paths fetched so far, in call order.
    #[must_use]
    pub fn fetches(&self) -> Vec<AssetPath> {
        lock(&self.fetches).clone()
    }

    fn check_failure(&self, path: &AssetPath) -> Result<(), AssetError> {
        if self.failing.contains(path) {
            return Err(AssetError::Unavailable(format!("simulated failure for {path}")));
        }
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl AssetStore for MemoryAssetStore {
    async fn probe(&self, path: &AssetPath) -> Result<bool, AssetError> {
        lock(&self.probes).push(path.clone());
        self.check_failure(path)?;
        Ok(self.existing.contains(path))
    }

    async fn fetch(&self, path: &AssetPath) -> Result<u64, AssetError> {
        lock(&self.fetches).push(path.clone());
        self.check_failure(path)?;
        if self.failing_fetches.contains(path) {
            return Err(AssetError::Unavailable(format!("simulated fetch failure for {path}")));
        }
        if self.existing.contains(path) {
            Ok(0)
        } else {
            Err(AssetError::Unavailable(format!("{path} does not exist")))
        }
    }

    fn location(&self, path: &AssetPath) -> String {
        format!("memory://{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let layout = AssetLayout::default();
        let dest = Destination::new("Lab-3").unwrap();
        let store = MemoryAssetStore::new().with_route(&layout, &dest, 1);

        let first = layout.step_path(&dest, 1);
        let second = layout.step_path(&dest, 2);
        assert!(store.probe(&first).await.unwrap());
        assert!(!store.probe(&second).await.unwrap());
        assert!(store.fetch(&second).await.is_err());

        assert_eq!(store.probes(), vec![first, second.clone()]);
        assert_eq!(store.fetches(), vec![second]);
    }

    #[tokio::test]
    async fn failures_override_existence() {
        let layout = AssetLayout::default();
        let dest = Destination::new("Lab-3").unwrap();
        let broken = layout.step_path(&dest, 1);
        let store = MemoryAssetStore::new()
            .with_route(&layout, &dest, 2)
            .with_failure(broken.clone());

        assert!(store.probe(&broken).await.is_err());
        assert_eq!(store.location(&broken), "memory://photos-navigation/Lab-3/1.png");
    }

    #[tokio::test]
    async fn fetch_failures_keep_the_asset_visible() {
        let layout = AssetLayout::default();
        let dest = Destination::new("Lab-3").unwrap();
        let flaky = layout.step_path(&dest, 2);
        let store = MemoryAssetStore::new()
            .with_route(&layout, &dest, 2)
            .with_fetch_failure(flaky.clone());

        assert!(store.probe(&flaky).await.unwrap());
        assert!(matches!(store.fetch(&flaky).await, Err(AssetError::Unavailable(_))));
        assert_eq!(store.fetches(), vec![flaky]);
    }
}
