use anyhow::Context;
use serde::Serialize;
use way_assets::{AnyAssetStore, AssetStore};
use way_config::WayConfig;
use way_core::SessionSnapshot;
use way_nav::{Discoverer, Navigator};

/// Navigator over the configured asset source.
pub fn navigator(config: &WayConfig) -> anyhow::Result<Navigator<AnyAssetStore>> {
    let store = AnyAssetStore::from_config(&config.assets).context(
        "no asset source configured (set assets.root_dir or assets.base_url, e.g. WAYFINDER_ASSETS__BASE_URL)",
    )?;
    Ok(Navigator::new(store, Discoverer::from_config(config)))
}

/// Compact, table-friendly view of a snapshot.
#[derive(Debug, Serialize)]
pub struct SnapshotView {
    pub session: String,
    pub destination: String,
    pub state: String,
    pub step: String,
    pub progress: String,
    pub asset_ready: bool,
    pub at_destination: bool,
    pub location: String,
}

impl SnapshotView {
    pub fn new<S: AssetStore>(snapshot: &SessionSnapshot, store: &S) -> Self {
        Self {
            session: snapshot.session.to_string(),
            destination: snapshot
                .destination
                .as_ref()
                .map_or_else(|| String::from("-"), ToString::to_string),
            state: snapshot.state.to_string(),
            step: format!("{}/{}", snapshot.step_number, snapshot.total),
            progress: format!("{:.0}%", snapshot.progress() * 100.0),
            asset_ready: snapshot.asset_ready,
            at_destination: snapshot.at_destination,
            location: snapshot
                .current
                .as_ref()
                .map_or_else(|| String::from("-"), |step| store.location(&step.locator)),
        }
    }
}

/// Print a snapshot: the compact view for tables, the full snapshot otherwise.
pub fn print_snapshot<S: AssetStore>(
    snapshot: &SessionSnapshot,
    store: &S,
    flags: &crate::cli::GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format == crate::cli::OutputFormat::Table {
        crate::output::output(&SnapshotView::new(snapshot, store), flags.format)
    } else {
        crate::output::output(snapshot, flags.format)
    }
}
