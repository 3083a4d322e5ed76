use serde::Serialize;
use way_assets::AssetStore;
use way_config::WayConfig;
use way_core::{DiscoveryState, NavError};
use way_nav::{Completion, Discovery, Navigator};

use crate::cli::{DiscoverArgs, GlobalFlags, OutputFormat};
use crate::commands::shared;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
struct StepRow {
    step: u32,
    locator: String,
    location: String,
}

#[derive(Debug, Serialize)]
struct DiscoverReport {
    destination: String,
    state: DiscoveryState,
    probes: u32,
    stopped: String,
    steps: Vec<StepRow>,
}

/// Handle `way discover`.
pub async fn handle(args: &DiscoverArgs, config: &WayConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut nav = shared::navigator(config)?;

    let progress = Progress::spinner(&format!("Probing route to {}", args.destination));
    let found = find_route(&mut nav, &args.destination).await;
    progress.finish_clear();

    let discovery = match found {
        Ok(discovery) => discovery,
        Err(error) => {
            ui::notice(&format!("{error} ({}).", error.label()));
            if let Some(snapshot) = nav.snapshot() {
                shared::print_snapshot(&snapshot, nav.store(), flags)?;
            }
            return Ok(());
        }
    };

    let store = nav.store();
    let steps = discovery
        .sequence
        .steps()
        .iter()
        .map(|step| StepRow {
            step: step.index,
            locator: step.locator.to_string(),
            location: store.location(&step.locator),
        })
        .collect::<Vec<_>>();

    if flags.format == OutputFormat::Table {
        output(&steps, flags.format)?;
        ui::notice(&format!(
            "{} step(s) to '{}' after {} probe(s); {}.",
            steps.len(),
            args.destination,
            discovery.probes,
            discovery.stop
        ));
        return Ok(());
    }

    output(
        &DiscoverReport {
            destination: args.destination.clone(),
            state: DiscoveryState::Ready,
            probes: discovery.probes,
            stopped: discovery.stop.to_string(),
            steps,
        },
        flags.format,
    )
}

/// Run discovery for `destination` on a fresh session.
///
/// The session stays active on failure so its terminal snapshot can be shown.
async fn find_route<S: AssetStore>(nav: &mut Navigator<S>, destination: &str) -> Result<Discovery, NavError> {
    let job = nav.begin(Some(destination))?;
    let done = job.run().await;
    let discovery = done.discovery.clone();
    match nav.complete(done) {
        Completion::Applied(DiscoveryState::Ready) => Ok(discovery),
        Completion::Applied(_) | Completion::Stale => Err(NavError::NoRouteFound {
            destination: destination.to_string(),
        }),
    }
}
