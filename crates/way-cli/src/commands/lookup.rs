use anyhow::Context;
use way_config::WayConfig;
use way_lookup::LookupClient;

use crate::cli::{GlobalFlags, LookupArgs};
use crate::commands::navigate;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

/// Handle `way lookup`.
pub async fn handle(args: &LookupArgs, config: &WayConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = LookupClient::from_config(&config.lookup)
        .context("identity lookup unavailable (set WAYFINDER_LOOKUP__URL and WAYFINDER_LOOKUP__API_KEY)")?;

    let progress = Progress::spinner("Looking up record");
    let found = client.find(&args.key).await;
    progress.finish_clear();
    let record = found.with_context(|| format!("lookup failed for '{}'", args.key.trim()))?;

    output(&record, flags.format)?;

    if !args.navigate {
        return Ok(());
    }
    let destination = record
        .destination()
        .with_context(|| format!("no room assigned to {}", record.full_name()))?;
    ui::notice(&format!("Guiding {} to {destination}.", record.full_name()));
    navigate::run_session(destination.as_str(), &args.session, config, flags).await
}
