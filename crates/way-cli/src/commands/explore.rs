use anyhow::Context;
use serde::Serialize;
use way_config::WayConfig;
use way_manifest::{CategoryManifest, ExpandedSections, ManifestSource};

use crate::cli::{ExploreArgs, GlobalFlags, OutputFormat};
use crate::commands::navigate;
use crate::output::output;
use crate::ui;

#[derive(Debug, Serialize)]
struct EntryRow<'a> {
    category: &'a str,
    label: String,
    destination: String,
    path: String,
}

/// Handle `way explore`.
pub async fn handle(args: &ExploreArgs, config: &WayConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let source = ManifestSource::from_config(&config.manifest);
    let manifest = CategoryManifest::load(&source)
        .await
        .with_context(|| format!("failed to load category manifest from {source}"))?;

    if let Some(label) = &args.label {
        let (category, entry) = manifest
            .find_label(label)
            .with_context(|| format!("no place labelled '{label}' in the manifest"))?;
        ui::notice(&format!(
            "{label} ({}) -> {}",
            way_manifest::category_title(category),
            entry.destination
        ));
        return navigate::run_session(entry.destination.as_str(), &args.session, config, flags)
            .await;
    }

    let mut sections = ExpandedSections::new();
    for key in &args.categories {
        if !manifest.contains(key) {
            anyhow::bail!(
                "unknown category '{key}' (available: {})",
                manifest.categories().collect::<Vec<_>>().join(", ")
            );
        }
        sections.toggle(key);
    }

    if sections.is_empty() {
        return output(&manifest.summaries(), flags.format);
    }

    let rows = expanded_rows(&manifest, &sections);
    if flags.format == OutputFormat::Table {
        for key in sections.iter() {
            let kind = way_manifest::CategoryKind::classify(key);
            ui::notice(&format!("{} {}", kind.icon(), way_manifest::category_title(key)));
        }
    }
    output(&rows, flags.format)
}

fn expanded_rows<'a>(manifest: &CategoryManifest, sections: &'a ExpandedSections) -> Vec<EntryRow<'a>> {
    sections
        .iter()
        .flat_map(|category| {
            manifest.entries(category).into_iter().map(move |entry| EntryRow {
                category,
                label: entry.label,
                destination: entry.destination.to_string(),
                path: entry.resource_path,
            })
        })
        .collect()
}
