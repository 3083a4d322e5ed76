use way_config::WayConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &WayConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WayConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.assets.is_configured() && has_env_prefix(&env_keys, "WAYFINDER_ASSETS") {
        warnings.push(
            "Asset source appears default while WAYFINDER_ASSETS* env vars exist. Use double underscores (example: WAYFINDER_ASSETS__BASE_URL)."
                .to_string(),
        );
    }

    if !config.lookup.is_configured() && has_env_prefix(&env_keys, "WAYFINDER_LOOKUP") {
        warnings.push(
            "Lookup config appears default while WAYFINDER_LOOKUP* env vars exist. Use double underscores (example: WAYFINDER_LOOKUP__API_KEY)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
