use anyhow::Context;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<way_config::WayConfig> {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded dotenv file"),
        Err(error) if error.not_found() => {}
        Err(error) => return Err(error).context("failed to load .env file"),
    }

    way_config::WayConfig::load().context("failed to load wayfinder configuration")
}
