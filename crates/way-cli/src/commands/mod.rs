pub mod discover;
pub mod explore;
pub mod lookup;
pub mod navigate;
pub mod schema;
mod shared;

use way_config::WayConfig;

use crate::cli::{Commands, GlobalFlags};

/// Route a parsed command to its handler.
pub async fn dispatch(command: Commands, config: &WayConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Discover(args) => discover::handle(&args, config, flags).await,
        Commands::Navigate(args) => navigate::handle(&args, config, flags).await,
        Commands::Lookup(args) => lookup::handle(&args, config, flags).await,
        Commands::Explore(args) => explore::handle(&args, config, flags).await,
        Commands::Schema => schema::handle(flags),
    }
}
