use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Probe the asset source and list the steps to a destination.
    Discover(DiscoverArgs),
    /// Walk a route step by step.
    Navigate(NavigateArgs),
    /// Look up an identity record and its assigned room.
    Lookup(LookupArgs),
    /// Browse the category manifest.
    Explore(ExploreArgs),
    /// Dump the JSON schema of a navigation snapshot.
    Schema,
}

/// Options shared by every command that ends in a walk-through.
#[derive(Clone, Debug, Default, Args)]
pub struct SessionArgs {
    /// Open each step's photo with the system viewer.
    #[arg(long)]
    pub open: bool,
    /// Comma-separated commands to run instead of reading stdin
    /// (`n`/`next`, `p`/`prev`, `r`/`restart`, `q`/`quit`).
    #[arg(long)]
    pub script: Option<String>,
}

/// Arguments for `way discover`.
#[derive(Clone, Debug, Args)]
pub struct DiscoverArgs {
    /// Destination identifier (room, lab, office).
    pub destination: String,
}

/// Arguments for `way navigate`.
#[derive(Clone, Debug, Args)]
pub struct NavigateArgs {
    /// Destination identifier (room, lab, office).
    pub destination: String,
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `way lookup`.
#[derive(Clone, Debug, Args)]
pub struct LookupArgs {
    /// Identity key (national id).
    pub key: String,
    /// Continue into navigation towards the assigned room.
    #[arg(long)]
    pub navigate: bool,
    #[command(flatten)]
    pub session: SessionArgs,
}

/// Arguments for `way explore`.
#[derive(Clone, Debug, Args)]
pub struct ExploreArgs {
    /// Expand a category; repeating a key collapses it again.
    #[arg(long = "category", value_name = "KEY")]
    pub categories: Vec<String>,
    /// Navigate to the place listed under this display label.
    #[arg(long, conflicts_with = "categories")]
    pub label: Option<String>,
    #[command(flatten)]
    pub session: SessionArgs,
}
