use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{
    Commands, DiscoverArgs, ExploreArgs, LookupArgs, NavigateArgs, SessionArgs,
};

/// Top-level CLI parser for the `way` binary.
#[derive(Debug, Parser)]
#[command(name = "way", version, about = "Wayfinder - photo-guided indoor navigation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn table_is_the_default_format() {
        let cli = Cli::try_parse_from(["way", "schema"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Schema));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["way", "discover", "Lab-3", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        match cli.command {
            Commands::Discover(args) => assert_eq!(args.destination, "Lab-3"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn navigate_accepts_script_and_open() {
        let cli = Cli::try_parse_from([
            "way",
            "--verbose",
            "navigate",
            "Amphi-A",
            "--open",
            "--script",
            "n,n,p,q",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        let Commands::Navigate(args) = cli.command else {
            panic!("expected navigate");
        };
        assert_eq!(args.destination, "Amphi-A");
        assert!(args.session.open);
        assert_eq!(args.session.script.as_deref(), Some("n,n,p,q"));
    }

    #[test]
    fn explore_categories_repeat() {
        let cli = Cli::try_parse_from([
            "way",
            "explore",
            "--category",
            "departements",
            "--category",
            "espaces_pedagogiques",
        ])
        .expect("cli should parse");

        let Commands::Explore(args) = cli.command else {
            panic!("expected explore");
        };
        assert_eq!(args.categories, ["departements", "espaces_pedagogiques"]);
        assert!(args.label.is_none());
    }

    #[test]
    fn explore_label_conflicts_with_category() {
        let parsed = Cli::try_parse_from([
            "way",
            "explore",
            "--category",
            "departements",
            "--label",
            "Amphi A",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["way", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lookup_requires_a_key() {
        assert!(Cli::try_parse_from(["way", "lookup"]).is_err());
        let cli = Cli::try_parse_from(["way", "lookup", "AB123456", "--navigate"])
            .expect("cli should parse");
        let Commands::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert!(args.navigate);
    }
}
