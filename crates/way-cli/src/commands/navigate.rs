use std::io::IsTerminal;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use way_assets::AssetStore;
use way_config::WayConfig;
use way_nav::{Navigator, Transition};

use crate::cli::{GlobalFlags, NavigateArgs, SessionArgs};
use crate::commands::shared;
use crate::progress::Progress;
use crate::ui;

/// Handle `way navigate`.
pub async fn handle(args: &NavigateArgs, config: &WayConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    run_session(&args.destination, &args.session, config, flags).await
}

/// Enter a session for `destination` and drive it until quit or end of input.
pub async fn run_session(
    destination: &str,
    options: &SessionArgs,
    config: &WayConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut nav = shared::navigator(config)?;

    let progress = Progress::spinner(&format!("Finding route to {destination}"));
    let entered = nav.enter(Some(destination)).await;
    progress.finish_clear();
    if let Err(error) = entered {
        ui::notice(&format!("{error} ({}).", error.label()));
        if let Some(snapshot) = nav.snapshot() {
            shared::print_snapshot(&snapshot, nav.store(), flags)?;
        }
        return Ok(());
    }

    show_current(&mut nav, options.open, flags).await?;

    let mut input = CommandSource::new(options.script.as_deref());
    while let Some(line) = input.next_line().await? {
        let Some(command) = NavCommand::parse(&line) else {
            if !line.trim().is_empty() {
                ui::notice(&format!("Unknown command '{}'. Use n, p, r or q.", line.trim()));
            }
            continue;
        };

        let transition = match command {
            NavCommand::Next => nav.advance(),
            NavCommand::Prev => nav.retreat(),
            NavCommand::Restart => nav.restart(),
            NavCommand::Quit => break,
        };
        match transition {
            Transition::Moved { .. } | Transition::Reset => {
                show_current(&mut nav, options.open, flags).await?;
            }
            Transition::Unchanged if command == NavCommand::Next => {
                ui::notice("Already at the last step.");
            }
            Transition::Unchanged => ui::notice("Already at the first step."),
            Transition::Unavailable => break,
        }
    }

    nav.leave();
    Ok(())
}

/// Load the current photo, print the snapshot, and announce arrival.
async fn show_current<S: AssetStore>(
    nav: &mut Navigator<S>,
    open: bool,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(Err(error)) = nav.load_current().await {
        ui::notice(&format!("Photo unavailable: {error}"));
    }
    let Some(snapshot) = nav.snapshot() else {
        return Ok(());
    };
    shared::print_snapshot(&snapshot, nav.store(), flags)?;

    if open {
        if let Some(step) = &snapshot.current {
            let location = nav.store().location(&step.locator);
            if let Err(error) = open::that_detached(&location) {
                tracing::warn!(%location, %error, "failed to open step photo");
            }
        }
    }

    if snapshot.at_destination {
        if let Some(destination) = &snapshot.destination {
            ui::notice(&format!("You have arrived at {destination}."));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavCommand {
    Next,
    Prev,
    Restart,
    Quit,
}

impl NavCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Prev),
            "r" | "restart" => Some(Self::Restart),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Commands from `--script`, or lines from stdin.
enum CommandSource {
    Script(std::vec::IntoIter<String>),
    Stdin {
        lines: Lines<BufReader<Stdin>>,
        prompt: bool,
    },
}

impl CommandSource {
    fn new(script: Option<&str>) -> Self {
        match script {
            Some(script) => Self::Script(
                script
                    .split(',')
                    .map(|command| command.trim().to_string())
                    .collect::<Vec<_>>()
                    .into_iter(),
            ),
            None => Self::Stdin {
                lines: BufReader::new(tokio::io::stdin()).lines(),
                prompt: std::io::stdin().is_terminal() && !ui::prefs().quiet,
            },
        }
    }

    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self {
            Self::Script(commands) => Ok(commands.next()),
            Self::Stdin { lines, prompt } => {
                if *prompt {
                    eprint!("[n]ext [p]rev [r]estart [q]uit > ");
                }
                lines.next_line().await.context("failed to read command from stdin")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_short_and_long_commands() {
        assert_eq!(NavCommand::parse("n"), Some(NavCommand::Next));
        assert_eq!(NavCommand::parse(" NEXT "), Some(NavCommand::Next));
        assert_eq!(NavCommand::parse("p"), Some(NavCommand::Prev));
        assert_eq!(NavCommand::parse("prev"), Some(NavCommand::Prev));
        assert_eq!(NavCommand::parse("r"), Some(NavCommand::Restart));
        assert_eq!(NavCommand::parse("q"), Some(NavCommand::Quit));
        assert_eq!(NavCommand::parse("jump"), None);
        assert_eq!(NavCommand::parse(""), None);
    }

    #[tokio::test]
    async fn script_yields_commands_in_order() {
        let mut source = CommandSource::new(Some("n, n,p ,q"));
        let mut seen = Vec::new();
        while let Some(line) = source.next_line().await.unwrap() {
            seen.push(line);
        }
        assert_eq!(seen, ["n", "n", "p", "q"]);
    }
}
