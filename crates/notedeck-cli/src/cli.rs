use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use notedeck_core::config::parse_override;
use notedeck_core::shared::{ActionItemId, NoteId};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct KeyVal {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for KeyVal {
    type Err = notedeck_core::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = parse_override(s)?;
        Ok(Self { key, value })
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "notedeck",
    version,
    about = "Notedeck: terminal client for the notes and action-items backend",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[arg(
        long = "rc",
        value_name = "KEY=VALUE",
        value_parser = clap::builder::ValueParser::new(|s: &str| s.parse::<KeyVal>()),
        action = ArgAction::Append,
        global = true
    )]
    pub rc_overrides: Vec<KeyVal>,

    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Answer yes to delete confirmations.
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load notes and action items, as on page load.
    Show,
    /// List notes, optionally filtered by free text.
    Notes {
        #[arg(long = "q", value_name = "TEXT")]
        q: Option<String>,
    },
    /// Reload notes without a search filter.
    ClearSearch,
    /// List action items, optionally filtered by completion.
    Actions {
        #[arg(long = "completed", value_name = "BOOL")]
        completed: Option<bool>,
    },
    AddNote {
        title: String,
        content: String,
    },
    AddAction {
        description: String,
    },
    DeleteNote {
        id: NoteId,
    },
    DeleteAction {
        id: ActionItemId,
    },
    Complete {
        id: ActionItemId,
    },
    Reopen {
        id: ActionItemId,
    },
    Stats,
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = GlobalCli::parse_from(["notedeck"]);
        assert_eq!(cli.command, None);
        assert!(!cli.yes);
    }

    #[test]
    fn parses_filters_and_global_flags_after_subcommand() {
        let cli = GlobalCli::parse_from([
            "notedeck",
            "actions",
            "--completed",
            "true",
            "-vv",
            "--rc",
            "rc.show_stats=on",
        ]);
        assert_eq!(
            cli.command,
            Some(Command::Actions {
                completed: Some(true)
            })
        );
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.rc_overrides.len(), 1);
        assert_eq!(cli.rc_overrides[0].key, "rc.show_stats");
        assert_eq!(cli.rc_overrides[0].value, "on");
    }

    #[test]
    fn search_text_is_taken_verbatim() {
        let cli = GlobalCli::parse_from(["notedeck", "notes", "--q", "team sync"]);
        assert_eq!(
            cli.command,
            Some(Command::Notes {
                q: Some("team sync".to_string())
            })
        );
    }

    #[test]
    fn rejects_malformed_rc_override() {
        let parsed = GlobalCli::try_parse_from(["notedeck", "--rc", "verbose"]);
        assert!(parsed.is_err());
    }
}
