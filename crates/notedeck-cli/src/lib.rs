pub mod cli;
pub mod render;
pub mod settings;
pub mod transport;

use std::ffi::OsString;

use anyhow::{
  Context,
  bail
};
use clap::Parser;
use notedeck_core::ViewController;
use notedeck_core::shared::{
  ActionItemCreate,
  ActionItemsQuery,
  NoteCreate,
  NotesQuery
};
use notedeck_core::{
  Host,
  Transport
};
use tracing::{
  debug,
  info
};

use crate::cli::Command;
use crate::render::TerminalHost;
use crate::transport::HttpTransport;

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli = cli::GlobalCli::parse_from(
    raw_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting notedeck CLI"
  );

  let mut cfg = settings::load(
    cli.config.as_deref()
  )?;
  cfg
    .apply_overrides(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
    .context(
      "failed to apply --rc overrides"
    )?;
  settings::resolve_base_url(
    &mut cfg,
    cli.base_url
  );
  if cli.verbose > 0 {
    cfg.verbose = true;
  }
  debug!(?cfg, "resolved view config");

  let transport = HttpTransport::new()?;
  let host = TerminalHost::new(cli.yes);
  let controller = ViewController::new(
    transport, host, cfg
  );

  let runtime =
    tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
      .context(
        "failed to start async \
         runtime"
      )?;
  runtime.block_on(dispatch(
    &controller,
    cli.command.unwrap_or(Command::Show)
  ));

  if controller.host().had_failures() {
    bail!("one or more requests failed");
  }

  info!("done");
  Ok(())
}

/// Maps one CLI command onto the
/// matching view-controller event.
pub async fn dispatch<T, H>(
  controller: &ViewController<T, H>,
  command: Command
) where
  T: Transport,
  H: Host
{
  debug!(?command, "dispatching");
  match command {
    | Command::Show => {
      controller.start().await
    }
    | Command::Notes { q: Some(q) } => {
      controller.search_notes(q).await
    }
    | Command::Notes { q: None } => {
      controller
        .load_notes(NotesQuery::default())
        .await
    }
    | Command::ClearSearch => {
      controller.clear_search().await
    }
    | Command::Actions {
      completed: Some(completed)
    } => {
      controller
        .filter_completed(completed)
        .await
    }
    | Command::Actions {
      completed: None
    } => {
      controller
        .load_actions(
          ActionItemsQuery::default()
        )
        .await
    }
    | Command::AddNote {
      title,
      content
    } => {
      controller
        .submit_note(NoteCreate {
          title,
          content
        })
        .await
    }
    | Command::AddAction {
      description
    } => {
      controller
        .submit_action(ActionItemCreate {
          description
        })
        .await
    }
    | Command::DeleteNote { id } => {
      controller
        .delete_note(
          id,
          NotesQuery::default()
        )
        .await
    }
    | Command::DeleteAction { id } => {
      controller
        .delete_action(
          id,
          ActionItemsQuery::default()
        )
        .await
    }
    | Command::Complete { id } => {
      controller
        .complete_action(
          id,
          ActionItemsQuery::default()
        )
        .await
    }
    | Command::Reopen { id } => {
      controller
        .reopen_action(
          id,
          ActionItemsQuery::default()
        )
        .await
    }
    | Command::Stats => {
      controller.load_stats().await
    }
  }
}
