//! The rendering surface a [`crate::ViewController`] drives.

use notedeck_shared::{
  ActionItemsQuery,
  NotesQuery
};

use crate::rows::{
  ActionRow,
  NoteRow
};

/// What a list shows right now. Every
/// render replaces the previous one.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum ListView<Q, R> {
  /// Cleared, waiting on the fetch.
  Pending,
  /// Rows of the latest successful
  /// fetch, plus the query that
  /// produced them so row actions can
  /// reload the same view.
  Ready { query: Q, rows: Vec<R> },
  /// Inline error shown in place of
  /// the rows.
  Failed(String)
}

impl<Q, R> ListView<Q, R> {
  pub fn rows(&self) -> &[R] {
    match self {
      | Self::Ready {
        rows,
        ..
      } => rows,
      | _ => &[]
    }
  }

  pub fn is_pending(&self) -> bool {
    matches!(self, Self::Pending)
  }
}

impl<Q, R> Default for ListView<Q, R> {
  fn default() -> Self {
    Self::Pending
  }
}

pub type NotesView =
  ListView<NotesQuery, NoteRow>;
pub type ActionsView =
  ListView<ActionItemsQuery, ActionRow>;

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub enum StatsView {
  #[default]
  Hidden,
  Pending,
  Ready(String),
  Failed(String)
}

/// Page (or terminal) operations the
/// controller needs.
///
/// Methods take `&self`; hosts that
/// keep state use interior mutability,
/// as a single UI thread owns them.
pub trait Host {
  fn render_notes(&self, view: NotesView);

  fn render_actions(
    &self,
    view: ActionsView
  );

  fn render_stats(&self, _view: StatsView) {}

  /// Blocking yes/no prompt.
  fn confirm(&self, message: &str) -> bool;

  /// Blocking user-facing error.
  fn alert(&self, message: &str);

  fn reset_note_form(&self);

  fn reset_action_form(&self);

  fn reset_search(&self);
}
