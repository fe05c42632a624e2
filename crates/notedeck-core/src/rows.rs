//! Row composition for the two lists.

use std::collections::BTreeMap;

use notedeck_shared::{
  ActionItemDto,
  ActionItemId,
  NoteDto,
  NoteId,
  StatsDto
};

use crate::config::ViewConfig;

/// A button attached to a row.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum RowControl {
  Complete,
  Reopen,
  Delete
}

impl RowControl {
  pub fn label(self) -> &'static str {
    match self {
      | Self::Complete => "Complete",
      | Self::Reopen => "Reopen",
      | Self::Delete => "Delete"
    }
  }
}

/// Rendered as the bold title followed
/// by the content.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct NoteRow {
  pub id:      NoteId,
  pub title:   String,
  pub content: String
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ActionRow {
  pub id:        ActionItemId,
  pub text:      String,
  pub completed: bool,
  pub controls:  Vec<RowControl>
}

impl ActionRow {
  pub fn has_control(
    &self,
    control: RowControl
  ) -> bool {
    self.controls.contains(&control)
  }
}

pub type TitleLookup =
  BTreeMap<NoteId, String>;

pub fn note_row(note: &NoteDto) -> NoteRow {
  NoteRow {
    id:      note.id,
    title:   note.title.clone(),
    content: note.content.clone()
  }
}

pub fn title_lookup(
  notes: &[NoteDto]
) -> TitleLookup {
  notes
    .iter()
    .map(|note| {
      (note.id, note.title.clone())
    })
    .collect()
}

/// Builds one action row.
///
/// `titles` is only consulted when note
/// linking is enabled; pass `None` when
/// the lookup was not fetched.
pub fn action_row(
  item: &ActionItemDto,
  titles: Option<&TitleLookup>,
  cfg: &ViewConfig
) -> ActionRow {
  let mut controls = Vec::with_capacity(2);
  if !item.completed {
    controls.push(RowControl::Complete);
  } else if cfg.allow_reopen {
    controls.push(RowControl::Reopen);
  }
  controls.push(RowControl::Delete);

  ActionRow {
    id: item.id,
    text: action_text(item, titles, cfg),
    completed: item.completed,
    controls
  }
}

pub fn action_text(
  item: &ActionItemDto,
  titles: Option<&TitleLookup>,
  cfg: &ViewConfig
) -> String {
  let mut text =
    item.description.clone();

  if cfg.link_note_titles
    && let Some(title) = item
      .note_id
      .zip(titles)
      .and_then(|(id, titles)| {
        titles.get(&id)
      })
    && !title.is_empty()
  {
    text = format!("[{title}] {text}");
  }

  if cfg.show_metadata {
    let meta = metadata_parts(item);
    if !meta.is_empty() {
      text.push_str(&format!(
        " ({})",
        meta.join(", ")
      ));
    }
  }

  text.push_str(if item.completed {
    " [Completed]"
  } else {
    " [Pending]"
  });
  text
}

/// Present, non-empty enrichment
/// fields in display order.
pub fn metadata_parts(
  item: &ActionItemDto
) -> Vec<String> {
  let present =
    |value: &Option<String>| {
      value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
    };

  let mut parts = vec![];
  if let Some(priority) =
    present(&item.priority)
  {
    parts.push(format!(
      "priority:{priority}"
    ));
  }
  if let Some(category) =
    present(&item.category)
  {
    parts.push(format!(
      "category:{category}"
    ));
  }
  if let Some(assignee) =
    present(&item.assignee)
  {
    parts.push(format!("@{assignee}"));
  }
  if let Some(due) =
    present(&item.due_date)
  {
    parts.push(format!("due:{due}"));
  }
  parts
}

pub fn stats_summary(
  stats: &StatsDto
) -> String {
  format!(
    "{} notes · {} action items · {}% \
     complete",
    stats.notes.total,
    stats.action_items.total,
    stats
      .action_items
      .completion_percentage
  )
}
