//! Resource paths of the notes backend.

use notedeck_shared::{
  ActionItemId,
  ActionItemsQuery,
  NoteId,
  NotesQuery
};
use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};

pub const NOTES: &str = "/notes/";
pub const ACTION_ITEMS: &str =
  "/action-items/";
pub const STATS: &str = "/stats/";

// application/x-www-form-urlencoded
// leaves these bytes alone.
const FORM_ENCODE_SET: &AsciiSet =
  &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

pub fn note(id: NoteId) -> String {
  format!("/notes/{id}")
}

pub fn action_item(
  id: ActionItemId
) -> String {
  format!("/action-items/{id}")
}

pub fn complete_action_item(
  id: ActionItemId
) -> String {
  format!("/action-items/{id}/complete")
}

/// `/notes/?q=...`. The `?` is kept
/// even when no parameter is set.
pub fn notes_list(
  query: &NotesQuery
) -> String {
  let mut pairs = Vec::new();
  if let Some(q) = &query.q {
    pairs.push(("q", q.clone()));
  }
  format!(
    "{NOTES}?{}",
    query_string(&pairs)
  )
}

pub fn action_items_list(
  query: &ActionItemsQuery
) -> String {
  let mut pairs = Vec::new();
  if let Some(completed) =
    query.completed
  {
    pairs.push((
      "completed",
      completed.to_string()
    ));
  }
  format!(
    "{ACTION_ITEMS}?{}",
    query_string(&pairs)
  )
}

pub fn query_string(
  pairs: &[(&str, String)]
) -> String {
  pairs
    .iter()
    .map(|(key, value)| {
      format!(
        "{}={}",
        form_encode(key),
        form_encode(value)
      )
    })
    .collect::<Vec<_>>()
    .join("&")
}

fn form_encode(raw: &str) -> String {
  utf8_percent_encode(
    raw,
    FORM_ENCODE_SET
  )
  .to_string()
  .replace("%20", "+")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_queries_keep_trailing_question_mark()
  {
    assert_eq!(
      notes_list(&NotesQuery::default()),
      "/notes/?"
    );
    assert_eq!(
      action_items_list(
        &ActionItemsQuery::default()
      ),
      "/action-items/?"
    );
  }

  #[test]
  fn completed_filter_serializes_as_bool()
  {
    assert_eq!(
      action_items_list(
        &ActionItemsQuery::completed(true)
      ),
      "/action-items/?completed=true"
    );
    assert_eq!(
      action_items_list(
        &ActionItemsQuery::completed(false)
      ),
      "/action-items/?completed=false"
    );
  }

  #[test]
  fn search_text_is_form_encoded() {
    assert_eq!(
      notes_list(&NotesQuery::search(
        "team sync & notes+1"
      )),
      "/notes/?q=team+sync+%26+notes%2B1"
    );
    assert_eq!(
      notes_list(&NotesQuery::search("")),
      "/notes/?q="
    );
  }

  #[test]
  fn item_paths() {
    assert_eq!(note(4), "/notes/4");
    assert_eq!(
      action_item(9),
      "/action-items/9"
    );
    assert_eq!(
      complete_action_item(9),
      "/action-items/9/complete"
    );
  }
}
