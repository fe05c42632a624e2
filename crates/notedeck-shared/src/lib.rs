use serde::{
  Deserialize,
  Serialize
};

pub type NoteId = u64;
pub type ActionItemId = u64;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct NoteDto {
  pub id:         NoteId,
  #[serde(default)]
  pub title:      String,
  #[serde(default)]
  pub content:    String,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub updated_at: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ActionItemDto {
  pub id:          ActionItemId,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub created_at:  Option<String>,
  #[serde(default)]
  pub updated_at:  Option<String>,
  #[serde(default)]
  pub note_id:     Option<NoteId>,
  #[serde(default)]
  pub priority:    Option<String>,
  #[serde(default)]
  pub category:    Option<String>,
  #[serde(default)]
  pub assignee:    Option<String>,
  #[serde(default)]
  pub due_date:    Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct NoteCreate {
  pub title:   String,
  pub content: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ActionItemCreate {
  pub description: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ActionItemPatch {
  pub completed: bool
}

impl ActionItemPatch {
  pub fn completed(
    completed: bool
  ) -> Self {
    Self { completed }
  }
}

/// Query for `GET /notes/`. `q` is a
/// free-text match on title and
/// content.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct NotesQuery {
  pub q: Option<String>
}

impl NotesQuery {
  pub fn search(
    text: impl Into<String>
  ) -> Self {
    Self {
      q: Some(text.into())
    }
  }
}

/// Query for `GET /action-items/`.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct ActionItemsQuery {
  pub completed: Option<bool>
}

impl ActionItemsQuery {
  pub fn completed(
    completed: bool
  ) -> Self {
    Self {
      completed: Some(completed)
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct NoteStats {
  #[serde(default)]
  pub total: u64
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct ActionItemStats {
  #[serde(default)]
  pub total:                 u64,
  #[serde(default)]
  pub completed:             u64,
  #[serde(default)]
  pub pending:               u64,
  #[serde(default)]
  pub completion_percentage: f64
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct StatsDto {
  #[serde(default)]
  pub notes:        NoteStats,
  #[serde(default)]
  pub action_items: ActionItemStats
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn action_item_tolerates_missing_enrichment_fields()
  {
    let raw = r#"{
      "id": 7,
      "description": "Ship it",
      "completed": false,
      "created_at": "2024-05-01T10:00:00",
      "updated_at": "2024-05-01T10:00:00"
    }"#;
    let item: ActionItemDto =
      serde_json::from_str(raw)
        .expect("decode action item");
    assert_eq!(item.id, 7);
    assert_eq!(item.note_id, None);
    assert_eq!(item.priority, None);
    assert!(!item.completed);
  }

  #[test]
  fn patch_carries_only_the_completion_flag()
  {
    let body = serde_json::to_string(
      &ActionItemPatch::completed(false)
    )
    .expect("encode patch");
    assert_eq!(
      body,
      r#"{"completed":false}"#
    );
  }

  #[test]
  fn note_create_field_order_matches_form()
  {
    let body =
      serde_json::to_string(&NoteCreate {
        title:   "T".to_string(),
        content: "C".to_string()
      })
      .expect("encode note");
    assert_eq!(
      body,
      r#"{"title":"T","content":"C"}"#
    );
  }

  #[test]
  fn stats_decode_nested_counts() {
    let raw = r#"{
      "notes": {"total": 3},
      "action_items": {
        "total": 4,
        "completed": 1,
        "pending": 3,
        "completion_percentage": 25.0
      }
    }"#;
    let stats: StatsDto =
      serde_json::from_str(raw)
        .expect("decode stats");
    assert_eq!(stats.notes.total, 3);
    assert_eq!(
      stats.action_items.pending,
      3
    );
  }
}
