//! The view-controller: UI events in, one request out, then a full reload
//! of every affected list.
//!
//! Nothing is cached between renders. Overlapping loads of the same list are
//! not sequenced, so whichever response arrives last is what stays on
//! screen.

use notedeck_shared::{
  ActionItemCreate,
  ActionItemDto,
  ActionItemId,
  ActionItemPatch,
  ActionItemsQuery,
  NoteCreate,
  NoteDto,
  NoteId,
  NotesQuery,
  StatsDto
};
use serde::de::IgnoredAny;
use tracing::{
  debug,
  info,
  warn
};

use crate::config::ViewConfig;
use crate::error::FetchError;
use crate::fetch::{
  FetchOptions,
  JsonFetch,
  Method,
  Transport
};
use crate::host::{
  Host,
  ListView,
  StatsView
};
use crate::routes;
use crate::rows::{
  self,
  RowControl,
  TitleLookup
};

pub struct ViewController<T, H> {
  fetch:  JsonFetch<T>,
  host:   H,
  config: ViewConfig
}

impl<T, H> ViewController<T, H>
where
  T: Transport,
  H: Host
{
  pub fn new(
    transport: T,
    host: H,
    config: ViewConfig
  ) -> Self {
    let fetch = JsonFetch::new(
      transport,
      config.base_url.clone(),
      config.verbose
    );
    Self {
      fetch,
      host,
      config
    }
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  /// Initial page load. Failures render
  /// inline.
  #[tracing::instrument(skip_all)]
  pub async fn start(&self) {
    info!("loading initial data");
    self
      .load_notes(NotesQuery::default())
      .await;
    self
      .load_actions(
        ActionItemsQuery::default()
      )
      .await;
    if self.config.show_stats {
      self.load_stats().await;
    }
  }

  #[tracing::instrument(skip(self))]
  pub async fn load_notes(
    &self,
    query: NotesQuery
  ) {
    self.host.render_notes(ListView::Pending);

    let path = routes::notes_list(&query);
    match self
      .fetch
      .fetch_json::<Vec<NoteDto>>(
        &path,
        FetchOptions::default()
      )
      .await
    {
      | Ok(notes) => {
        if self.config.verbose {
          info!(
            count = notes.len(),
            "loaded notes"
          );
        } else {
          debug!(
            count = notes.len(),
            "loaded notes"
          );
        }
        let rows = notes
          .iter()
          .map(rows::note_row)
          .collect();
        self.host.render_notes(
          ListView::Ready {
            query,
            rows
          }
        );
      }
      | Err(err) => {
        warn!(error = %err, "failed to load notes");
        self.host.render_notes(
          ListView::Failed(format!(
            "Error loading notes: {err}"
          ))
        );
      }
    }
  }

  #[tracing::instrument(skip(self))]
  pub async fn load_actions(
    &self,
    query: ActionItemsQuery
  ) {
    self
      .host
      .render_actions(ListView::Pending);

    match self.fetch_actions(&query).await
    {
      | Ok((items, titles)) => {
        if self.config.verbose {
          info!(
            count = items.len(),
            "loaded action items"
          );
        } else {
          debug!(
            count = items.len(),
            "loaded action items"
          );
        }
        let rows = items
          .iter()
          .map(|item| {
            rows::action_row(
              item,
              titles.as_ref(),
              &self.config
            )
          })
          .collect();
        self.host.render_actions(
          ListView::Ready {
            query,
            rows
          }
        );
      }
      | Err(err) => {
        warn!(error = %err, "failed to load action items");
        self.host.render_actions(
          ListView::Failed(format!(
            "Error loading actions: {err}"
          ))
        );
      }
    }
  }

  async fn fetch_actions(
    &self,
    query: &ActionItemsQuery
  ) -> Result<
    (Vec<ActionItemDto>, Option<TitleLookup>),
    FetchError
  > {
    let items = self
      .fetch
      .fetch_json::<Vec<ActionItemDto>>(
        &routes::action_items_list(query),
        FetchOptions::default()
      )
      .await?;

    let titles =
      if self.config.link_note_titles {
        let notes = self
          .fetch
          .fetch_json::<Vec<NoteDto>>(
            routes::NOTES,
            FetchOptions::default()
          )
          .await?;
        Some(rows::title_lookup(&notes))
      } else {
        None
      };

    Ok((items, titles))
  }

  #[tracing::instrument(skip(self))]
  pub async fn load_stats(&self) {
    self.host.render_stats(StatsView::Pending);
    match self
      .fetch
      .fetch_json::<StatsDto>(
        routes::STATS,
        FetchOptions::default()
      )
      .await
    {
      | Ok(stats) => {
        self.host.render_stats(
          StatsView::Ready(
            rows::stats_summary(&stats)
          )
        );
      }
      | Err(err) => {
        warn!(error = %err, "failed to load stats");
        self.host.render_stats(
          StatsView::Failed(format!(
            "Error loading stats: {err}"
          ))
        );
      }
    }
  }

  #[tracing::instrument(skip_all)]
  pub async fn submit_note(
    &self,
    draft: NoteCreate
  ) {
    info!("note form submitted");
    let result = match FetchOptions::json(
      Method::Post,
      &draft
    ) {
      | Ok(options) => {
        self
          .fetch
          .fetch_json::<IgnoredAny>(
            routes::NOTES,
            options
          )
          .await
      }
      | Err(err) => Err(err)
    };

    if let Err(err) = result {
      self.fail("create note", &err);
      return;
    }

    self.host.reset_note_form();
    self
      .load_notes(NotesQuery::default())
      .await;
    if self.config.cross_entity_refresh {
      self
        .load_actions(
          ActionItemsQuery::default()
        )
        .await;
    }
    self.refresh_stats().await;
  }

  #[tracing::instrument(skip_all)]
  pub async fn submit_action(
    &self,
    draft: ActionItemCreate
  ) {
    info!("action form submitted");
    let result = match FetchOptions::json(
      Method::Post,
      &draft
    ) {
      | Ok(options) => {
        self
          .fetch
          .fetch_json::<IgnoredAny>(
            routes::ACTION_ITEMS,
            options
          )
          .await
      }
      | Err(err) => Err(err)
    };

    if let Err(err) = result {
      self.fail("create action item", &err);
      return;
    }

    self.host.reset_action_form();
    self
      .load_actions(
        ActionItemsQuery::default()
      )
      .await;
    self.refresh_stats().await;
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete_note(
    &self,
    id: NoteId,
    query: NotesQuery
  ) {
    if !self.host.confirm("Delete this note?")
    {
      debug!("note deletion canceled");
      return;
    }

    if let Err(err) = self
      .fetch
      .fetch_json::<IgnoredAny>(
        &routes::note(id),
        FetchOptions::method(
          Method::Delete
        )
      )
      .await
    {
      self.fail("delete note", &err);
      return;
    }

    info!("deleted note");
    self.load_notes(query).await;
    if self.config.cross_entity_refresh {
      self
        .load_actions(
          ActionItemsQuery::default()
        )
        .await;
    }
    self.refresh_stats().await;
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete_action(
    &self,
    id: ActionItemId,
    query: ActionItemsQuery
  ) {
    if !self
      .host
      .confirm("Delete this action item?")
    {
      debug!(
        "action item deletion canceled"
      );
      return;
    }

    if let Err(err) = self
      .fetch
      .fetch_json::<IgnoredAny>(
        &routes::action_item(id),
        FetchOptions::method(
          Method::Delete
        )
      )
      .await
    {
      self.fail("delete action item", &err);
      return;
    }

    info!("deleted action item");
    self.load_actions(query).await;
    self.refresh_stats().await;
  }

  #[tracing::instrument(skip(self))]
  pub async fn complete_action(
    &self,
    id: ActionItemId,
    query: ActionItemsQuery
  ) {
    if let Err(err) = self
      .fetch
      .fetch_json::<IgnoredAny>(
        &routes::complete_action_item(id),
        FetchOptions::method(Method::Put)
      )
      .await
    {
      self
        .fail("complete action item", &err);
      return;
    }

    info!("completed action item");
    self.load_actions(query).await;
    self.refresh_stats().await;
  }

  #[tracing::instrument(skip(self))]
  pub async fn reopen_action(
    &self,
    id: ActionItemId,
    query: ActionItemsQuery
  ) {
    if !self.config.allow_reopen {
      warn!("reopen is disabled");
      self.host.alert("Reopen is disabled");
      return;
    }

    let result = match FetchOptions::json(
      Method::Patch,
      &ActionItemPatch::completed(false)
    ) {
      | Ok(options) => {
        self
          .fetch
          .fetch_json::<IgnoredAny>(
            &routes::action_item(id),
            options
          )
          .await
      }
      | Err(err) => Err(err)
    };

    if let Err(err) = result {
      self.fail("reopen action item", &err);
      return;
    }

    info!("reopened action item");
    self.load_actions(query).await;
    self.refresh_stats().await;
  }

  /// Dispatches a row button of the
  /// action list.
  pub async fn trigger_action_control(
    &self,
    control: RowControl,
    id: ActionItemId,
    query: ActionItemsQuery
  ) {
    match control {
      | RowControl::Complete => {
        self.complete_action(id, query).await
      }
      | RowControl::Reopen => {
        self.reopen_action(id, query).await
      }
      | RowControl::Delete => {
        self.delete_action(id, query).await
      }
    }
  }

  pub async fn search_notes(
    &self,
    text: impl Into<String>
  ) {
    self
      .load_notes(NotesQuery::search(text))
      .await;
  }

  pub async fn clear_search(&self) {
    self.host.reset_search();
    self
      .load_notes(NotesQuery::default())
      .await;
  }

  pub async fn filter_completed(
    &self,
    checked: bool
  ) {
    self
      .load_actions(
        ActionItemsQuery::completed(checked)
      )
      .await;
  }

  async fn refresh_stats(&self) {
    if self.config.show_stats {
      self.load_stats().await;
    }
  }

  fn fail(
    &self,
    what: &str,
    err: &FetchError
  ) {
    warn!(action = what, error = %err, "request failed");
    self
      .host
      .alert(&format!("Failed to {what}: {err}"));
  }
}
