use std::rc::Rc;

use gloo::console::log;
use notedeck_core::rows::RowControl;
use notedeck_core::shared::{
  ActionItemCreate,
  ActionItemId,
  ActionItemsQuery,
  NoteCreate,
  NoteId,
  NotesQuery
};
use notedeck_core::{
  ActionsView,
  Host,
  NotesView,
  StatsView,
  ViewConfig,
  ViewController
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api::GlooTransport;
use crate::components::{
  ActionForm,
  ActionList,
  CompletedFilter,
  NoteForm,
  NoteList,
  NoteSearch,
  StatsBar
};

const DEFAULT_VIEW_TOML: &str =
  include_str!("../assets/view.toml");

type PageController =
  ViewController<GlooTransport, DomHost>;

/// Page state the controller writes
/// through. Cloned into every spawned
/// request.
#[derive(Clone)]
struct DomHost {
  notes:        UseStateHandle<NotesView>,
  actions:      UseStateHandle<ActionsView>,
  stats:        UseStateHandle<StatsView>,
  note_title:   UseStateHandle<String>,
  note_content: UseStateHandle<String>,
  action_desc:  UseStateHandle<String>,
  search_text:  UseStateHandle<String>
}

impl Host for DomHost {
  fn render_notes(&self, view: NotesView) {
    self.notes.set(view);
  }

  fn render_actions(
    &self,
    view: ActionsView
  ) {
    self.actions.set(view);
  }

  fn render_stats(&self, view: StatsView) {
    self.stats.set(view);
  }

  fn confirm(&self, message: &str) -> bool {
    gloo::dialogs::confirm(message)
  }

  fn alert(&self, message: &str) {
    gloo::dialogs::alert(message);
  }

  fn reset_note_form(&self) {
    self.note_title.set(String::new());
    self.note_content.set(String::new());
  }

  fn reset_action_form(&self) {
    self.action_desc.set(String::new());
  }

  fn reset_search(&self) {
    self.search_text.set(String::new());
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_view_config);
  let notes =
    use_state(NotesView::default);
  let actions =
    use_state(ActionsView::default);
  let stats = use_state(StatsView::default);
  let note_title = use_state(String::new);
  let note_content =
    use_state(String::new);
  let action_desc =
    use_state(String::new);
  let search_text =
    use_state(String::new);
  let completed_only =
    use_state(|| false);

  let host = DomHost {
    notes:        notes.clone(),
    actions:      actions.clone(),
    stats:        stats.clone(),
    note_title:   note_title.clone(),
    note_content: note_content.clone(),
    action_desc:  action_desc.clone(),
    search_text:  search_text.clone()
  };
  let controller: Rc<PageController> =
    Rc::new(ViewController::new(
      GlooTransport,
      host,
      (*config).clone()
    ));

  {
    let controller = controller.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "loading notes and action items"
      );
      wasm_bindgen_futures::spawn_local(
        async move {
          controller.start().await;
        }
      );
      || ()
    });
  }

  let on_note_title_input = {
    let note_title = note_title.clone();
    Callback::from(move |value: String| {
      note_title.set(value);
    })
  };

  let on_note_content_input = {
    let note_content =
      note_content.clone();
    Callback::from(move |value: String| {
      note_content.set(value);
    })
  };

  let on_submit_note = {
    let controller = controller.clone();
    let note_title = note_title.clone();
    let note_content =
      note_content.clone();
    Callback::from(move |()| {
      let payload = NoteCreate {
        title:   (*note_title).clone(),
        content: (*note_content).clone()
      };
      ui_debug(
        "action.note.submit",
        &payload.title
      );
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller
            .submit_note(payload)
            .await;
        }
      );
    })
  };

  let on_action_desc_input = {
    let action_desc = action_desc.clone();
    Callback::from(move |value: String| {
      action_desc.set(value);
    })
  };

  let on_submit_action = {
    let controller = controller.clone();
    let action_desc = action_desc.clone();
    Callback::from(move |()| {
      let payload = ActionItemCreate {
        description: (*action_desc)
          .clone()
      };
      ui_debug(
        "action.action_item.submit",
        &payload.description
      );
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller
            .submit_action(payload)
            .await;
        }
      );
    })
  };

  let on_search_input = {
    let search_text = search_text.clone();
    Callback::from(move |value: String| {
      search_text.set(value);
    })
  };

  let on_search = {
    let controller = controller.clone();
    Callback::from(move |text: String| {
      ui_debug("action.search", &text);
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller
            .search_notes(text)
            .await;
        }
      );
    })
  };

  let on_clear_search = {
    let controller = controller.clone();
    Callback::from(move |()| {
      ui_debug(
        "action.search.clear",
        "clicked Clear"
      );
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller.clear_search().await;
        }
      );
    })
  };

  let on_filter_completed = {
    let controller = controller.clone();
    let completed_only =
      completed_only.clone();
    Callback::from(move |checked: bool| {
      completed_only.set(checked);
      ui_debug(
        "action.filter.completed",
        if checked { "true" } else { "false" }
      );
      let controller = controller.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          controller
            .filter_completed(checked)
            .await;
        }
      );
    })
  };

  let on_delete_note = {
    let controller = controller.clone();
    Callback::from(
      move |(id, query): (
        NoteId,
        NotesQuery
      )| {
        ui_debug(
          "action.note.delete",
          &id.to_string()
        );
        let controller =
          controller.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            controller
              .delete_note(id, query)
              .await;
          }
        );
      }
    )
  };

  let on_action_control = {
    let controller = controller.clone();
    Callback::from(
      move |(control, id, query): (
        RowControl,
        ActionItemId,
        ActionItemsQuery
      )| {
        ui_debug(
          "action.action_item.control",
          &format!("{} {id}", control.label())
        );
        let controller =
          controller.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            controller
              .trigger_action_control(
                control, id, query
              )
              .await;
          }
        );
      }
    )
  };

  html! {
      <main class="notedeck">
          <StatsBar view={(*stats).clone()} />
          <section class="panel notes-panel">
              <h2>{ "Notes" }</h2>
              <NoteForm
                  title={(*note_title).clone()}
                  content={(*note_content).clone()}
                  on_title_input={on_note_title_input}
                  on_content_input={on_note_content_input}
                  on_submit={on_submit_note}
              />
              <NoteSearch
                  text={(*search_text).clone()}
                  on_input={on_search_input}
                  on_search={on_search}
                  on_clear={on_clear_search}
              />
              <NoteList
                  view={(*notes).clone()}
                  on_delete={on_delete_note}
              />
          </section>
          <section class="panel actions-panel">
              <h2>{ "Action items" }</h2>
              <ActionForm
                  description={(*action_desc).clone()}
                  on_input={on_action_desc_input}
                  on_submit={on_submit_action}
              />
              <CompletedFilter
                  checked={*completed_only}
                  on_change={on_filter_completed}
              />
              <ActionList
                  view={(*actions).clone()}
                  on_control={on_action_control}
              />
          </section>
      </main>
  }
}

/// Bundled defaults, then `?rc.key=value`
/// pairs from the page URL.
fn load_view_config() -> ViewConfig {
  let mut cfg =
    match ViewConfig::from_toml_str(
      DEFAULT_VIEW_TOML
    ) {
      | Ok(cfg) => cfg,
      | Err(err) => {
        tracing::warn!(error = %err, "bundled view config is invalid; using defaults");
        ViewConfig::default()
      }
    };

  let search = web_sys::window()
    .and_then(|window| {
      window.location().search().ok()
    })
    .unwrap_or_default();
  let overrides =
    query_overrides(&search, decode);
  if let Err(err) =
    cfg.apply_overrides(overrides)
  {
    tracing::warn!(error = %err, "ignoring URL config overrides");
    log!(format!(
      "[ui-debug] config: {err}"
    ));
  }

  tracing::debug!(?cfg, "view config loaded");
  cfg
}

fn decode(raw: &str) -> String {
  let plus_as_space =
    raw.replace('+', " ");
  js_sys::decode_uri_component(
    &plus_as_space
  )
  .map(String::from)
  .unwrap_or(plus_as_space)
}

/// Collects the `rc.`-prefixed pairs of
/// a `?a=b&c=d` query string.
fn query_overrides(
  search: &str,
  decode: impl Fn(&str) -> String
) -> Vec<(String, String)> {
  search
    .trim_start_matches('?')
    .split('&')
    .filter(|pair| !pair.is_empty())
    .filter_map(|pair| {
      let (key, value) = pair
        .split_once('=')
        .unwrap_or((pair, ""));
      let key = decode(key);
      key.starts_with("rc.").then(|| {
        (key, decode(value))
      })
    })
    .collect()
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
