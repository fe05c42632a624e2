#![allow(dead_code)]

use std::cell::{
  Cell,
  RefCell
};
use std::collections::{
  BTreeMap,
  VecDeque
};
use std::io;
use std::rc::Rc;
use std::sync::{
  Arc,
  Mutex
};

use notedeck_core::rows::{
  ActionRow,
  NoteRow
};
use notedeck_core::{
  ActionsView,
  FetchError,
  Host,
  HttpRequest,
  HttpResponse,
  ListView,
  Method,
  NotesView,
  StatsView,
  Transport
};

/// Answers from a script keyed by
/// method and URL; repeated keys are
/// served in order, and the last answer
/// sticks.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
  routes: Rc<
    RefCell<
      BTreeMap<
        (String, String),
        VecDeque<HttpResponse>
      >
    >
  >,
  log:    Rc<RefCell<Vec<HttpRequest>>>
}

impl ScriptedTransport {
  pub fn on(
    &self,
    method: Method,
    url: &str,
    status: u16,
    body: &str
  ) -> &Self {
    self
      .routes
      .borrow_mut()
      .entry((
        method.as_str().to_string(),
        url.to_string()
      ))
      .or_default()
      .push_back(HttpResponse {
        status,
        body: body.to_string()
      });
    self
  }

  pub fn requests(&self) -> Vec<HttpRequest> {
    self.log.borrow().clone()
  }

  pub fn calls(&self) -> Vec<String> {
    self
      .log
      .borrow()
      .iter()
      .map(|req| {
        format!("{} {}", req.method, req.url)
      })
      .collect()
  }

  pub fn count(
    &self,
    method: Method,
    url: &str
  ) -> usize {
    self
      .log
      .borrow()
      .iter()
      .filter(|req| {
        req.method == method
          && req.url == url
      })
      .count()
  }
}

impl Transport for ScriptedTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, FetchError> {
    self.log.borrow_mut().push(request.clone());
    let key = (
      request.method.as_str().to_string(),
      request.url.clone()
    );
    let mut routes = self.routes.borrow_mut();
    let Some(queue) = routes.get_mut(&key)
    else {
      return Err(FetchError::Transport(
        format!(
          "no route for {} {}",
          request.method, request.url
        )
      ));
    };
    let response = if queue.len() > 1 {
      queue.pop_front()
    } else {
      queue.front().cloned()
    };
    response.ok_or_else(|| {
      FetchError::Transport(
        "empty route".to_string()
      )
    })
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
  Notes(NotesView),
  Actions(ActionsView),
  Stats(StatsView),
  Confirm(String),
  Alert(String),
  ResetNoteForm,
  ResetActionForm,
  ResetSearch
}

#[derive(Clone)]
pub struct RecordingHost {
  events:  Rc<RefCell<Vec<HostEvent>>>,
  confirm: Rc<Cell<bool>>
}

impl Default for RecordingHost {
  fn default() -> Self {
    Self {
      events:  Rc::default(),
      confirm: Rc::new(Cell::new(true))
    }
  }
}

impl RecordingHost {
  pub fn answer_confirm(&self, yes: bool) {
    self.confirm.set(yes);
  }

  pub fn events(&self) -> Vec<HostEvent> {
    self.events.borrow().clone()
  }

  pub fn clear(&self) {
    self.events.borrow_mut().clear();
  }

  pub fn alerts(&self) -> Vec<String> {
    self
      .events()
      .into_iter()
      .filter_map(|event| match event {
        | HostEvent::Alert(msg) => Some(msg),
        | _ => None
      })
      .collect()
  }

  pub fn last_notes(&self) -> Option<NotesView> {
    self
      .events()
      .into_iter()
      .rev()
      .find_map(|event| match event {
        | HostEvent::Notes(view) => Some(view),
        | _ => None
      })
  }

  pub fn last_actions(
    &self
  ) -> Option<ActionsView> {
    self
      .events()
      .into_iter()
      .rev()
      .find_map(|event| match event {
        | HostEvent::Actions(view) => {
          Some(view)
        }
        | _ => None
      })
  }

  pub fn last_stats(&self) -> Option<StatsView> {
    self
      .events()
      .into_iter()
      .rev()
      .find_map(|event| match event {
        | HostEvent::Stats(view) => Some(view),
        | _ => None
      })
  }

  pub fn note_rows(&self) -> Vec<NoteRow> {
    self
      .last_notes()
      .map(|view| view.rows().to_vec())
      .unwrap_or_default()
  }

  pub fn action_rows(&self) -> Vec<ActionRow> {
    self
      .last_actions()
      .map(|view| view.rows().to_vec())
      .unwrap_or_default()
  }

  /// Completed (non-pending) renders of
  /// the note list.
  pub fn note_renders(&self) -> usize {
    self
      .events()
      .iter()
      .filter(|event| {
        matches!(event, HostEvent::Notes(view) if !view.is_pending())
      })
      .count()
  }

  pub fn action_renders(&self) -> usize {
    self
      .events()
      .iter()
      .filter(|event| {
        matches!(event, HostEvent::Actions(view) if !view.is_pending())
      })
      .count()
  }

  fn push(&self, event: HostEvent) {
    self.events.borrow_mut().push(event);
  }
}

impl Host for RecordingHost {
  fn render_notes(&self, view: NotesView) {
    self.push(HostEvent::Notes(view));
  }

  fn render_actions(
    &self,
    view: ActionsView
  ) {
    self.push(HostEvent::Actions(view));
  }

  fn render_stats(&self, view: StatsView) {
    self.push(HostEvent::Stats(view));
  }

  fn confirm(&self, message: &str) -> bool {
    self.push(HostEvent::Confirm(
      message.to_string()
    ));
    self.confirm.get()
  }

  fn alert(&self, message: &str) {
    self.push(HostEvent::Alert(
      message.to_string()
    ));
  }

  fn reset_note_form(&self) {
    self.push(HostEvent::ResetNoteForm);
  }

  fn reset_action_form(&self) {
    self.push(HostEvent::ResetActionForm);
  }

  fn reset_search(&self) {
    self.push(HostEvent::ResetSearch);
  }
}

/// Captures formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
  pub fn text(&self) -> String {
    let bytes = self
      .0
      .lock()
      .map(|buf| buf.clone())
      .unwrap_or_default();
    String::from_utf8_lossy(&bytes)
      .into_owned()
  }
}

impl io::Write for LogBuffer {
  fn write(
    &mut self,
    bytes: &[u8]
  ) -> io::Result<usize> {
    if let Ok(mut buf) = self.0.lock() {
      buf.extend_from_slice(bytes);
    }
    Ok(bytes.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a>
  for LogBuffer
{
  type Writer = LogBuffer;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}

pub fn is_ready<Q, R>(
  view: &ListView<Q, R>
) -> bool {
  matches!(view, ListView::Ready { .. })
}

pub const NOTES_JSON: &str = r#"[
  {"id": 2, "title": "Standup", "content": "Daily sync"},
  {"id": 1, "title": "Retro", "content": "What went well"}
]"#;

pub const ACTIONS_JSON: &str = r#"[
  {"id": 10, "description": "Send minutes", "completed": false, "note_id": 2, "priority": "high"},
  {"id": 11, "description": "Book room", "completed": true}
]"#;
