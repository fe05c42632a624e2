use notedeck_core::rows::NoteRow;
use notedeck_core::shared::NoteId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoteListRowProps {
  pub row:       NoteRow,
  pub on_delete: Callback<NoteId>
}

#[function_component(NoteListRow)]
pub fn note_list_row(
  props: &NoteListRowProps
) -> Html {
  let id = props.row.id;
  let on_delete =
    props.on_delete.clone();

  html! {
      <li class="note-item">
          <div class="note-content">
              <strong>{ &props.row.title }</strong>
              { ": " }
              { &props.row.content }
          </div>
          <div class="note-actions">
              <button
                  class="btn-danger"
                  onclick={move |_| on_delete.emit(id)}
              >
                  { "Delete" }
              </button>
          </div>
      </li>
  }
}
