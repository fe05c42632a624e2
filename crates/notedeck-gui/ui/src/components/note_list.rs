use notedeck_core::shared::{
  NoteId,
  NotesQuery
};
use notedeck_core::{
  ListView,
  NotesView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::NoteListRow;

#[derive(Properties, PartialEq)]
pub struct NoteListProps {
  pub view:      NotesView,
  pub on_delete:
    Callback<(NoteId, NotesQuery)>
}

#[function_component(NoteList)]
pub fn note_list(
  props: &NoteListProps
) -> Html {
  match &props.view {
    | ListView::Pending => html! {
        <ul id="notes"></ul>
    },
    | ListView::Failed(message) => html! {
        <ul id="notes">
            <li class="list-error">{ message.clone() }</li>
        </ul>
    },
    | ListView::Ready {
      query,
      rows
    } => html! {
        <ul id="notes">
            {
                for rows.iter().cloned().map(|row| {
                    let on_delete = props.on_delete.clone();
                    let query = query.clone();
                    html! {
                        <NoteListRow
                            row={row}
                            on_delete={Callback::from(move |id: NoteId| {
                                on_delete.emit((id, query.clone()))
                            })}
                        />
                    }
                })
            }
        </ul>
    }
  }
}
