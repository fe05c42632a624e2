use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

/// Search box plus its two buttons.
/// Searching with an empty box still
/// sends `?q=`.
#[derive(Properties, PartialEq)]
pub struct NoteSearchProps {
  pub text:      String,
  pub on_input:  Callback<String>,
  pub on_search: Callback<String>,
  pub on_clear:  Callback<()>
}

#[function_component(NoteSearch)]
pub fn note_search(
  props: &NoteSearchProps
) -> Html {
  let on_input = {
    let cb = props.on_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        cb.emit(input.value());
      }
    )
  };

  let on_search = {
    let cb = props.on_search.clone();
    let text = props.text.clone();
    Callback::from(move |_| {
      cb.emit(text.clone());
    })
  };

  let on_clear = {
    let cb = props.on_clear.clone();
    Callback::from(move |_| cb.emit(()))
  };

  html! {
      <div class="note-search">
          <input
              id="note-search"
              type="search"
              placeholder="Search notes"
              value={props.text.clone()}
              oninput={on_input}
          />
          <button id="note-search-btn" class="btn" onclick={on_search}>
              { "Search" }
          </button>
          <button id="clear-note-search" class="btn" onclick={on_clear}>
              { "Clear" }
          </button>
      </div>
  }
}
