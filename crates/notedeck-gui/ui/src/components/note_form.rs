use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct NoteFormProps {
  pub title:            String,
  pub content:          String,
  pub on_title_input:   Callback<String>,
  pub on_content_input: Callback<String>,
  pub on_submit:        Callback<()>
}

#[function_component(NoteForm)]
pub fn note_form(
  props: &NoteFormProps
) -> Html {
  let on_title_input = {
    let cb = props.on_title_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        cb.emit(input.value());
      }
    )
  };

  let on_content_input = {
    let cb =
      props.on_content_input.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        cb.emit(input.value());
      }
    )
  };

  let on_submit = {
    let cb = props.on_submit.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        e.prevent_default();
        cb.emit(());
      }
    )
  };

  html! {
      <form id="note-form" onsubmit={on_submit}>
          <input
              id="note-title"
              type="text"
              placeholder="Title"
              required=true
              value={props.title.clone()}
              oninput={on_title_input}
          />
          <textarea
              id="note-content"
              placeholder="Content"
              required=true
              value={props.content.clone()}
              oninput={on_content_input}
          />
          <button type="submit" class="btn-primary">{ "Add note" }</button>
      </form>
  }
}
