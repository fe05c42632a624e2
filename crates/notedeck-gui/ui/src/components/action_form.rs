use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ActionFormProps {
  pub description: String,
  pub on_input:    Callback<String>,
  pub on_submit:   Callback<()>
}

#[function_component(ActionForm)]
pub fn action_form(
  props: &ActionFormProps
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
      <form id="action-form" onsubmit={on_submit}>
          <input
              id="action-desc"
              type="text"
              placeholder="Describe the action item"
              required=true
              value={props.description.clone()}
              oninput={on_input}
          />
          <button type="submit" class="btn-primary">{ "Add action item" }</button>
      </form>
  }
}
