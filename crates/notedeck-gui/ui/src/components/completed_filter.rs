use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CompletedFilterProps {
  pub checked:   bool,
  pub on_change: Callback<bool>
}

#[function_component(CompletedFilter)]
pub fn completed_filter(
  props: &CompletedFilterProps
) -> Html {
  let on_change = {
    let cb = props.on_change.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        cb.emit(input.checked());
      }
    )
  };

  html! {
      <label class="filter-completed">
          <input
              id="filter-completed"
              type="checkbox"
              checked={props.checked}
              onchange={on_change}
          />
          { " Completed" }
      </label>
  }
}
