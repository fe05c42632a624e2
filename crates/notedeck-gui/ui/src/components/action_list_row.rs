use notedeck_core::rows::{
  ActionRow,
  RowControl
};
use notedeck_core::shared::ActionItemId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ActionListRowProps {
  pub row:        ActionRow,
  pub on_control:
    Callback<(RowControl, ActionItemId)>
}

fn button_class(
  control: RowControl
) -> &'static str {
  match control {
    | RowControl::Complete => {
      "btn-success"
    }
    | RowControl::Reopen => "btn",
    | RowControl::Delete => "btn-danger"
  }
}

#[function_component(ActionListRow)]
pub fn action_list_row(
  props: &ActionListRowProps
) -> Html {
  let id = props.row.id;
  let class = if props.row.completed {
    "action-item done"
  } else {
    "action-item"
  };

  html! {
      <li class={class}>
          <div class="action-item-content">{ &props.row.text }</div>
          <div class="action-buttons">
              {
                  for props.row.controls.iter().copied().map(|control| {
                      let on_control = props.on_control.clone();
                      html! {
                          <button
                              class={button_class(control)}
                              onclick={move |_| on_control.emit((control, id))}
                          >
                              { control.label() }
                          </button>
                      }
                  })
              }
          </div>
      </li>
  }
}
