use notedeck_core::rows::RowControl;
use notedeck_core::shared::{
  ActionItemId,
  ActionItemsQuery
};
use notedeck_core::{
  ActionsView,
  ListView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::ActionListRow;

#[derive(Properties, PartialEq)]
pub struct ActionListProps {
  pub view:       ActionsView,
  pub on_control: Callback<(
    RowControl,
    ActionItemId,
    ActionItemsQuery
  )>
}

#[function_component(ActionList)]
pub fn action_list(
  props: &ActionListProps
) -> Html {
  match &props.view {
    | ListView::Pending => html! {
        <ul id="actions"></ul>
    },
    | ListView::Failed(message) => html! {
        <ul id="actions">
            <li class="list-error">{ message.clone() }</li>
        </ul>
    },
    | ListView::Ready {
      query,
      rows
    } => {
      let query = *query;
      html! {
          <ul id="actions">
              {
                  for rows.iter().cloned().map(|row| {
                      let on_control = props.on_control.clone();
                      html! {
                          <ActionListRow
                              row={row}
                              on_control={Callback::from(
                                  move |(control, id): (RowControl, ActionItemId)| {
                                      on_control.emit((control, id, query))
                                  }
                              )}
                          />
                      }
                  })
              }
          </ul>
      }
    }
  }
}
