use notedeck_core::StatsView;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
  pub view: StatsView
}

#[function_component(StatsBar)]
pub fn stats_bar(
  props: &StatsBarProps
) -> Html {
  match &props.view {
    | StatsView::Hidden => html! {},
    | StatsView::Pending => html! {
        <div id="stats" class="stats"></div>
    },
    | StatsView::Ready(summary) => html! {
        <div id="stats" class="stats">{ summary.clone() }</div>
    },
    | StatsView::Failed(message) => html! {
        <div id="stats" class="stats list-error">{ message.clone() }</div>
    }
  }
}
