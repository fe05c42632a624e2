mod action_form;
mod action_list;
mod action_list_row;
mod completed_filter;
mod note_form;
mod note_list;
mod note_list_row;
mod note_search;
mod stats_bar;

pub use action_form::ActionForm;
pub use action_list::ActionList;
pub use action_list_row::ActionListRow;
pub use completed_filter::CompletedFilter;
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use note_list_row::NoteListRow;
pub use note_search::NoteSearch;
pub use stats_bar::StatsBar;
