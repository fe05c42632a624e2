pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod host;
pub mod routes;
pub mod rows;

pub use config::ViewConfig;
pub use controller::ViewController;
pub use error::{
  ConfigError,
  FetchError
};
pub use fetch::{
  FetchOptions,
  HttpRequest,
  HttpResponse,
  JsonFetch,
  Method,
  Transport
};
pub use host::{
  ActionsView,
  Host,
  ListView,
  NotesView,
  StatsView
};
pub use notedeck_shared as shared;
