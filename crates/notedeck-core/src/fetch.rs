//! Thin JSON-over-HTTP helper.
//!
//! [`JsonFetch`] turns a resource path and [`FetchOptions`] into one request
//! on a [`Transport`], fails on any status outside 200-299 with the response
//! text, and decodes the body as JSON otherwise. Hosts supply the transport:
//! `reqwest` in the CLI, `gloo-net` in the browser.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  error,
  info,
  trace
};

use crate::error::FetchError;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Method {
  Get,
  Post,
  Put,
  Patch,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

impl std::fmt::Display for Method {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>
  ) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Method, headers and body of a
/// request. Defaults to a bare `GET`.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct FetchOptions {
  pub method:  Method,
  pub headers: Vec<(String, String)>,
  pub body:    Option<String>
}

impl Default for FetchOptions {
  fn default() -> Self {
    Self::method(Method::Get)
  }
}

impl FetchOptions {
  pub fn method(method: Method) -> Self {
    Self {
      method,
      headers: vec![],
      body: None
    }
  }

  /// Serializes `payload` as the body
  /// and sets the JSON content type.
  pub fn json<P>(
    method: Method,
    payload: &P
  ) -> Result<Self, FetchError>
  where
    P: Serialize + ?Sized
  {
    let body =
      serde_json::to_string(payload)
        .map_err(|err| {
          FetchError::Encode(
            err.to_string()
          )
        })?;
    Ok(Self {
      method,
      headers: vec![(
        "Content-Type".to_string(),
        "application/json".to_string()
      )],
      body: Some(body)
    })
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct HttpRequest {
  pub method:  Method,
  pub url:     String,
  pub headers: Vec<(String, String)>,
  pub body:    Option<String>
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct HttpResponse {
  pub status: u16,
  pub body:   String
}

impl HttpResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Sends one request and hands back
/// the status and body text.
///
/// Implementations never interpret the
/// status; that is left to
/// [`JsonFetch`].
#[allow(async_fn_in_trait)]
pub trait Transport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, FetchError>;
}

#[derive(Debug, Clone)]
pub struct JsonFetch<T> {
  transport: T,
  base_url:  String,
  verbose:   bool
}

impl<T: Transport> JsonFetch<T> {
  pub fn new(
    transport: T,
    base_url: impl Into<String>,
    verbose: bool
  ) -> Self {
    Self {
      transport,
      base_url: base_url.into(),
      verbose
    }
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn url(
    &self,
    path: &str
  ) -> String {
    join_url(&self.base_url, path)
  }

  #[tracing::instrument(
    skip(self, options),
    fields(method = %options.method)
  )]
  pub async fn fetch_json<R>(
    &self,
    path: &str,
    options: FetchOptions
  ) -> Result<R, FetchError>
  where
    R: DeserializeOwned
  {
    let url = self.url(path);
    if self.verbose {
      info!(url = %url, "fetching");
    } else {
      trace!(url = %url, "fetching");
    }

    let result =
      self.exchange(url, options).await;
    if let Err(err) = &result
      && self.verbose
    {
      error!(error = %err, "fetch error");
    }
    result
  }

  async fn exchange<R>(
    &self,
    url: String,
    options: FetchOptions
  ) -> Result<R, FetchError>
  where
    R: DeserializeOwned
  {
    let request = HttpRequest {
      method: options.method,
      url,
      headers: options.headers,
      body: options.body
    };

    let response =
      self.transport.send(request).await?;
    if self.verbose {
      info!(
        status = response.status,
        "response status"
      );
    } else {
      trace!(
        status = response.status,
        "response status"
      );
    }

    if !response.is_success() {
      if self.verbose {
        error!(
          status = response.status,
          body = %response.body,
          "error response"
        );
      }
      return Err(FetchError::Status {
        status: response.status,
        body:   response.body
      });
    }

    let data = decode_body(&response.body)?;
    if self.verbose {
      info!(
        payload = %response.body,
        "data received"
      );
    }
    Ok(data)
  }
}

/// Decodes a success body. An empty
/// body (`204 No Content`) reads as
/// JSON `null`.
pub fn decode_body<R>(
  body: &str
) -> Result<R, FetchError>
where
  R: DeserializeOwned
{
  let text = if body.trim().is_empty() {
    "null"
  } else {
    body
  };
  serde_json::from_str(text).map_err(
    |err| FetchError::Decode(err.to_string())
  )
}

pub fn join_url(
  base_url: &str,
  path: &str
) -> String {
  if base_url.is_empty() {
    return path.to_string();
  }
  format!(
    "{}/{}",
    base_url.trim_end_matches('/'),
    path.trim_start_matches('/')
  )
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use serde_json::Value;

  use super::*;

  struct OneShot {
    response: HttpResponse,
    seen:     RefCell<Vec<HttpRequest>>
  }

  impl Transport for OneShot {
    async fn send(
      &self,
      request: HttpRequest
    ) -> Result<HttpResponse, FetchError>
    {
      self.seen.borrow_mut().push(request);
      Ok(self.response.clone())
    }
  }

  fn fetcher(
    status: u16,
    body: &str
  ) -> JsonFetch<OneShot> {
    JsonFetch::new(
      OneShot {
        response: HttpResponse {
          status,
          body: body.to_string()
        },
        seen:     RefCell::new(vec![])
      },
      "",
      true
    )
  }

  #[tokio::test]
  async fn non_success_status_surfaces_body_text()
  {
    let fetch =
      fetcher(404, "Note not found");
    let err = fetch
      .fetch_json::<Value>(
        "/notes/3",
        FetchOptions::method(
          Method::Delete
        )
      )
      .await
      .expect_err("404 must fail");
    assert_eq!(
      err.to_string(),
      "Note not found"
    );
    assert_eq!(err.status(), Some(404));
  }

  #[tokio::test]
  async fn empty_success_body_decodes_as_null()
  {
    let fetch = fetcher(204, "");
    let value = fetch
      .fetch_json::<Value>(
        "/notes/3",
        FetchOptions::method(
          Method::Delete
        )
      )
      .await
      .expect("204 is a success");
    assert_eq!(value, Value::Null);
  }

  #[tokio::test]
  async fn malformed_json_is_a_decode_error()
  {
    let fetch = fetcher(200, "<html>");
    let err = fetch
      .fetch_json::<Vec<Value>>(
        "/notes/",
        FetchOptions::default()
      )
      .await
      .expect_err("not json");
    assert!(matches!(
      err,
      FetchError::Decode(_)
    ));
  }

  #[tokio::test]
  async fn json_options_set_content_type()
  {
    let fetch = fetcher(201, "{}");
    let options = FetchOptions::json(
      Method::Post,
      &serde_json::json!({"description": "x"})
    )
    .expect("encode");
    fetch
      .fetch_json::<Value>(
        "/action-items/",
        options
      )
      .await
      .expect("created");

    let seen =
      fetch.transport().seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(
      seen[0].method,
      Method::Post
    );
    assert_eq!(
      seen[0].headers,
      vec![(
        "Content-Type".to_string(),
        "application/json".to_string()
      )]
    );
    assert_eq!(
      seen[0].body.as_deref(),
      Some(r#"{"description":"x"}"#)
    );
  }

  #[test]
  fn join_url_handles_slashes() {
    assert_eq!(
      join_url("", "/notes/"),
      "/notes/"
    );
    assert_eq!(
      join_url(
        "http://localhost:8000/",
        "/notes/?q=a"
      ),
      "http://localhost:8000/notes/?q=a"
    );
  }
}
