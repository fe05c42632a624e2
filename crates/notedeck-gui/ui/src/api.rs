use gloo::net::http::Request;
use notedeck_core::{
  FetchError,
  HttpRequest,
  HttpResponse,
  Method,
  Transport
};

/// Browser `fetch` through gloo-net.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct GlooTransport;

impl Transport for GlooTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, FetchError> {
    let url = request.url.as_str();
    let mut builder = match request.method
    {
      | Method::Get => Request::get(url),
      | Method::Post => Request::post(url),
      | Method::Put => Request::put(url),
      | Method::Patch => {
        Request::patch(url)
      }
      | Method::Delete => {
        Request::delete(url)
      }
    };
    for (name, value) in &request.headers {
      builder = builder.header(name, value);
    }

    let prepared = match request.body {
      | Some(body) => builder.body(body),
      | None => builder.build()
    }
    .map_err(|err| {
      FetchError::Transport(format!(
        "failed to build request: {err}"
      ))
    })?;

    let response =
      prepared.send().await.map_err(
        |err| {
          FetchError::Transport(
            err.to_string()
          )
        }
      )?;
    let status = response.status();
    let body =
      response.text().await.map_err(
        |err| {
          FetchError::Transport(
            err.to_string()
          )
        }
      )?;

    Ok(HttpResponse { status, body })
  }
}
