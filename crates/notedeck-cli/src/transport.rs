use anyhow::Context;
use notedeck_core::{
  FetchError,
  HttpRequest,
  HttpResponse,
  Method,
  Transport
};
use tracing::trace;

/// `reqwest` client behind the JSON
/// fetch helper.
#[derive(Debug, Clone)]
pub struct HttpTransport {
  client: reqwest::Client
}

impl HttpTransport {
  pub fn new() -> anyhow::Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!(
        "notedeck/",
        env!("CARGO_PKG_VERSION")
      ))
      .build()
      .context(
        "failed to build HTTP client"
      )?;
    Ok(Self { client })
  }
}

fn to_reqwest(
  method: Method
) -> reqwest::Method {
  match method {
    | Method::Get => reqwest::Method::GET,
    | Method::Post => {
      reqwest::Method::POST
    }
    | Method::Put => reqwest::Method::PUT,
    | Method::Patch => {
      reqwest::Method::PATCH
    }
    | Method::Delete => {
      reqwest::Method::DELETE
    }
  }
}

impl Transport for HttpTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, FetchError> {
    trace!(method = %request.method, url = %request.url, "sending request");

    let mut builder = self.client.request(
      to_reqwest(request.method),
      &request.url
    );
    for (name, value) in &request.headers {
      builder = builder
        .header(name.as_str(), value.as_str());
    }
    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response =
      builder.send().await.map_err(
        |err| {
          FetchError::Transport(
            err.to_string()
          )
        }
      )?;
    let status =
      response.status().as_u16();
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
