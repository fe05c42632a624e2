use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use notedeck_core::ViewConfig;
use tracing::{
  info,
  warn
};

pub const DEFAULT_BASE_URL: &str =
  "http://127.0.0.1:8000";

const CONFIG_ENV: &str =
  "NOTEDECK_CONFIG";

#[tracing::instrument(skip(
  override_path
))]
pub fn load(
  override_path: Option<&Path>
) -> anyhow::Result<ViewConfig> {
  let path =
    resolve_config_path(override_path)?;
  let Some(path) = path else {
    warn!(
      "no config file found; using \
       defaults"
    );
    return Ok(ViewConfig::default());
  };

  let path = expand_tilde(&path);
  info!(config = %path.display(), "loading config");
  let text = fs::read_to_string(&path)
    .with_context(|| {
      format!(
        "failed to read {}",
        path.display()
      )
    })?;

  ViewConfig::from_toml_str(&text)
    .with_context(|| {
      format!(
        "failed to parse {}",
        path.display()
      )
    })
}

/// The CLI needs an absolute URL; an
/// empty base falls back to the local
/// dev server.
pub fn resolve_base_url(
  cfg: &mut ViewConfig,
  override_url: Option<String>
) {
  if let Some(url) = override_url {
    cfg.base_url = url;
  }
  if cfg.base_url.trim().is_empty() {
    cfg.base_url =
      DEFAULT_BASE_URL.to_string();
  }
}

#[tracing::instrument(skip(
  override_path
))]
fn resolve_config_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(env_path) =
    std::env::var(CONFIG_ENV)
  {
    if env_path == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(
      env_path
    )));
  }

  let base = dirs::config_dir()
    .ok_or_else(|| {
      anyhow!(
        "cannot determine config \
         directory"
      )
    })?;
  let candidate = base
    .join("notedeck")
    .join("config.toml");
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}
