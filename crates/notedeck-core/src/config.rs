use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  debug,
  trace
};

use crate::error::ConfigError;

/// Display and refresh toggles shared
/// by every host.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ViewConfig {
  /// Prefix joined onto every
  /// resource path. Empty means
  /// same-origin.
  pub base_url:             String,
  pub verbose:              bool,
  /// Note create/delete also
  /// reloads the action list.
  pub cross_entity_refresh: bool,
  pub link_note_titles:     bool,
  pub show_metadata:        bool,
  pub allow_reopen:         bool,
  pub show_stats:           bool
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      base_url:             String::new(),
      verbose:              false,
      cross_entity_refresh: true,
      link_note_titles:     true,
      show_metadata:        true,
      allow_reopen:         true,
      show_stats:           false
    }
  }
}

impl ViewConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> Result<Self, ConfigError> {
    let cfg: Self = toml::from_str(text)
      .map_err(|err| {
        ConfigError::Parse(
          err.to_string()
        )
      })?;
    debug!(?cfg, "parsed view config");
    Ok(cfg)
  }

  /// Applies `KEY=VALUE` pairs on top
  /// of the loaded values. A leading
  /// `rc.` on the key is ignored. On
  /// error nothing is applied.
  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) -> Result<(), ConfigError>
  where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    let mut next = self.clone();
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .trim()
        .to_string();
      let value = v.trim();
      debug!(key = %key, value = %value, "applying override");

      match key.as_str() {
        | "base_url" => {
          next.base_url =
            value.to_string();
        }
        | "verbose" => {
          next.verbose =
            parse_bool(value);
        }
        | "cross_entity_refresh" => {
          next.cross_entity_refresh =
            parse_bool(value);
        }
        | "link_note_titles" => {
          next.link_note_titles =
            parse_bool(value);
        }
        | "show_metadata" => {
          next.show_metadata =
            parse_bool(value);
        }
        | "allow_reopen" => {
          next.allow_reopen =
            parse_bool(value);
        }
        | "show_stats" => {
          next.show_stats =
            parse_bool(value);
        }
        | _ => {
          return Err(
            ConfigError::UnknownKey(key)
          );
        }
      }
    }

    trace!(cfg = ?next, "overrides applied");
    *self = next;
    Ok(())
  }
}

/// Splits a `KEY=VALUE` override.
pub fn parse_override(
  raw: &str
) -> Result<(String, String), ConfigError>
{
  let (k, v) =
    raw.split_once('=').ok_or_else(
      || {
        ConfigError::MalformedOverride(
          raw.to_string()
        )
      }
    )?;
  Ok((
    k.trim().to_string(),
    v.trim().to_string()
  ))
}

pub fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_keys_fall_back_to_defaults()
  {
    let cfg = ViewConfig::from_toml_str(
      "verbose = true\n"
    )
    .expect("parse config");
    assert!(cfg.verbose);
    assert!(cfg.cross_entity_refresh);
    assert!(cfg.link_note_titles);
    assert!(!cfg.show_stats);
    assert_eq!(cfg.base_url, "");
  }

  #[test]
  fn invalid_toml_is_reported() {
    let err = ViewConfig::from_toml_str(
      "verbose = \"maybe"
    )
    .expect_err("should fail");
    assert!(matches!(
      err,
      ConfigError::Parse(_)
    ));
  }

  #[test]
  fn overrides_strip_rc_prefix_and_parse_bools()
  {
    let mut cfg = ViewConfig::default();
    cfg
      .apply_overrides(vec![
        (
          "rc.allow_reopen".to_string(),
          "off".to_string()
        ),
        (
          "base_url".to_string(),
          "http://localhost:8000"
            .to_string()
        ),
        (
          "show_stats".to_string(),
          "yes".to_string()
        ),
      ])
      .expect("apply overrides");
    assert!(!cfg.allow_reopen);
    assert!(cfg.show_stats);
    assert_eq!(
      cfg.base_url,
      "http://localhost:8000"
    );
  }

  #[test]
  fn unknown_override_key_is_rejected()
  {
    let mut cfg = ViewConfig::default();
    let err = cfg
      .apply_overrides(vec![(
        "colour".to_string(),
        "on".to_string()
      )])
      .expect_err("unknown key");
    assert_eq!(
      err,
      ConfigError::UnknownKey(
        "colour".to_string()
      )
    );
  }

  #[test]
  fn rejected_overrides_leave_config_untouched()
  {
    let mut cfg = ViewConfig::default();
    let err = cfg
      .apply_overrides(vec![
        (
          "rc.show_stats".to_string(),
          "on".to_string()
        ),
        (
          "rc.typo".to_string(),
          "1".to_string()
        ),
        (
          "rc.allow_reopen".to_string(),
          "off".to_string()
        ),
      ])
      .expect_err("unknown key");
    assert_eq!(
      err,
      ConfigError::UnknownKey(
        "typo".to_string()
      )
    );
    assert_eq!(cfg, ViewConfig::default());
  }

  #[test]
  fn parse_override_requires_equals() {
    assert_eq!(
      parse_override("verbose = on")
        .expect("valid override"),
      (
        "verbose".to_string(),
        "on".to_string()
      )
    );
    assert!(
      parse_override("verbose").is_err()
    );
  }
}
