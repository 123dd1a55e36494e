use crate::{
  error::{StartlabxError, StartlabxResult},
  sensitive::SensitiveString,
};
use anyhow::{anyhow, Context};
use deser_hjson::from_str;
use std::{env, fs, sync::LazyLock};

pub mod structs;

use structs::Settings;

static CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(|| {
  if env::var("STARTLABX_INITIALIZE_WITH_DEFAULT_SETTINGS").is_ok() {
    println!("Warning: Using default settings. Could be a problem with the config file.");
    Settings::default()
  } else {
    Settings::init().expect("Failed to load settings file, see documentation")
  }
});

impl Settings {
  /// Reads config from configuration file.
  ///
  /// Note: The env vars `STARTLABX_DATABASE_URL` and `STARTLABX_JWT_SECRET`
  /// are read directly by the accessors below and take precedence over the
  /// file.
  fn init() -> StartlabxResult<Self> {
    let path = Self::get_config_location();
    let plain = fs::read_to_string(&path).with_context(|| format!("Couldn't read config file {path}"))?;
    let config = from_str::<Settings>(&plain)?;
    if config.hostname == Settings::default().hostname {
      return Err(anyhow!("Hostname variable is not set!").into());
    }
    Ok(config)
  }

  pub fn get_config_location() -> String {
    env::var("STARTLABX_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }

  pub fn get_database_url(&self) -> String {
    if let Ok(url) = env::var("STARTLABX_DATABASE_URL") {
      url
    } else {
      self.database.connection.clone()
    }
  }

  pub fn jwt_secret(&self) -> StartlabxResult<SensitiveString> {
    let secret = if let Ok(secret) = env::var("STARTLABX_JWT_SECRET") {
      secret.into()
    } else {
      self.jwt_secret.clone()
    };
    if secret.is_empty() {
      return Err(StartlabxError::from(anyhow!("jwt secret is not set")));
    }
    Ok(secret)
  }

  pub fn cors_origin(&self) -> Option<String> {
    env::var("STARTLABX_CORS_ORIGIN")
      .ok()
      .or(self.cors_origin.clone())
  }

  /// Returns either "http" or "https", depending on tls_enabled setting
  pub fn get_protocol_string(&self) -> &'static str {
    if self.tls_enabled {
      "https"
    } else {
      "http"
    }
  }

  /// Returns something like `http://localhost` or `https://startlabx.dev`,
  /// with the correct protocol and hostname.
  pub fn get_protocol_and_hostname(&self) -> String {
    format!("{}://{}", self.get_protocol_string(), self.hostname)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::structs::Settings;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_default_protocol_and_hostname() {
    let settings = Settings::default();
    assert_eq!("http://unset", settings.get_protocol_and_hostname());
  }

  #[test]
  fn test_config_from_hjson() {
    let hjson = r#"
      {
        hostname: startlabx.dev
        port: 9000
        tls_enabled: true
        database: {
          pool_size: 5
        }
      }
    "#;
    let settings = deser_hjson::from_str::<Settings>(hjson).unwrap();
    assert_eq!("startlabx.dev", settings.hostname);
    assert_eq!(9000, settings.port);
    assert_eq!(5, settings.database.pool_size);
    assert_eq!("https://startlabx.dev", settings.get_protocol_and_hostname());
  }
}
