use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, ops::Deref};

/// A string that must not leak into logs or API responses, like a password
/// or the jwt signing secret.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SensitiveString(String);

impl SensitiveString {
  pub fn into_inner(self) -> String {
    self.0
  }
}

impl std::fmt::Debug for SensitiveString {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Sensitive").finish()
  }
}

impl AsRef<[u8]> for SensitiveString {
  fn as_ref(&self) -> &[u8] {
    self.0.as_ref()
  }
}

impl AsRef<str> for SensitiveString {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Deref for SensitiveString {
  type Target = str;
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl From<String> for SensitiveString {
  fn from(t: String) -> Self {
    SensitiveString(t)
  }
}

impl From<&str> for SensitiveString {
  fn from(t: &str) -> Self {
    SensitiveString(t.into())
  }
}

impl Borrow<str> for SensitiveString {
  fn borrow(&self) -> &str {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_debug_is_redacted() {
    let secret: SensitiveString = "supersecret".into();
    assert_eq!("Sensitive", format!("{secret:?}"));
  }
}
