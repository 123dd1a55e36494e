use crate::error::{StartlabxErrorType, StartlabxResult};
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static VALID_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$")
    .expect("compile regex")
});

const BODY_MAX_LENGTH: usize = 10000;
const POST_BODY_MAX_LENGTH: usize = 50000;
const BIO_MAX_LENGTH: usize = 1000;
const USERNAME_MAX_LENGTH: usize = 30;
const TITLE_MAX_LENGTH: usize = 200;
const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 60;

fn has_newline(name: &str) -> bool {
  name.contains('\n')
}

fn min_length_check(item: &str, min_length: usize, error: StartlabxErrorType) -> StartlabxResult<()> {
  if item.chars().count() < min_length {
    Err(error.into())
  } else {
    Ok(())
  }
}

fn max_length_check(item: &str, max_length: usize, error: StartlabxErrorType) -> StartlabxResult<()> {
  if item.chars().count() > max_length {
    Err(error.into())
  } else {
    Ok(())
  }
}

/// Usernames and community names: alphanumeric plus underscore, no
/// lookalike-alphabet mixing.
pub fn is_valid_actor_name(name: &str) -> StartlabxResult<()> {
  #[allow(clippy::expect_used)]
  static VALID_ACTOR_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("compile regex"));

  min_length_check(name, 3, StartlabxErrorType::InvalidName)?;
  max_length_check(name, USERNAME_MAX_LENGTH, StartlabxErrorType::InvalidName)?;
  if VALID_ACTOR_NAME_REGEX.is_match(name) {
    Ok(())
  } else {
    Err(StartlabxErrorType::InvalidName.into())
  }
}

pub fn is_valid_email(email: &str) -> StartlabxResult<()> {
  if VALID_EMAIL_REGEX.is_match(email) && !has_newline(email) {
    Ok(())
  } else {
    Err(StartlabxErrorType::InvalidEmailAddress.into())
  }
}

pub fn is_valid_title(title: &str) -> StartlabxResult<()> {
  let length = title.trim().chars().count();
  if (3..=TITLE_MAX_LENGTH).contains(&length) && !has_newline(title) {
    Ok(())
  } else {
    Err(StartlabxErrorType::InvalidTitle.into())
  }
}

/// Post bodies get a higher cap than comments, bios and descriptions.
pub fn is_valid_body_field(body: &str, post: bool) -> StartlabxResult<()> {
  if post {
    max_length_check(body, POST_BODY_MAX_LENGTH, StartlabxErrorType::InvalidBodyField)
  } else {
    max_length_check(body, BODY_MAX_LENGTH, StartlabxErrorType::InvalidBodyField)
  }
}

pub fn is_valid_bio_field(bio: &str) -> StartlabxResult<()> {
  max_length_check(bio, BIO_MAX_LENGTH, StartlabxErrorType::InvalidBodyField)
}

pub fn password_length_check(pass: &str) -> StartlabxResult<()> {
  if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&pass.chars().count()) {
    Err(StartlabxErrorType::InvalidPassword.into())
  } else {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::*;

  #[test]
  fn test_valid_actor_name() {
    assert!(is_valid_actor_name("jane_doe").is_ok());
    assert!(is_valid_actor_name("j4ne").is_ok());
    // too short
    assert!(is_valid_actor_name("jd").is_err());
    // disallowed characters
    assert!(is_valid_actor_name("jane doe").is_err());
    assert!(is_valid_actor_name("jane@doe").is_err());
    assert!(is_valid_actor_name("").is_err());
  }

  #[test]
  fn test_valid_email() {
    assert!(is_valid_email("founder@startlabx.dev").is_ok());
    assert!(is_valid_email("a.b+c@sub.example.co").is_ok());
    assert!(is_valid_email("no-at-sign").is_err());
    assert!(is_valid_email("bad@host").is_err());
    assert!(is_valid_email("bad@host\n.com").is_err());
  }

  #[test]
  fn test_valid_title() {
    assert!(is_valid_title("Launching our seed round").is_ok());
    assert!(is_valid_title("ab").is_err());
    assert!(is_valid_title("multi\nline").is_err());
    assert!(is_valid_title(&"t".repeat(201)).is_err());
  }

  #[test]
  fn test_body_field_limits() {
    assert!(is_valid_body_field(&"b".repeat(10000), false).is_ok());
    assert!(is_valid_body_field(&"b".repeat(10001), false).is_err());
    assert!(is_valid_body_field(&"b".repeat(10001), true).is_ok());
    assert!(is_valid_body_field(&"b".repeat(50001), true).is_err());
  }

  #[test]
  fn test_password_length() {
    assert!(password_length_check("correcthorse").is_ok());
    assert!(password_length_check("short").is_err());
    assert!(password_length_check(&"p".repeat(61)).is_err());
  }
}
