use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use startlabx_db_schema::{newtypes::UserId, source::user::User};
use startlabx_utils::error::{StartlabxErrorExt, StartlabxErrorType, StartlabxResult};

const EXPIRY_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// User id, the standard claim by RFC 7519.
  pub sub: i32,
  pub email: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
  pub exp: i64,
}

impl Claims {
  pub fn generate(user: &User, jwt_secret: &str) -> StartlabxResult<String> {
    let now = Utc::now();
    let claims = Claims {
      sub: user.id.0,
      email: user.email.clone(),
      iat: now.timestamp(),
      exp: (now + chrono::TimeDelta::days(EXPIRY_DAYS)).timestamp(),
    };
    encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .with_error_type(StartlabxErrorType::NotLoggedIn)
  }

  /// Expired or malformed tokens read as not logged in.
  pub fn validate(jwt: &str, jwt_secret: &str) -> StartlabxResult<Claims> {
    let mut validation = Validation::default();
    validation.validate_exp = true;
    validation.required_spec_claims.insert("exp".to_string());
    let claims = decode::<Claims>(
      jwt,
      &DecodingKey::from_secret(jwt_secret.as_bytes()),
      &validation,
    )
    .with_error_type(StartlabxErrorType::NotLoggedIn)?;
    Ok(claims.claims)
  }

  pub fn user_id(&self) -> UserId {
    UserId(self.sub)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  use super::Claims;
  use chrono::Utc;
  use jsonwebtoken::{encode, EncodingKey, Header};
  use pretty_assertions::assert_eq;
  use startlabx_db_schema::{enums::UserRole, newtypes::UserId, source::user::User};

  const SECRET: &str = "it's a secret to everybody";

  fn test_user() -> User {
    User {
      id: UserId(42),
      name: "ada".to_string(),
      display_name: None,
      email: "ada@example.com".to_string(),
      password_encrypted: String::new(),
      role: UserRole::Founder,
      bio: None,
      skills: None,
      avatar: None,
      verified: false,
      published: Utc::now(),
      updated: None,
    }
  }

  #[test]
  fn test_generate_and_validate() {
    let jwt = Claims::generate(&test_user(), SECRET).unwrap();
    let claims = Claims::validate(&jwt, SECRET).unwrap();
    assert_eq!(42, claims.sub);
    assert_eq!(UserId(42), claims.user_id());
    assert_eq!("ada@example.com", claims.email);
    assert_eq!(60 * 60 * 24 * 7, claims.exp - claims.iat);
  }

  #[test]
  fn test_wrong_secret_is_rejected() {
    let jwt = Claims::generate(&test_user(), SECRET).unwrap();
    assert!(Claims::validate(&jwt, "some other secret").is_err());
  }

  #[test]
  fn test_expired_token_is_rejected() {
    let now = Utc::now().timestamp();
    let claims = Claims {
      sub: 42,
      email: "ada@example.com".to_string(),
      iat: now - 1000,
      exp: now - 100,
    };
    let jwt = encode(
      &Header::default(),
      &claims,
      &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    assert!(Claims::validate(&jwt, SECRET).is_err());
  }

  #[test]
  fn test_garbage_is_rejected() {
    assert!(Claims::validate("definitely.not.a-jwt", SECRET).is_err());
  }
}
