use serde::{Deserialize, Serialize};
use std::{backtrace::Backtrace, fmt, fmt::Debug};
use strum::{Display, EnumIter};

#[derive(Display, Debug, Serialize, Deserialize, Clone, PartialEq, Eq, EnumIter, Hash)]
#[serde(tag = "error", content = "message", rename_all = "snake_case")]
#[non_exhaustive]
pub enum StartlabxErrorType {
  NotLoggedIn,
  IncorrectLogin,
  NotAnAdmin,
  NotAFounder,
  OwnerCannotLeave,
  CannotDemoteYourself,
  NotAParticipant,
  QuotaExceeded,
  NotFound,
  RateLimitError,
  EmailAlreadyExists,
  UsernameAlreadyExists,
  CommunityAlreadyExists,
  InvalidName,
  InvalidEmailAddress,
  /// Password must be between 8 and 60 characters
  InvalidPassword,
  PasswordsDoNotMatch,
  InvalidTitle,
  InvalidBodyField,
  InvalidResetToken,
  InvalidPlanTier,
  CannotMessageYourself,
  NoPostEditAllowed,
  NoStartupEditAllowed,
  CouldntCreateUser,
  CouldntUpdateUser,
  BillingProviderError(String),
  AiProviderError(String),
  Unknown(String),
}

pub type StartlabxResult<T> = Result<T, StartlabxError>;

pub struct StartlabxError {
  pub error_type: StartlabxErrorType,
  pub inner: anyhow::Error,
  pub context: Backtrace,
}

impl<T> From<T> for StartlabxError
where
  T: Into<anyhow::Error>,
{
  fn from(t: T) -> Self {
    let cause = t.into();
    let error_type = match cause.downcast_ref::<diesel::result::Error>() {
      Some(&diesel::NotFound) => StartlabxErrorType::NotFound,
      _ => StartlabxErrorType::Unknown(format!("{}", &cause)),
    };
    StartlabxError {
      error_type,
      inner: cause,
      context: Backtrace::capture(),
    }
  }
}

impl Debug for StartlabxError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StartlabxError")
      .field("message", &self.error_type)
      .field("inner", &self.inner)
      .field("context", &self.context)
      .finish()
  }
}

impl fmt::Display for StartlabxError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}: ", &self.error_type)?;
    writeln!(f, "{}", self.inner)?;
    fmt::Display::fmt(&self.context, f)
  }
}

impl actix_web::error::ResponseError for StartlabxError {
  fn status_code(&self) -> actix_web::http::StatusCode {
    use actix_web::http::StatusCode;
    match self.error_type {
      StartlabxErrorType::NotLoggedIn | StartlabxErrorType::IncorrectLogin => {
        StatusCode::UNAUTHORIZED
      }
      StartlabxErrorType::NotAnAdmin
      | StartlabxErrorType::NotAFounder
      | StartlabxErrorType::OwnerCannotLeave
      | StartlabxErrorType::CannotDemoteYourself
      | StartlabxErrorType::NotAParticipant
      | StartlabxErrorType::QuotaExceeded => StatusCode::FORBIDDEN,
      StartlabxErrorType::NotFound => StatusCode::NOT_FOUND,
      StartlabxErrorType::RateLimitError => StatusCode::TOO_MANY_REQUESTS,
      StartlabxErrorType::BillingProviderError(_)
      | StartlabxErrorType::AiProviderError(_)
      | StartlabxErrorType::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
      _ => StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> actix_web::HttpResponse {
    actix_web::HttpResponse::build(self.status_code()).json(&self.error_type)
  }
}

impl From<StartlabxErrorType> for StartlabxError {
  fn from(error_type: StartlabxErrorType) -> Self {
    let inner = anyhow::anyhow!("{}", error_type);
    StartlabxError {
      error_type,
      inner,
      context: Backtrace::capture(),
    }
  }
}

pub trait StartlabxErrorExt<T, E: Into<anyhow::Error>> {
  fn with_error_type(self, error_type: StartlabxErrorType) -> StartlabxResult<T>;
}

impl<T, E: Into<anyhow::Error>> StartlabxErrorExt<T, E> for Result<T, E> {
  fn with_error_type(self, error_type: StartlabxErrorType) -> StartlabxResult<T> {
    self.map_err(|error| StartlabxError {
      error_type,
      inner: error.into(),
      context: Backtrace::capture(),
    })
  }
}

pub trait StartlabxErrorExt2<T> {
  fn with_error_type(self, error_type: StartlabxErrorType) -> StartlabxResult<T>;
  fn into_anyhow(self) -> Result<T, anyhow::Error>;
}

impl<T> StartlabxErrorExt2<T> for StartlabxResult<T> {
  fn with_error_type(self, error_type: StartlabxErrorType) -> StartlabxResult<T> {
    self.map_err(|mut e| {
      e.error_type = error_type;
      e
    })
  }

  // can't be an impl From because it would conflict with the blanket Into impl
  fn into_anyhow(self) -> Result<T, anyhow::Error> {
    self.map_err(|e| e.inner)
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used)]
  #![allow(clippy::indexing_slicing)]
  use super::*;
  use actix_web::{body::MessageBody, ResponseError};
  use pretty_assertions::assert_eq;

  #[test]
  fn deserializes_no_message() -> StartlabxResult<()> {
    let err = StartlabxError::from(StartlabxErrorType::NotAnAdmin).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(&json, "{\"error\":\"not_an_admin\"}");

    Ok(())
  }

  #[test]
  fn deserializes_with_message() -> StartlabxResult<()> {
    let provider_err = StartlabxErrorType::BillingProviderError(String::from("reason"));
    let err = StartlabxError::from(provider_err).error_response();
    let json = String::from_utf8(err.into_body().try_into_bytes().unwrap_or_default().to_vec())?;
    assert_eq!(
      &json,
      "{\"error\":\"billing_provider_error\",\"message\":\"reason\"}"
    );

    Ok(())
  }

  #[test]
  fn test_convert_diesel_errors() {
    let not_found_error = StartlabxError::from(diesel::NotFound);
    assert_eq!(StartlabxErrorType::NotFound, not_found_error.error_type);
    assert_eq!(404, not_found_error.status_code());

    let other_error = StartlabxError::from(diesel::result::Error::NotInTransaction);
    assert!(matches!(
      other_error.error_type,
      StartlabxErrorType::Unknown { .. }
    ));
    assert_eq!(500, other_error.status_code());
  }

  #[test]
  fn test_status_codes() {
    assert_eq!(
      401,
      StartlabxError::from(StartlabxErrorType::NotLoggedIn).status_code()
    );
    assert_eq!(
      403,
      StartlabxError::from(StartlabxErrorType::OwnerCannotLeave).status_code()
    );
    assert_eq!(
      403,
      StartlabxError::from(StartlabxErrorType::CannotDemoteYourself).status_code()
    );
    assert_eq!(
      400,
      StartlabxError::from(StartlabxErrorType::EmailAlreadyExists).status_code()
    );
    assert_eq!(
      429,
      StartlabxError::from(StartlabxErrorType::RateLimitError).status_code()
    );
  }
}
