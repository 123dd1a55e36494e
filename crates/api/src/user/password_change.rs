use crate::hash_password;
use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, user::PasswordChangeAfterReset, SuccessResponse};
use startlabx_db_schema::source::{password_reset_request::PasswordResetRequest, user::User};
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::password_length_check,
};

/// Trades a valid reset token for a new password. Tokens are single use,
/// but only a successful password write consumes one, so a transient
/// failure doesn't strand the user.
#[tracing::instrument(skip_all)]
pub async fn password_change(
  data: Json<PasswordChangeAfterReset>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<SuccessResponse>> {
  password_length_check(data.password.as_ref())?;
  if data.password != data.password_verify {
    return Err(StartlabxErrorType::PasswordsDoNotMatch.into());
  }

  let request = PasswordResetRequest::read_from_token(&mut context.pool(), data.token.as_ref())
    .await?
    .ok_or(StartlabxErrorType::InvalidResetToken)?;

  let new_hash = hash_password(data.password.as_ref())?;
  User::update_password(&mut context.pool(), request.user_id, &new_hash).await?;
  PasswordResetRequest::consume(&mut context.pool(), request.id).await?;

  Ok(Json(SuccessResponse::default()))
}
