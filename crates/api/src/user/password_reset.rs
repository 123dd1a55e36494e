use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, user::PasswordReset, SuccessResponse};
use startlabx_db_schema::{
  enums::NotificationKind,
  source::{notification::NotificationInsertForm, password_reset_request::PasswordResetRequest, user::User},
};
use startlabx_utils::{error::StartlabxResult, utils::generate_random_string};
use tracing::info;

/// Answers 200 whether or not the email exists, so the endpoint can't be
/// used to probe for accounts.
#[tracing::instrument(skip_all)]
pub async fn password_reset(
  data: Json<PasswordReset>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<SuccessResponse>> {
  let email: &str = data.email.as_ref();
  let user = User::find_by_email(&mut context.pool(), &email.to_lowercase()).await?;

  if let Some(user) = user {
    let token = generate_random_string();
    PasswordResetRequest::create(&mut context.pool(), user.id, &token).await?;
    let form = NotificationInsertForm {
      recipient_id: user.id,
      kind: NotificationKind::System,
      content: "Password reset requested".to_string(),
      link: Some(format!("/reset-password?token={token}")),
    };
    startlabx_api_common::utils::notify(&context, form).await?;
    info!("Created password reset request for user {}", user.id);
  }

  Ok(Json(SuccessResponse::default()))
}
