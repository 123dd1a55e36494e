use crate::verify_password;
use actix_web::web::{Data, Json};
use startlabx_api_common::{
  claims::Claims,
  context::StartlabxContext,
  user::{Login, LoginResponse},
};
use startlabx_db_schema::source::user::User;
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  settings::SETTINGS,
};

#[tracing::instrument(skip_all)]
pub async fn login(
  data: Json<Login>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<LoginResponse>> {
  let name_or_email: &str = data.username_or_email.as_ref();
  // Emails are stored lowercased, usernames as typed.
  let user = match User::find_by_email_or_name(&mut context.pool(), name_or_email).await? {
    Some(user) => Some(user),
    None => User::find_by_email(&mut context.pool(), &name_or_email.to_lowercase()).await?,
  }
  .ok_or(StartlabxErrorType::IncorrectLogin)?;

  // Same error for a missing account and a wrong password.
  if !verify_password(data.password.as_ref(), &user.password_encrypted) {
    return Err(StartlabxErrorType::IncorrectLogin.into());
  }

  let secret = SETTINGS.jwt_secret()?;
  let jwt = Claims::generate(&user, secret.as_ref())?;
  Ok(Json(LoginResponse {
    jwt: jwt.into(),
    user,
  }))
}
