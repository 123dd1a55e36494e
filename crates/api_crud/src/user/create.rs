use actix_web::web::{Data, Json};
use startlabx_api_common::{
  claims::Claims,
  context::StartlabxContext,
  user::{LoginResponse, Register},
};
use startlabx_db_schema::{
  enums::{PlanTier, SubscriptionStatus, UserRole},
  source::{
    subscription::{Subscription, SubscriptionInsertForm},
    user::{User, UserInsertForm},
  },
  traits::Crud,
};
use startlabx_utils::{
  error::{StartlabxErrorExt, StartlabxErrorType, StartlabxResult},
  settings::SETTINGS,
  utils::validation::{is_valid_actor_name, is_valid_email, password_length_check},
};

/// Register a new account. New accounts start on the free plan and are
/// logged in right away.
#[tracing::instrument(skip_all)]
pub async fn register(
  data: Json<Register>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<LoginResponse>> {
  is_valid_actor_name(&data.username)?;
  let email = data.email.to_lowercase();
  is_valid_email(&email)?;
  password_length_check(data.password.as_ref())?;
  if data.password != data.password_verify {
    return Err(StartlabxErrorType::PasswordsDoNotMatch.into());
  }
  // Nobody registers as admin.
  if data.role == UserRole::Admin {
    return Err(StartlabxErrorType::NotAnAdmin.into());
  }

  // Checked before insert so the caller gets a specific error instead of a
  // bare constraint violation.
  if User::check_email_taken(&mut context.pool(), &email).await? {
    return Err(StartlabxErrorType::EmailAlreadyExists.into());
  }
  if User::check_name_taken(&mut context.pool(), &data.username).await? {
    return Err(StartlabxErrorType::UsernameAlreadyExists.into());
  }

  let password_encrypted = bcrypt::hash(data.password.as_ref() as &str, bcrypt::DEFAULT_COST)
    .with_error_type(StartlabxErrorType::CouldntCreateUser)?;
  let form = UserInsertForm::new(data.username.clone(), email, password_encrypted, data.role);
  let user = User::create(&mut context.pool(), &form)
    .await
    .with_error_type(StartlabxErrorType::CouldntCreateUser)?;

  let subscription_form = SubscriptionInsertForm {
    user_id: user.id,
    tier: PlanTier::Free,
    status: SubscriptionStatus::Active,
    external_session_id: None,
    external_customer_id: None,
    current_period_end: None,
  };
  Subscription::upsert(&mut context.pool(), &subscription_form).await?;

  let secret = SETTINGS.jwt_secret()?;
  let jwt = Claims::generate(&user, secret.as_ref())?;
  Ok(Json(LoginResponse {
    jwt: jwt.into(),
    user,
  }))
}
