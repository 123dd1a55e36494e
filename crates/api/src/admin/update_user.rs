use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  user::{AdminUpdateUser, UserResponse},
  utils::is_admin,
};
use startlabx_db_schema::{
  enums::UserRole,
  source::user::{User, UserUpdateForm},
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

#[tracing::instrument(skip_all)]
pub async fn admin_update_user(
  data: Json<AdminUpdateUser>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<UserResponse>> {
  is_admin(&user_view)?;

  // An admin taking away their own admin role would lock the panel.
  if data.user_id == user_view.user.id
    && data.role.is_some()
    && data.role != Some(UserRole::Admin)
  {
    return Err(StartlabxErrorType::CannotDemoteYourself.into());
  }

  let form = UserUpdateForm {
    role: data.role,
    verified: data.verified,
    updated: Some(Some(chrono::Utc::now())),
    ..Default::default()
  };
  let user = User::update(&mut context.pool(), data.user_id, &form).await?;
  Ok(Json(UserResponse { user }))
}
