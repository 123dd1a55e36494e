use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  user::{SaveUserSettings, UserResponse},
};
use startlabx_db_schema::{
  source::user::{User, UserUpdateForm},
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::StartlabxResult,
  utils::validation::is_valid_bio_field,
};

#[tracing::instrument(skip_all)]
pub async fn save_user_settings(
  data: Json<SaveUserSettings>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<UserResponse>> {
  if let Some(bio) = &data.bio {
    is_valid_bio_field(bio)?;
  }

  let form = UserUpdateForm {
    display_name: data.display_name.clone().map(Some),
    bio: data.bio.clone().map(Some),
    skills: data.skills.clone().map(Some),
    avatar: data.avatar.clone().map(Some),
    updated: Some(Some(chrono::Utc::now())),
    ..Default::default()
  };
  let user = User::update(&mut context.pool(), user_view.user.id, &form).await?;
  Ok(Json(UserResponse { user }))
}
