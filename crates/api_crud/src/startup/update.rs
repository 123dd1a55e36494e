use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  startup::{EditStartup, StartupResponse},
};
use startlabx_db_schema::{
  source::startup::{Startup, StartupUpdateForm},
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::is_valid_title,
};

#[tracing::instrument(skip_all)]
pub async fn update_startup(
  data: Json<EditStartup>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<StartupResponse>> {
  let startup = Startup::read(&mut context.pool(), data.startup_id).await?;
  if startup.owner_id != user_view.user.id && !user_view.is_admin() {
    return Err(StartlabxErrorType::NoStartupEditAllowed.into());
  }
  if let Some(name) = &data.name {
    is_valid_title(name)?;
  }

  let form = StartupUpdateForm {
    name: data.name.clone(),
    pitch: data.pitch.clone().map(Some),
    stage: data.stage.clone().map(Some),
    website: data.website.clone().map(Some),
    updated: Some(Some(chrono::Utc::now())),
  };
  let startup = Startup::update(&mut context.pool(), startup.id, &form).await?;
  Ok(Json(StartupResponse { startup }))
}
