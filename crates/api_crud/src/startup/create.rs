use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  plans::plan_limits,
  startup::{CreateStartup, StartupResponse},
  utils::{current_tier, is_founder_or_admin},
};
use startlabx_db_schema::{
  source::startup::{Startup, StartupInsertForm},
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::is_valid_title,
};

/// Founders only, and capped by the plan's startup limit.
#[tracing::instrument(skip_all)]
pub async fn create_startup(
  data: Json<CreateStartup>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<StartupResponse>> {
  is_founder_or_admin(&user_view)?;
  is_valid_title(&data.name)?;

  let tier = current_tier(&context, &user_view.user).await?;
  if let Some(max) = plan_limits(tier).max_startups {
    let owned = Startup::count_for_owner(&mut context.pool(), user_view.user.id).await?;
    if owned >= max {
      return Err(StartlabxErrorType::QuotaExceeded.into());
    }
  }

  let form = StartupInsertForm {
    owner_id: user_view.user.id,
    name: data.name.clone(),
    pitch: data.pitch.clone(),
    stage: data.stage.clone(),
    website: data.website.clone(),
  };
  let startup = Startup::create(&mut context.pool(), &form).await?;
  Ok(Json(StartupResponse { startup }))
}
