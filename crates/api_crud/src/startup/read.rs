use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  startup::{GetStartup, ListStartups, ListStartupsResponse, StartupResponse},
};
use startlabx_db_schema::{source::startup::Startup, traits::Crud};
use startlabx_utils::error::StartlabxResult;

pub async fn get_startup(
  data: Query<GetStartup>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<StartupResponse>> {
  let startup = Startup::read(&mut context.pool(), data.id).await?;
  Ok(Json(StartupResponse { startup }))
}

pub async fn list_startups(
  data: Query<ListStartups>,
  context: Data<StartlabxContext>,
) -> StartlabxResult<Json<ListStartupsResponse>> {
  let startups = Startup::list(&mut context.pool(), data.page, data.limit).await?;
  Ok(Json(ListStartupsResponse { startups }))
}
