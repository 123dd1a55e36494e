use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  ai::{ListGenerations, ListGenerationsResponse},
  context::StartlabxContext,
};
use startlabx_db_schema::source::ai_generation::AiGeneration;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

pub async fn list_generations(
  data: Query<ListGenerations>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<ListGenerationsResponse>> {
  let generations =
    AiGeneration::list_for_user(&mut context.pool(), user_view.user.id, data.page, data.limit)
      .await?;
  Ok(Json(ListGenerationsResponse { generations }))
}
