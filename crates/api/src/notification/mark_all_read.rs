use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, SuccessResponse};
use startlabx_db_schema::source::notification::Notification;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

pub async fn mark_all_read(
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<SuccessResponse>> {
  Notification::mark_all_read(&mut context.pool(), user_view.user.id).await?;
  Ok(Json(SuccessResponse::default()))
}
