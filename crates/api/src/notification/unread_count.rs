use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, notification::UnreadCountResponse};
use startlabx_db_schema::source::notification::Notification;
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::StartlabxResult;

pub async fn unread_count(
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<UnreadCountResponse>> {
  let count = Notification::unread_count(&mut context.pool(), user_view.user.id).await?;
  Ok(Json(UnreadCountResponse { count }))
}
