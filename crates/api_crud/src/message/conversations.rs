use actix_web::web::{Data, Json};
use startlabx_api_common::{context::StartlabxContext, message::ListConversationsResponse};
use startlabx_db_views::structs::{ConversationView, UserView};
use startlabx_utils::error::StartlabxResult;

pub async fn list_conversations(
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<ListConversationsResponse>> {
  let conversations =
    ConversationView::list_for_user(&mut context.pool(), user_view.user.id).await?;
  Ok(Json(ListConversationsResponse { conversations }))
}
