use actix_web::web::{Data, Json, Query};
use startlabx_api_common::{
  context::StartlabxContext,
  message::{GetMessages, GetMessagesResponse},
};
use startlabx_db_schema::source::conversation::{Conversation, Message};
use startlabx_db_views::structs::UserView;
use startlabx_utils::error::{StartlabxErrorType, StartlabxResult};

/// Participant-gated. Reading a conversation marks the other side's
/// messages as read.
#[tracing::instrument(skip_all)]
pub async fn list_messages(
  data: Query<GetMessages>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<GetMessagesResponse>> {
  let conversation = Conversation::read(&mut context.pool(), data.conversation_id).await?;
  if !conversation.has_participant(user_view.user.id) {
    return Err(StartlabxErrorType::NotAParticipant.into());
  }

  let messages = Message::list_for_conversation(&mut context.pool(), conversation.id).await?;
  Message::mark_read(&mut context.pool(), conversation.id, user_view.user.id).await?;
  Ok(Json(GetMessagesResponse { messages }))
}
