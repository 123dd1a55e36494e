use actix_web::web::{Data, Json};
use startlabx_api_common::{
  context::StartlabxContext,
  message::{SendMessage, SendMessageResponse},
  utils::notify,
};
use startlabx_db_schema::{
  enums::NotificationKind,
  source::{
    conversation::{Conversation, Message, MessageInsertForm},
    notification::NotificationInsertForm,
    user::User,
  },
  traits::Crud,
};
use startlabx_db_views::structs::UserView;
use startlabx_utils::{
  error::{StartlabxErrorType, StartlabxResult},
  utils::validation::is_valid_body_field,
};

/// Sends a direct message, creating the conversation on first contact, and
/// notifies the recipient.
#[tracing::instrument(skip_all)]
pub async fn send_message(
  data: Json<SendMessage>,
  context: Data<StartlabxContext>,
  user_view: UserView,
) -> StartlabxResult<Json<SendMessageResponse>> {
  is_valid_body_field(&data.content, false)?;
  if data.recipient_id == user_view.user.id {
    return Err(StartlabxErrorType::CannotMessageYourself.into());
  }
  // 404 for a recipient that doesn't exist.
  User::read(&mut context.pool(), data.recipient_id).await?;

  let conversation =
    Conversation::read_or_create(&mut context.pool(), user_view.user.id, data.recipient_id)
      .await?;
  let form = MessageInsertForm {
    conversation_id: conversation.id,
    sender_id: user_view.user.id,
    content: data.content.clone(),
  };
  let message = Message::create(&mut context.pool(), &form).await?;

  let notification_form = NotificationInsertForm {
    recipient_id: data.recipient_id,
    kind: NotificationKind::Message,
    content: format!("New message from {}", user_view.user.name),
    link: Some(format!("/messages/{}", conversation.id.0)),
  };
  notify(&context, notification_form).await?;

  Ok(Json(SendMessageResponse {
    conversation_id: conversation.id,
    message,
  }))
}
