use serde::{Deserialize, Serialize};
use startlabx_db_schema::{
  newtypes::{ConversationId, UserId},
  source::conversation::Message,
};
use startlabx_db_views::structs::ConversationView;

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Sending to someone for the first time creates the conversation.
pub struct SendMessage {
  pub recipient_id: UserId,
  pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendMessageResponse {
  pub conversation_id: ConversationId,
  pub message: Message,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetMessages {
  pub conversation_id: ConversationId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetMessagesResponse {
  pub messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListConversationsResponse {
  pub conversations: Vec<ConversationView>,
}
