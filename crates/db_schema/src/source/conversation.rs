use crate::{
  newtypes::{ConversationId, MessageId, UserId},
  schema::{conversation, message},
};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = conversation)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A direct-message thread between exactly two users. Participants are
/// stored in (a, b) order with `a < b` so a pair maps to one row.
pub struct Conversation {
  pub id: ConversationId,
  pub participant_a_id: UserId,
  pub participant_b_id: UserId,
  pub published: DateTime<Utc>,
  /// Time of the last message.
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = conversation)]
pub struct ConversationInsertForm {
  pub participant_a_id: UserId,
  pub participant_b_id: UserId,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = message)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Message {
  pub id: MessageId,
  pub conversation_id: ConversationId,
  pub sender_id: UserId,
  pub content: String,
  pub read: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = message)]
pub struct MessageInsertForm {
  pub conversation_id: ConversationId,
  pub sender_id: UserId,
  pub content: String,
}
