use crate::structs::ConversationView;
use diesel::{dsl::count_star, result::Error, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use startlabx_db_schema::{
  newtypes::{ConversationId, UserId},
  schema::{message, user_},
  source::{
    conversation::{Conversation, Message},
    user::User,
  },
  utils::{get_conn, DbPool},
};
use std::collections::HashMap;

impl ConversationView {
  /// The inbox: every thread the user is part of, who it's with, the last
  /// message and how many are unread.
  pub async fn list_for_user(
    pool: &mut DbPool<'_>,
    my_user_id: UserId,
  ) -> Result<Vec<Self>, Error> {
    let conversations = Conversation::list_for_user(pool, my_user_id).await?;
    if conversations.is_empty() {
      return Ok(Vec::new());
    }

    let conversation_ids: Vec<ConversationId> = conversations.iter().map(|c| c.id).collect();
    let other_ids: Vec<UserId> = conversations
      .iter()
      .map(|c| {
        if c.participant_a_id == my_user_id {
          c.participant_b_id
        } else {
          c.participant_a_id
        }
      })
      .collect();

    let conn = &mut get_conn(pool).await?;
    let others: HashMap<UserId, User> = user_::table
      .filter(user_::id.eq_any(&other_ids))
      .select(User::as_select())
      .load::<User>(conn)
      .await?
      .into_iter()
      .map(|u| (u.id, u))
      .collect();

    // Oldest to newest, so the map insert below keeps the last one.
    let mut last_messages: HashMap<ConversationId, Message> = HashMap::new();
    let messages = message::table
      .filter(message::conversation_id.eq_any(&conversation_ids))
      .order_by(message::published.asc())
      .select(Message::as_select())
      .load::<Message>(conn)
      .await?;
    for m in messages {
      last_messages.insert(m.conversation_id, m);
    }

    let unread_counts: HashMap<ConversationId, i64> = message::table
      .filter(message::conversation_id.eq_any(&conversation_ids))
      .filter(message::sender_id.ne(my_user_id))
      .filter(message::read.eq(false))
      .group_by(message::conversation_id)
      .select((message::conversation_id, count_star()))
      .load::<(ConversationId, i64)>(conn)
      .await?
      .into_iter()
      .collect();

    Ok(
      conversations
        .into_iter()
        .filter_map(|conversation| {
          let other_id = if conversation.participant_a_id == my_user_id {
            conversation.participant_b_id
          } else {
            conversation.participant_a_id
          };
          let other_user = others.get(&other_id)?.clone();
          let id = conversation.id;
          Some(ConversationView {
            conversation,
            other_user,
            last_message: last_messages.get(&id).cloned(),
            unread_count: unread_counts.get(&id).copied().unwrap_or(0),
          })
        })
        .collect(),
    )
  }
}
