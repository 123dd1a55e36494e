use crate::{
  newtypes::{ConversationId, UserId},
  schema::{conversation, message},
  source::conversation::{Conversation, ConversationInsertForm, Message, MessageInsertForm},
  utils::{get_conn, DbPool},
};
use chrono::Utc;
use diesel::{
  dsl::insert_into,
  result::Error,
  BoolExpressionMethods,
  ExpressionMethods,
  OptionalExtension,
  PgSortExpressionMethods,
  QueryDsl,
};
use diesel_async::RunQueryDsl;

impl Conversation {
  /// Puts a pair of user ids into storage order, smaller id first.
  pub fn ordered_pair(a: UserId, b: UserId) -> (UserId, UserId) {
    if a.0 <= b.0 {
      (a, b)
    } else {
      (b, a)
    }
  }

  /// Finds the thread between two users, creating it on first contact.
  pub async fn read_or_create(
    pool: &mut DbPool<'_>,
    user_a: UserId,
    user_b: UserId,
  ) -> Result<Self, Error> {
    let (first, second) = Self::ordered_pair(user_a, user_b);
    let conn = &mut get_conn(pool).await?;
    let existing = conversation::table
      .filter(conversation::participant_a_id.eq(first))
      .filter(conversation::participant_b_id.eq(second))
      .first::<Self>(conn)
      .await
      .optional()?;
    match existing {
      Some(conversation) => Ok(conversation),
      None => {
        let form = ConversationInsertForm {
          participant_a_id: first,
          participant_b_id: second,
        };
        insert_into(conversation::table)
          .values(form)
          .get_result::<Self>(conn)
          .await
      }
    }
  }

  pub async fn read(
    pool: &mut DbPool<'_>,
    conversation_id: ConversationId,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    conversation::table
      .find(conversation_id)
      .first::<Self>(conn)
      .await
  }

  /// Most recently active first.
  pub async fn list_for_user(pool: &mut DbPool<'_>, user_id: UserId) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    conversation::table
      .filter(
        conversation::participant_a_id
          .eq(user_id)
          .or(conversation::participant_b_id.eq(user_id)),
      )
      .order_by(conversation::updated.desc().nulls_last())
      .then_order_by(conversation::published.desc())
      .load::<Self>(conn)
      .await
  }

  pub fn has_participant(&self, user_id: UserId) -> bool {
    self.participant_a_id == user_id || self.participant_b_id == user_id
  }
}

impl Message {
  pub async fn create(pool: &mut DbPool<'_>, form: &MessageInsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let message = insert_into(message::table)
      .values(form)
      .get_result::<Self>(conn)
      .await?;
    // Bump the thread so it sorts to the top of the inbox.
    diesel::update(conversation::table.find(form.conversation_id))
      .set(conversation::updated.eq(Some(Utc::now())))
      .execute(conn)
      .await?;
    Ok(message)
  }

  pub async fn list_for_conversation(
    pool: &mut DbPool<'_>,
    conversation_id: ConversationId,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    message::table
      .filter(message::conversation_id.eq(conversation_id))
      .order_by(message::published.asc())
      .load::<Self>(conn)
      .await
  }

  /// Marks everything the other side sent as read.
  pub async fn mark_read(
    pool: &mut DbPool<'_>,
    conversation_id: ConversationId,
    reader_id: UserId,
  ) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      message::table
        .filter(message::conversation_id.eq(conversation_id))
        .filter(message::sender_id.ne(reader_id))
        .filter(message::read.eq(false)),
    )
    .set(message::read.eq(true))
    .execute(conn)
    .await
  }
}

#[cfg(test)]
mod tests {
  use super::Conversation;
  use crate::newtypes::UserId;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_ordered_pair() {
    assert_eq!(
      (UserId(1), UserId(2)),
      Conversation::ordered_pair(UserId(2), UserId(1))
    );
    assert_eq!(
      (UserId(1), UserId(2)),
      Conversation::ordered_pair(UserId(1), UserId(2))
    );
    assert_eq!(
      (UserId(5), UserId(5)),
      Conversation::ordered_pair(UserId(5), UserId(5))
    );
  }
}
