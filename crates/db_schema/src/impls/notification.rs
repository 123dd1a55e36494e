use crate::{
  newtypes::UserId,
  schema::notification,
  source::notification::{Notification, NotificationInsertForm},
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl Notification {
  pub async fn create(
    pool: &mut DbPool<'_>,
    form: &NotificationInsertForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(notification::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  pub async fn list_for_user(
    pool: &mut DbPool<'_>,
    recipient_id: UserId,
    unread_only: bool,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    let mut query = notification::table
      .filter(notification::recipient_id.eq(recipient_id))
      .into_boxed();
    if unread_only {
      query = query.filter(notification::read.eq(false));
    }
    query
      .order_by(notification::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }

  pub async fn unread_count(pool: &mut DbPool<'_>, recipient_id: UserId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    notification::table
      .filter(notification::recipient_id.eq(recipient_id))
      .filter(notification::read.eq(false))
      .count()
      .get_result::<i64>(conn)
      .await
  }

  pub async fn mark_all_read(pool: &mut DbPool<'_>, recipient_id: UserId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(
      notification::table
        .filter(notification::recipient_id.eq(recipient_id))
        .filter(notification::read.eq(false)),
    )
    .set(notification::read.eq(true))
    .execute(conn)
    .await
  }
}
