use crate::{
  newtypes::UserId,
  schema::ai_generation,
  source::ai_generation::{AiGeneration, AiGenerationInsertForm},
  utils::{get_conn, limit_and_offset, DbPool},
};
use chrono::{DateTime, Utc};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

impl AiGeneration {
  pub async fn create(
    pool: &mut DbPool<'_>,
    form: &AiGenerationInsertForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(ai_generation::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  /// How many generations a user has run since `since`. The quota check
  /// passes the start of the current calendar month.
  pub async fn count_for_user_since(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    since: DateTime<Utc>,
  ) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    ai_generation::table
      .filter(ai_generation::user_id.eq(user_id))
      .filter(ai_generation::published.ge(since))
      .count()
      .get_result::<i64>(conn)
      .await
  }

  pub async fn list_for_user(
    pool: &mut DbPool<'_>,
    user_id: UserId,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    ai_generation::table
      .filter(ai_generation::user_id.eq(user_id))
      .order_by(ai_generation::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }
}
