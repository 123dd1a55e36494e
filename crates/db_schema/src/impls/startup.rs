use crate::{
  newtypes::{StartupId, UserId},
  schema::startup,
  source::startup::{Startup, StartupInsertForm, StartupUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Startup {
  type InsertForm = StartupInsertForm;
  type UpdateForm = StartupUpdateForm;
  type IdType = StartupId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(startup::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, startup_id: StartupId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    startup::table.find(startup_id).first::<Self>(conn).await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    startup_id: StartupId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(startup::table.find(startup_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn delete(pool: &mut DbPool<'_>, startup_id: StartupId) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(startup::table.find(startup_id))
      .execute(conn)
      .await
  }
}

impl Startup {
  pub async fn list(
    pool: &mut DbPool<'_>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    startup::table
      .order_by(startup::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }

  /// Used to enforce the per-plan startup limit.
  pub async fn count_for_owner(pool: &mut DbPool<'_>, owner_id: UserId) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    startup::table
      .filter(startup::owner_id.eq(owner_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }
}
