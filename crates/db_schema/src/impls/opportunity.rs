use crate::{
  newtypes::OpportunityId,
  schema::opportunity,
  source::opportunity::{Opportunity, OpportunityInsertForm, OpportunityUpdateForm},
  traits::Crud,
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Opportunity {
  type InsertForm = OpportunityInsertForm;
  type UpdateForm = OpportunityUpdateForm;
  type IdType = OpportunityId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(opportunity::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, opportunity_id: OpportunityId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    opportunity::table
      .find(opportunity_id)
      .first::<Self>(conn)
      .await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    opportunity_id: OpportunityId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(opportunity::table.find(opportunity_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Opportunity {
  /// Newest first. Closed roles are filtered out unless asked for.
  pub async fn list(
    pool: &mut DbPool<'_>,
    include_closed: bool,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    let mut query = opportunity::table.into_boxed();
    if !include_closed {
      query = query.filter(opportunity::open.eq(true));
    }
    query
      .order_by(opportunity::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }
}
