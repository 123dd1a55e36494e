use crate::{
  newtypes::{CommunityId, UserId},
  schema::{community, community_member},
  source::community::{
    Community,
    CommunityInsertForm,
    CommunityMember,
    CommunityMemberForm,
    CommunityUpdateForm,
  },
  traits::{Crud, Joinable},
  utils::{get_conn, limit_and_offset, DbPool},
};
use diesel::{dsl::insert_into, result::Error, ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::RunQueryDsl;

#[async_trait::async_trait]
impl Crud for Community {
  type InsertForm = CommunityInsertForm;
  type UpdateForm = CommunityUpdateForm;
  type IdType = CommunityId;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn read(pool: &mut DbPool<'_>, community_id: CommunityId) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .find(community_id)
      .first::<Self>(conn)
      .await
  }

  async fn update(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
    form: &Self::UpdateForm,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::update(community::table.find(community_id))
      .set(form)
      .get_result::<Self>(conn)
      .await
  }
}

impl Community {
  pub async fn find_by_name(pool: &mut DbPool<'_>, name: &str) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    community::table
      .filter(community::name.eq(name))
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    let (limit, offset) = limit_and_offset(page, limit)?;
    community::table
      .order_by(community::published.desc())
      .limit(limit)
      .offset(offset)
      .load::<Self>(conn)
      .await
  }
}

#[async_trait::async_trait]
impl Joinable for CommunityMember {
  type Form = CommunityMemberForm;

  async fn join(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    insert_into(community_member::table)
      .values(form)
      .get_result::<Self>(conn)
      .await
  }

  async fn leave(pool: &mut DbPool<'_>, form: &Self::Form) -> Result<usize, Error> {
    let conn = &mut get_conn(pool).await?;
    diesel::delete(
      community_member::table
        .filter(community_member::community_id.eq(form.community_id))
        .filter(community_member::user_id.eq(form.user_id)),
    )
    .execute(conn)
    .await
  }
}

impl CommunityMember {
  pub async fn read_for_user(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
    user_id: UserId,
  ) -> Result<Option<Self>, Error> {
    let conn = &mut get_conn(pool).await?;
    community_member::table
      .filter(community_member::community_id.eq(community_id))
      .filter(community_member::user_id.eq(user_id))
      .first::<Self>(conn)
      .await
      .optional()
  }

  pub async fn member_count(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
  ) -> Result<i64, Error> {
    let conn = &mut get_conn(pool).await?;
    community_member::table
      .filter(community_member::community_id.eq(community_id))
      .count()
      .get_result::<i64>(conn)
      .await
  }
}
