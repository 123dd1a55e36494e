use crate::structs::CommunityView;
use diesel::{dsl::count_star, result::Error, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use startlabx_db_schema::{
  newtypes::{CommunityId, UserId},
  schema::{community, community_member},
  source::community::Community,
  utils::{get_conn, limit_and_offset, DbPool},
};
use std::collections::{HashMap, HashSet};

impl CommunityView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    community_id: CommunityId,
    my_user_id: Option<UserId>,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let community = community::table
      .find(community_id)
      .select(Community::as_select())
      .first::<Community>(conn)
      .await?;
    let mut views = assemble(pool, vec![community], my_user_id).await?;
    views.pop().ok_or(Error::NotFound)
  }

  pub async fn list(
    pool: &mut DbPool<'_>,
    my_user_id: Option<UserId>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let (limit, offset) = limit_and_offset(page, limit)?;
    let conn = &mut get_conn(pool).await?;
    let communities = community::table
      .order_by(community::published.desc())
      .limit(limit)
      .offset(offset)
      .select(Community::as_select())
      .load::<Community>(conn)
      .await?;
    assemble(pool, communities, my_user_id).await
  }
}

async fn assemble(
  pool: &mut DbPool<'_>,
  communities: Vec<Community>,
  my_user_id: Option<UserId>,
) -> Result<Vec<CommunityView>, Error> {
  if communities.is_empty() {
    return Ok(Vec::new());
  }
  let ids: Vec<CommunityId> = communities.iter().map(|c| c.id).collect();
  let conn = &mut get_conn(pool).await?;

  let member_counts: HashMap<CommunityId, i64> = community_member::table
    .filter(community_member::community_id.eq_any(&ids))
    .group_by(community_member::community_id)
    .select((community_member::community_id, count_star()))
    .load::<(CommunityId, i64)>(conn)
    .await?
    .into_iter()
    .collect();

  let joined: HashSet<CommunityId> = match my_user_id {
    Some(user_id) => {
      community_member::table
        .filter(community_member::community_id.eq_any(&ids))
        .filter(community_member::user_id.eq(user_id))
        .select(community_member::community_id)
        .load::<CommunityId>(conn)
        .await?
        .into_iter()
        .collect()
    }
    None => HashSet::new(),
  };

  Ok(
    communities
      .into_iter()
      .map(|community| {
        let id = community.id;
        CommunityView {
          community,
          member_count: member_counts.get(&id).copied().unwrap_or(0),
          joined: joined.contains(&id),
        }
      })
      .collect(),
  )
}
