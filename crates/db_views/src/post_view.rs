use crate::structs::PostView;
use diesel::{dsl::count_star, result::Error, ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use startlabx_db_schema::{
  newtypes::{PostId, UserId},
  schema::{comment, post, post_like, post_saved, user_},
  source::{post::Post, user::User},
  utils::{get_conn, limit_and_offset, DbPool},
};
use std::collections::{HashMap, HashSet};

impl PostView {
  pub async fn read(
    pool: &mut DbPool<'_>,
    post_id: PostId,
    my_user_id: Option<UserId>,
  ) -> Result<Self, Error> {
    let conn = &mut get_conn(pool).await?;
    let (post, creator) = post::table
      .find(post_id)
      .inner_join(user_::table)
      .select((Post::as_select(), User::as_select()))
      .first::<(Post, User)>(conn)
      .await?;
    let mut views = assemble(pool, vec![(post, creator)], my_user_id).await?;
    views.pop().ok_or(Error::NotFound)
  }

  /// The feed. Newest first, optionally restricted to one creator.
  pub async fn list(
    pool: &mut DbPool<'_>,
    my_user_id: Option<UserId>,
    creator_id: Option<UserId>,
    page: Option<i64>,
    limit: Option<i64>,
  ) -> Result<Vec<Self>, Error> {
    let (limit, offset) = limit_and_offset(page, limit)?;
    let conn = &mut get_conn(pool).await?;
    let mut query = post::table.inner_join(user_::table).into_boxed();
    if let Some(creator_id) = creator_id {
      query = query.filter(post::creator_id.eq(creator_id));
    }
    let pairs = query
      .order_by(post::published.desc())
      .limit(limit)
      .offset(offset)
      .select((Post::as_select(), User::as_select()))
      .load::<(Post, User)>(conn)
      .await?;
    assemble(pool, pairs, my_user_id).await
  }
}

/// Fills in counts and per-user flags with batched queries over the page's
/// post ids instead of per-row subselects.
async fn assemble(
  pool: &mut DbPool<'_>,
  pairs: Vec<(Post, User)>,
  my_user_id: Option<UserId>,
) -> Result<Vec<PostView>, Error> {
  if pairs.is_empty() {
    return Ok(Vec::new());
  }
  let ids: Vec<PostId> = pairs.iter().map(|(p, _)| p.id).collect();
  let conn = &mut get_conn(pool).await?;

  let like_counts: HashMap<PostId, i64> = post_like::table
    .filter(post_like::post_id.eq_any(&ids))
    .group_by(post_like::post_id)
    .select((post_like::post_id, count_star()))
    .load::<(PostId, i64)>(conn)
    .await?
    .into_iter()
    .collect();

  let comment_counts: HashMap<PostId, i64> = comment::table
    .filter(comment::post_id.eq_any(&ids))
    .group_by(comment::post_id)
    .select((comment::post_id, count_star()))
    .load::<(PostId, i64)>(conn)
    .await?
    .into_iter()
    .collect();

  let (my_likes, my_saves): (HashSet<PostId>, HashSet<PostId>) = match my_user_id {
    Some(user_id) => {
      let likes = post_like::table
        .filter(post_like::post_id.eq_any(&ids))
        .filter(post_like::user_id.eq(user_id))
        .select(post_like::post_id)
        .load::<PostId>(conn)
        .await?
        .into_iter()
        .collect();
      let saves = post_saved::table
        .filter(post_saved::post_id.eq_any(&ids))
        .filter(post_saved::user_id.eq(user_id))
        .select(post_saved::post_id)
        .load::<PostId>(conn)
        .await?
        .into_iter()
        .collect();
      (likes, saves)
    }
    None => (HashSet::new(), HashSet::new()),
  };

  Ok(
    pairs
      .into_iter()
      .map(|(post, creator)| {
        let id = post.id;
        PostView {
          post,
          creator,
          like_count: like_counts.get(&id).copied().unwrap_or(0),
          comment_count: comment_counts.get(&id).copied().unwrap_or(0),
          my_like: my_likes.contains(&id),
          my_saved: my_saves.contains(&id),
        }
      })
      .collect(),
  )
}
