use crate::{
  newtypes::{PostId, StartupId, UserId},
  schema::{post, post_like, post_saved},
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A feed post.
pub struct Post {
  pub id: PostId,
  pub creator_id: UserId,
  /// Optionally attached to one of the creator's startups.
  pub startup_id: Option<StartupId>,
  pub content: String,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub creator_id: UserId,
  pub startup_id: Option<StartupId>,
  pub content: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub content: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_like)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Toggle association marking that a user liked a post.
pub struct PostLike {
  pub id: i32,
  pub post_id: PostId,
  pub user_id: UserId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post_like)]
pub struct PostLikeForm {
  pub post_id: PostId,
  pub user_id: UserId,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post_saved)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// Toggle association marking that a user saved a post for later.
pub struct PostSaved {
  pub id: i32,
  pub post_id: PostId,
  pub user_id: UserId,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post_saved)]
pub struct PostSavedForm {
  pub post_id: PostId,
  pub user_id: UserId,
}
