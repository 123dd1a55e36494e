use crate::{
  enums::CommunityRole,
  newtypes::{CommunityId, UserId},
  schema::{community, community_member},
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A community.
pub struct Community {
  pub id: CommunityId,
  /// The unique name, used in urls.
  pub name: String,
  /// A longer title that can contain other characters and doesn't have to
  /// be unique.
  pub title: String,
  pub description: Option<String>,
  pub creator_id: UserId,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = community)]
pub struct CommunityInsertForm {
  pub name: String,
  pub title: String,
  pub description: Option<String>,
  pub creator_id: UserId,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = community)]
pub struct CommunityUpdateForm {
  pub title: Option<String>,
  pub description: Option<Option<String>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = community_member)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// One membership row per (user, community) pair. The creator's row carries
/// the owner role and can never be deleted through the join toggle.
pub struct CommunityMember {
  pub id: i32,
  pub community_id: CommunityId,
  pub user_id: UserId,
  pub role: CommunityRole,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = community_member)]
pub struct CommunityMemberForm {
  pub community_id: CommunityId,
  pub user_id: UserId,
  pub role: CommunityRole,
}
