use crate::{
  newtypes::{CommentId, PostId, UserId},
  schema::comment,
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
  pub id: CommentId,
  pub creator_id: UserId,
  pub post_id: PostId,
  pub content: String,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub creator_id: UserId,
  pub post_id: PostId,
  pub content: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comment)]
pub struct CommentUpdateForm {
  pub content: Option<String>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
