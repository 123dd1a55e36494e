use crate::{
  newtypes::{OpportunityId, StartupId, UserId},
  schema::opportunity,
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = opportunity)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// An open role posted by a founder, optionally tied to one of their
/// startups.
pub struct Opportunity {
  pub id: OpportunityId,
  pub creator_id: UserId,
  pub startup_id: Option<StartupId>,
  pub title: String,
  pub description: String,
  /// The role being hired for, eg "CTO" or "founding engineer".
  pub role_sought: String,
  pub open: bool,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = opportunity)]
pub struct OpportunityInsertForm {
  pub creator_id: UserId,
  pub startup_id: Option<StartupId>,
  pub title: String,
  pub description: String,
  pub role_sought: String,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = opportunity)]
pub struct OpportunityUpdateForm {
  pub title: Option<String>,
  pub description: Option<String>,
  pub role_sought: Option<String>,
  pub open: Option<bool>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
