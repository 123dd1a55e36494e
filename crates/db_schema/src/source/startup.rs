use crate::{
  newtypes::{StartupId, UserId},
  schema::startup,
};
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = startup)]
#[diesel(check_for_backend(diesel::pg::Pg))]
/// A startup profile owned by a founder.
pub struct Startup {
  pub id: StartupId,
  pub owner_id: UserId,
  pub name: String,
  pub pitch: Option<String>,
  /// Funding stage, free-form ("pre-seed", "seed", "series-a", ...).
  pub stage: Option<String>,
  pub website: Option<String>,
  pub published: DateTime<Utc>,
  pub updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = startup)]
pub struct StartupInsertForm {
  pub owner_id: UserId,
  pub name: String,
  pub pitch: Option<String>,
  pub stage: Option<String>,
  pub website: Option<String>,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = startup)]
pub struct StartupUpdateForm {
  pub name: Option<String>,
  pub pitch: Option<Option<String>>,
  pub stage: Option<Option<String>>,
  pub website: Option<Option<String>>,
  pub updated: Option<Option<DateTime<Utc>>>,
}
