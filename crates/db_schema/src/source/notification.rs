use crate::{
  enums::NotificationKind,
  newtypes::{NotificationId, UserId},
  schema::notification,
};
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = notification)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Notification {
  pub id: NotificationId,
  pub recipient_id: UserId,
  pub kind: NotificationKind,
  pub content: String,
  /// Relative url of the thing the notification is about.
  pub link: Option<String>,
  pub read: bool,
  pub published: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notification)]
pub struct NotificationInsertForm {
  pub recipient_id: UserId,
  pub kind: NotificationKind,
  pub content: String,
  pub link: Option<String>,
}
