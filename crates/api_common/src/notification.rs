use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::source::notification::Notification;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListNotifications {
  pub unread_only: Option<bool>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListNotificationsResponse {
  pub notifications: Vec<Notification>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UnreadCountResponse {
  pub count: i64,
}
