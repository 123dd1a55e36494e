use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::newtypes::CommunityId;
use startlabx_db_views::structs::CommunityView;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateCommunity {
  /// Unique url-safe name.
  pub name: String,
  pub title: String,
  pub description: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
/// Fetch by id or by name, id wins when both are given.
pub struct GetCommunity {
  pub id: Option<CommunityId>,
  pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ListCommunities {
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommunityResponse {
  pub community_view: CommunityView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ListCommunitiesResponse {
  pub communities: Vec<CommunityView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// The server decides the direction: a member leaves, a non-member joins.
pub struct ToggleJoinCommunity {
  pub community_id: CommunityId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JoinCommunityResponse {
  /// State after the toggle.
  pub joined: bool,
  pub member_count: i64,
}
