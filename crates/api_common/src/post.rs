use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::newtypes::{PostId, StartupId, UserId};
use startlabx_db_views::structs::PostView;

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePost {
  pub content: String,
  /// Attach the post to one of the caller's startups.
  pub startup_id: Option<StartupId>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPost {
  pub id: PostId,
}

#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct GetPosts {
  pub creator_id: Option<UserId>,
  pub page: Option<i64>,
  pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetPostsResponse {
  pub posts: Vec<PostView>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
/// Author or admin only.
pub struct DeletePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToggleLikePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LikePostResponse {
  /// State after the toggle.
  pub liked: bool,
  pub like_count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ToggleSavePost {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SavePostResponse {
  pub saved: bool,
}
