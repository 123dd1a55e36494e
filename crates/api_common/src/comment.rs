use serde::{Deserialize, Serialize};
use startlabx_db_schema::{newtypes::PostId, source::comment::Comment};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateComment {
  pub post_id: PostId,
  pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetComments {
  pub post_id: PostId,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CommentResponse {
  pub comment: Comment,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GetCommentsResponse {
  pub comments: Vec<Comment>,
}
