use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use startlabx_db_schema::source::{
  community::Community,
  conversation::{Conversation, Message},
  post::Post,
  user::User,
};

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A post with its creator and the counts the feed renders.
pub struct PostView {
  pub post: Post,
  pub creator: User,
  pub like_count: i64,
  pub comment_count: i64,
  /// Whether the requesting user liked this post. False for anonymous reads.
  pub my_like: bool,
  pub my_saved: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityView {
  pub community: Community,
  pub member_count: i64,
  pub joined: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One inbox row: the thread, who it's with, and what's new.
pub struct ConversationView {
  pub conversation: Conversation,
  pub other_user: User,
  pub last_message: Option<Message>,
  pub unread_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The requesting user, decoded from their auth token by the session
/// middleware and pulled out of request extensions by handlers.
pub struct UserView {
  pub user: User,
}
