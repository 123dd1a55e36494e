pub mod ai;
pub mod claims;
pub mod comment;
pub mod community;
pub mod context;
pub mod message;
pub mod notification;
pub mod opportunity;
pub mod plans;
pub mod post;
pub mod request;
pub mod startup;
pub mod subscription;
pub mod user;
pub mod utils;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SuccessResponse {
  pub success: bool,
}

impl Default for SuccessResponse {
  fn default() -> Self {
    SuccessResponse { success: true }
  }
}
