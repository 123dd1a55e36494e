pub mod ai_generation;
pub mod comment;
pub mod community;
pub mod conversation;
pub mod notification;
pub mod opportunity;
pub mod password_reset_request;
pub mod post;
pub mod startup;
pub mod subscription;
pub mod user;
