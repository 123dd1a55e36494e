pub mod comment;
pub mod community;
pub mod message;
pub mod opportunity;
pub mod post;
pub mod startup;
pub mod user;
