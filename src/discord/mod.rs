//! Discord reply documents and the poll's static content

pub mod form;
pub mod response_builder;

pub use response_builder::{ReplyDocument, build_pong, build_poll_reply};
