//! Typed results produced by the XML response handlers.

pub mod acl;
pub mod config;
pub mod list;
pub mod multipart;
pub mod object;
