//! Endpoint groups for the Gong v2 API
//!
//! Each group holds a shared [`Transport`](crate::transport::Transport)
//! and maps one API area to thin typed methods: a fixed path, a fixed
//! response type, and a request record converted to params or body.

pub mod calls;
pub mod users;
