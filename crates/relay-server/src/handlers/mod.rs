//! HTTP route handlers for the relay.

pub mod users;
