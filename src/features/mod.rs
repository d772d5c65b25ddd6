//! Feature modules. Auth is the only feature in this demo.

pub mod auth;
