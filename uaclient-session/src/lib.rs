//! Part of uaclient, an OPC UA client library.
//!
//! This library implements the OPC UA Session Service Set on top of a
//! [RequestChannel](uaclient_channel::RequestChannel).
//!
//! The [service_set] functions perform one exchange each and leave the session lifecycle to the
//! caller. [Session] wraps them in a handle that enforces the lifecycle and fills in request
//! headers.

mod config;
mod error;
mod session;
pub mod service_set;

pub use config::*;
pub use error::ServiceError;
pub use service_set::{activate_session, close_session, create_session};
pub use session::{Session, SessionState};
