//! Part of uaclient, an OPC UA client library.
//!
//! This library defines the request channel abstraction the OPC UA service sets are built on.
//! A channel performs one typed request/response exchange at a time from the caller's point of
//! view; framing, security, chunking and reconnection are the implementation's concern.
//!
//! # Feature Flags
//!
//! - `channel-transport`: Enables the channel based [RequestChannel] implementation. Disabled by default.
//!

mod traits;
mod types;

pub use traits::{DynRequestChannel, RequestChannel};
pub use types::*;

pub use tokio_util::sync::CancellationToken;

/// A basic [RequestChannel] implementation based on channels
///
/// Useful for writing tests where it is not appropriate to be running a real secure channel against a server
#[cfg(any(feature = "channel-transport", test))]
pub mod channel;
