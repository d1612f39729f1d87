//! Error types for the Vyasa library.
//!
//! This crate provides the foundation error types used throughout the Vyasa ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vyasa_error::{VyasaResult, RemoteError, RemoteErrorKind};
//!
//! fn fetch_myth() -> VyasaResult<String> {
//!     Err(RemoteError::new(RemoteErrorKind::Transport(
//!         "connection refused".to_string(),
//!     )))?
//! }
//!
//! match fetch_myth() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod config;
mod remote;
mod validation;
mod error;

pub use audio::{AudioError, AudioErrorKind};
pub use config::ConfigError;
pub use remote::{RemoteError, RemoteErrorKind};
pub use validation::ValidationError;
pub use error::{VyasaError, VyasaErrorKind, VyasaResult};
