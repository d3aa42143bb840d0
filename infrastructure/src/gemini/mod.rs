//! Gemini REST adapter
//!
//! Implements the [`AiGateway`](belajar_application::AiGateway) and
//! [`VideoGateway`](belajar_application::VideoGateway) ports.

pub mod client;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
pub mod sse;
