//! Unified completion-provider interface types and traits.
//!
//! This crate provides the shared types used by the companion engines:
//! `Message`, `ChatConfig`, `Response`, the `Provider` trait, and
//! `HttpProvider` for OpenAI-compatible HTTP transport. The `testing`
//! feature adds scripted providers for downstream crate tests.

pub use config::{ChatConfig, DEFAULT_MODEL, ProviderConfig};
pub use error::{Error, Result};
#[cfg(feature = "http")]
pub use http::HttpProvider;
pub use message::{Message, Role};
pub use noop::NoopProvider;
#[cfg(feature = "http")]
pub use openai::{OpenAI, endpoint};
pub use provider::Provider;
pub use request::Request;
#[cfg(feature = "http")]
pub use reqwest::{self, Client};
pub use response::{Choice, FinishReason, Response, ResponseMessage, Usage};
#[cfg(feature = "testing")]
pub use testing::{FailProvider, StaticProvider};

mod config;
mod error;
#[cfg(feature = "http")]
mod http;
mod message;
mod noop;
#[cfg(feature = "http")]
mod openai;
mod provider;
mod request;
mod response;
#[cfg(feature = "testing")]
mod testing;
