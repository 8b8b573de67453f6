//! Webhook layer for triggering IFTTT Maker Webhooks events.
//!
//! This module provides types and traits for:
//! - Triggering events ([`IftttWebhook`])
//! - Resolving the webhook key ([`resolve_key`], [`Credential`])
//! - Building trigger URLs ([`UrlTemplate`])
//! - Encoding the optional values ([`Ingredients`], [`Ingredient`])
//! - Abstracting HTTP clients ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod http;
mod ifttt;
mod key;
mod payload;
mod template;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, IftttError, KeyError, TemplateError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use ifttt::{GMAIL_EVENT, IftttWebhook, KEY_TEST_EVENT, NOTIFICATION_EVENT};
pub use key::{Credential, resolve_key};
pub use payload::{Ingredient, Ingredients};
pub use template::{DEFAULT_URL_TEMPLATE, UrlTemplate};
