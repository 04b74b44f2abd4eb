//
//  bitbucket-repos
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Crate-wide error type.
//!
//! All fallible operations in this crate return [`Error`]. The variants fall
//! into three groups:
//!
//! - Precondition failures raised by the binding itself, before any transport
//!   call: [`Error::InvalidArgument`] and [`Error::MissingLink`]. These are
//!   fatal to the current call and never retried internally.
//! - Remote failures surfaced by the default transport: [`Error::Api`] carries
//!   the HTTP status and the message extracted from the Bitbucket error body.
//! - Pass-through failures from the underlying HTTP machinery:
//!   [`Error::Network`] and [`Error::InvalidUrl`]. The binding propagates
//!   these unchanged, with no interpretation, wrapping, or retry.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all operations in this crate.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::{encode_field_selectors, Error};
///
/// match encode_field_selectors(&[]) {
///     Err(Error::InvalidArgument(msg)) => eprintln!("bad call: {msg}"),
///     other => panic!("expected InvalidArgument, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A required precondition on caller-supplied input failed.
    ///
    /// Raised synchronously before any transport call: empty repository name,
    /// privacy flag not supplied, empty field-selector list.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An expected nested link was absent from a response body.
    ///
    /// The payload names the JSON path that was looked up, for example
    /// `links.forks.href`.
    #[error("response body has no link at {0}")]
    MissingLink(&'static str),

    /// The remote API answered with a non-success status.
    ///
    /// The message is extracted from the Bitbucket Cloud error body where the
    /// body follows a known shape, otherwise it is the raw body text.
    #[error("API error ({status}): {message}")]
    Api {
        /// The HTTP status code of the response.
        status: StatusCode,
        /// Human-readable message from the error body.
        message: String,
    },

    /// A network-level failure inside the HTTP client.
    ///
    /// Connection failures, timeouts, TLS and DNS problems, and body decode
    /// failures all surface here, unchanged.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A pre-built link taken from a response body was not a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
