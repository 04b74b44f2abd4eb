//
//  bitbucket-repos
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket Repositories Client
//!
//! A thin, stateless client-side binding over the Bitbucket Cloud REST API v2.0
//! "repositories" resource group.
//!
//! ## Overview
//!
//! This crate translates high-level intent ("get the open pull requests for
//! repository X") into fully-specified REST calls: it builds paths, query
//! parameters, and request bodies from caller-supplied identifiers, applies a
//! small set of default and validation rules, and delegates the actual HTTP
//! exchange to an injected [`Transport`] collaborator. Responses and transport
//! failures pass through to the caller unchanged.
//!
//! There is deliberately no retry logic, no caching, no pagination handling,
//! and no persistent state here. Every operation is a pure function of its
//! inputs up to the terminal transport call, so concurrent use from multiple
//! tasks needs no coordination.
//!
//! ## Module Structure
//!
//! - [`repositories`]: The resource binding itself ([`Repositories`])
//! - [`transport`]: The [`Transport`] trait and the default reqwest-backed
//!   [`HttpTransport`]
//! - [`slug`]: Repository name to URL slug derivation
//! - [`states`]: Pull request state filter normalization
//! - [`query`]: Query-parameter and path-segment encoding helpers
//! - [`links`]: HATEOAS link extraction from response bodies
//! - [`error`]: The crate-wide [`Error`] type
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitbucket_repos::{Credentials, HttpTransport, Repositories, StateFilter};
//!
//! # async fn example() -> Result<(), bitbucket_repos::Error> {
//! let transport = HttpTransport::cloud()?
//!     .with_credentials(Credentials::bearer("your-token"));
//! let repos = Repositories::new(transport);
//!
//! // Defaults to state=OPEN when no filter is given.
//! let prs = repos.pull_requests("my-workspace", "my-repo", None).await?;
//! println!("{prs:#}");
//!
//! // Explicit multi-state filter, order preserved on the wire.
//! let filter = StateFilter::from(vec!["OPEN", "MERGED"]);
//! let prs = repos.pull_requests("my-workspace", "my-repo", Some(filter)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Transport Injection
//!
//! The HTTP exchange is performed by whatever implements [`Transport`]. The
//! bundled [`HttpTransport`] targets `https://api.bitbucket.org/2.0` over
//! reqwest; tests inject recording fakes instead. The binding never retries,
//! interprets, or wraps a transport failure.

/// Crate-wide error type.
///
/// Distinguishes precondition failures ([`Error::InvalidArgument`]), absent
/// response links ([`Error::MissingLink`]), and pass-through transport
/// failures.
pub mod error;

/// HATEOAS link extraction from already-fetched response bodies.
///
/// Pure lookups over [`serde_json::Value`]; no I/O happens here.
pub mod links;

/// Query-parameter encoding helpers.
///
/// Field-selector encoding for the partial-response mechanism and
/// percent-encoding of caller-supplied path segments.
pub mod query;

/// The repositories resource binding.
///
/// [`Repositories`] composes a [`Transport`] at construction time and exposes
/// the resource group's operations: list, get, create, pull-request queries,
/// and fork/parent link dereferencing.
pub mod repositories;

/// Repository name to URL slug derivation.
///
/// A best-effort approximation of the slug the remote service assigns when a
/// repository is created under a display name.
pub mod slug;

/// Pull request state tokens and filter normalization.
///
/// The closed `OPEN`/`MERGED`/`DECLINED`/`SUPERSEDED` enumeration plus the
/// whole-or-nothing fallback to `OPEN` for invalid filters.
pub mod states;

/// The transport seam.
///
/// The [`Transport`] trait required by the binding and [`HttpTransport`], the
/// default reqwest-backed implementation for Bitbucket Cloud.
pub mod transport;

pub use error::Error;
pub use links::{extract_forks_link, extract_parent_link, repository_has_parent};
pub use query::encode_field_selectors;
pub use repositories::{Repositories, RepositoryDescriptor};
pub use slug::derive_slug;
pub use states::{PullRequestState, StateFilter};
pub use transport::{Credentials, HttpTransport, Transport};

/// Crate version, derived from Cargo.toml at compile time.
///
/// Used to build the default transport's User-Agent header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
