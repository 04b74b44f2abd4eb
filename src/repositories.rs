//
//  bitbucket-repos
//  repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The repositories resource binding.
//!
//! [`Repositories`] is the crate's entry point: it owns a [`Transport`],
//! translates caller intent into fully-specified REST calls against the
//! `/repositories` resource group, and returns the transport's result
//! unchanged. It holds no state beyond the transport and never mutates
//! anything, so a single instance can be shared across tasks freely.
//!
//! # Example
//!
//! ```rust,no_run
//! use bitbucket_repos::{HttpTransport, Repositories, RepositoryDescriptor};
//!
//! # async fn example() -> Result<(), bitbucket_repos::Error> {
//! let repos = Repositories::new(HttpTransport::cloud()?);
//!
//! // POST /repositories/acme/backend-service with {"name": ..., "is_private": true}
//! let created = repos
//!     .create(&RepositoryDescriptor::new("acme", "Backend Service", true))
//!     .await?;
//!
//! if bitbucket_repos::repository_has_parent(&created) {
//!     let upstream = repos.parent(&created).await?;
//!     println!("forked from {}", upstream["full_name"]);
//! }
//! # Ok(())
//! # }
//! ```

use serde_json::{json, Value};

use crate::error::Error;
use crate::links::{extract_forks_link, extract_parent_link};
use crate::query::{encode_field_selectors, encode_segment};
use crate::slug::derive_slug;
use crate::states::{normalize, StateFilter};
use crate::transport::Transport;

/// Caller input for creating a repository.
///
/// A transient value shape: constructed, validated, and discarded within one
/// [`Repositories::create`] call. The privacy flag is an `Option` because the
/// contract requires callers to take an explicit position on it; a descriptor
/// without one is rejected with [`Error::InvalidArgument`] rather than
/// defaulted.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::RepositoryDescriptor;
///
/// let repo = RepositoryDescriptor::new("acme", "Backend Service", true);
/// assert_eq!(repo.is_private, Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryDescriptor {
    /// The workspace the repository will be created in.
    pub workspace: String,

    /// Human-readable repository name; the slug is derived from it.
    pub name: String,

    /// Whether the repository is private. Must be explicitly set.
    pub is_private: Option<bool>,
}

impl RepositoryDescriptor {
    /// Creates a descriptor with the privacy flag explicitly set.
    pub fn new(workspace: impl Into<String>, name: impl Into<String>, is_private: bool) -> Self {
        Self {
            workspace: workspace.into(),
            name: name.into(),
            is_private: Some(is_private),
        }
    }
}

/// Query builder for the Bitbucket Cloud repositories resource group.
///
/// Generic over its [`Transport`], which is composed exactly once at
/// construction time. All methods build the request descriptor (path, query
/// parameters, body), hand it to the transport, and pass its result or
/// failure through untouched. Identifiers are percent-encoded here before
/// path placement; the transport does not re-encode.
pub struct Repositories<T> {
    /// The injected transport collaborator.
    transport: T,
}

impl<T: Transport> Repositories<T> {
    /// Creates a binding over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists the repositories of a workspace.
    ///
    /// `GET /repositories/{workspace}`
    pub async fn list(&self, workspace: &str) -> Result<Value, Error> {
        let path = format!("/repositories/{}", encode_segment(workspace));
        self.transport.get(&path, &[]).await
    }

    /// Fetches a single repository.
    ///
    /// `GET /repositories/{workspace}/{repo_slug}`
    pub async fn get(&self, workspace: &str, repo_slug: &str) -> Result<Value, Error> {
        let path = format!(
            "/repositories/{}/{}",
            encode_segment(workspace),
            encode_segment(repo_slug)
        );
        self.transport.get(&path, &[]).await
    }

    /// Creates a repository under a slug derived from its display name.
    ///
    /// `POST /repositories/{workspace}/{slug}` with body
    /// `{"name": ..., "is_private": ...}`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when the name is empty or the privacy flag
    /// was not explicitly set. Both preconditions are checked before slug
    /// derivation and before any transport call. An empty derived slug or a
    /// slug collision is not detected here; the remote API reports those.
    pub async fn create(&self, repo: &RepositoryDescriptor) -> Result<Value, Error> {
        if repo.name.is_empty() {
            return Err(Error::InvalidArgument(
                "repository name must not be empty".to_string(),
            ));
        }
        let Some(is_private) = repo.is_private else {
            return Err(Error::InvalidArgument(
                "is_private must be explicitly set".to_string(),
            ));
        };

        let slug = derive_slug(&repo.name);
        let path = format!(
            "/repositories/{}/{}",
            encode_segment(&repo.workspace),
            encode_segment(&slug)
        );
        // The remote API derives its own canonical slug from `name`; the one
        // derived here is used only for the resource path.
        let body = json!({
            "name": repo.name,
            "is_private": is_private,
        });

        self.transport.post(&path, &body).await
    }

    /// Lists a repository's pull requests, filtered by state.
    ///
    /// `GET /repositories/{workspace}/{repo_slug}/pullrequests` with one
    /// `state` query pair per normalized token, in caller order. An absent
    /// filter, or one containing any token outside the closed enumeration,
    /// queries `state=OPEN` (see [`crate::states::normalize`] for the
    /// whole-or-nothing fallback).
    pub async fn pull_requests(
        &self,
        workspace: &str,
        repo_slug: &str,
        filter: Option<StateFilter>,
    ) -> Result<Value, Error> {
        let params = state_params(filter.as_ref());
        let path = pull_requests_path(workspace, repo_slug);
        self.transport.get(&path, &params).await
    }

    /// Lists pull requests with a partial-response field selection.
    ///
    /// Same as [`Repositories::pull_requests`], plus a `fields` query
    /// parameter built by [`encode_field_selectors`].
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `fields` is empty, before any
    /// transport call.
    pub async fn pull_requests_with_fields(
        &self,
        workspace: &str,
        repo_slug: &str,
        filter: Option<StateFilter>,
        fields: &[&str],
    ) -> Result<Value, Error> {
        let selectors = encode_field_selectors(fields)?;

        let mut params = state_params(filter.as_ref());
        params.push(("fields".to_string(), selectors));

        let path = pull_requests_path(workspace, repo_slug);
        self.transport.get(&path, &params).await
    }

    /// Dereferences the forks link of an already-fetched repository body.
    ///
    /// # Errors
    ///
    /// [`Error::MissingLink`] when the body has no `links.forks.href`;
    /// transport failures pass through.
    pub async fn forks(&self, repo: &Value) -> Result<Value, Error> {
        let url = extract_forks_link(repo)?;
        self.transport.send_prebuilt(url).await
    }

    /// Dereferences the upstream (parent) link of a fork's repository body.
    ///
    /// Callers are expected to check [`crate::repository_has_parent`] first;
    /// on a fork-less body this fails with [`Error::MissingLink`].
    pub async fn parent(&self, repo: &Value) -> Result<Value, Error> {
        let url = extract_parent_link(repo)?;
        self.transport.send_prebuilt(url).await
    }
}

fn pull_requests_path(workspace: &str, repo_slug: &str) -> String {
    format!(
        "/repositories/{}/{}/pullrequests",
        encode_segment(workspace),
        encode_segment(repo_slug)
    )
}

fn state_params(filter: Option<&StateFilter>) -> Vec<(String, String)> {
    normalize(filter)
        .iter()
        .map(|state| ("state".to_string(), state.as_str().to_string()))
        .collect()
}
