//
//  bitbucket-repos
//  slug.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository name to URL slug derivation.
//!
//! When a repository is created through the REST API, Bitbucket assigns it a
//! URL-safe slug derived from its display name. The service's exact rules are
//! undocumented; [`derive_slug`] is a best-effort approximation of them, kept
//! here so the binding can predict the resource path of a repository it is
//! about to create. It is intentionally not a full reimplementation of the
//! remote slugification behavior.

/// Derives a URL-safe slug from a repository display name.
///
/// The derivation is deterministic and pure: the same name always yields the
/// same slug. Each maximal run of non-word characters (anything outside
/// `[A-Za-z0-9_]`, including whitespace, punctuation, symbols, and quote
/// characters) collapses to a single `-`, leading and trailing dashes are
/// stripped, and the result is lower-cased.
///
/// # Parameters
///
/// * `name` - The human-readable repository name.
///
/// # Returns
///
/// A `String` containing only `[a-z0-9_-]`, with no consecutive dashes and no
/// leading or trailing dash.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::derive_slug;
///
/// assert_eq!(derive_slug("My Repo's Name!!"), "my-repo-s-name");
/// assert_eq!(derive_slug("-leading"), "leading");
/// assert_eq!(derive_slug("trailing-"), "trailing");
/// assert_eq!(derive_slug("test_123"), "test_123");
/// ```
///
/// # Notes
///
/// - This is an approximation of the remote service's undocumented rules;
///   the slug Bitbucket actually assigns is authoritative.
/// - An empty result is not an error. A name with no word characters slugs to
///   the empty string, and the downstream creation call is left to report it.
/// - Slug collisions with existing repositories are likewise the remote API's
///   concern, not this function's.
pub fn derive_slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
