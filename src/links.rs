//
//  bitbucket-repos
//  links.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HATEOAS link extraction from repository response bodies.
//!
//! Bitbucket Cloud responses carry pre-built URLs to related resources under
//! `links`, and forked repositories embed their upstream under `parent`. The
//! accessors here are pure lookups over an already-fetched
//! [`serde_json::Value`] body; dereferencing an extracted URL is delegated
//! back to the transport (see [`crate::Repositories::forks`]).

use serde_json::Value;

use crate::error::Error;

/// Returns true iff the repository body carries a truthy `parent` field.
///
/// A repository has a parent exactly when it is a fork. Callers are expected
/// to check this before [`extract_parent_link`]; calling that on a fork-less
/// body is a caller error and yields [`Error::MissingLink`].
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::repository_has_parent;
/// use serde_json::json;
///
/// assert!(repository_has_parent(&json!({"parent": {"slug": "upstream"}})));
/// assert!(!repository_has_parent(&json!({})));
/// assert!(!repository_has_parent(&json!({"parent": null})));
/// ```
pub fn repository_has_parent(repo: &Value) -> bool {
    repo.get("parent").is_some_and(is_truthy)
}

/// Extracts the pre-built forks URL from a repository body.
///
/// # Returns
///
/// The URL at `links.forks.href`, or [`Error::MissingLink`] when the body has
/// no such link.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::extract_forks_link;
/// use serde_json::json;
///
/// let repo = json!({"links": {"forks": {"href": "https://example.test/forks"}}});
/// assert_eq!(extract_forks_link(&repo).unwrap(), "https://example.test/forks");
/// ```
pub fn extract_forks_link(repo: &Value) -> Result<&str, Error> {
    repo.pointer("/links/forks/href")
        .and_then(Value::as_str)
        .ok_or(Error::MissingLink("links.forks.href"))
}

/// Extracts the pre-built URL of a fork's upstream repository.
///
/// # Returns
///
/// The URL at `parent.links.self.href`, or [`Error::MissingLink`] when the
/// body has no such link.
pub fn extract_parent_link(repo: &Value) -> Result<&str, Error> {
    repo.pointer("/parent/links/self/href")
        .and_then(Value::as_str)
        .ok_or(Error::MissingLink("parent.links.self.href"))
}

// JSON equivalent of the loose truthiness the upstream payload contract was
// written against: null, false, 0, and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parent_presence_is_detected() {
        assert!(repository_has_parent(&json!({"parent": {"slug": "up"}})));
        assert!(!repository_has_parent(&json!({})));
        assert!(!repository_has_parent(&json!({"parent": null})));
        assert!(!repository_has_parent(&json!({"parent": false})));
    }

    #[test]
    fn forks_link_is_extracted() {
        let repo = json!({"links": {"forks": {"href": "X"}}});
        assert_eq!(extract_forks_link(&repo).unwrap(), "X");
    }

    #[test]
    fn missing_forks_link_is_an_error() {
        let err = extract_forks_link(&json!({})).unwrap_err();
        assert!(matches!(err, Error::MissingLink("links.forks.href")));

        // A links object without the forks entry is just as missing.
        let err = extract_forks_link(&json!({"links": {"self": {"href": "X"}}})).unwrap_err();
        assert!(matches!(err, Error::MissingLink(_)));
    }

    #[test]
    fn parent_link_is_extracted() {
        let repo = json!({"parent": {"links": {"self": {"href": "Y"}}}});
        assert_eq!(extract_parent_link(&repo).unwrap(), "Y");
    }

    #[test]
    fn parent_link_on_non_fork_is_an_error() {
        let err = extract_parent_link(&json!({})).unwrap_err();
        assert!(matches!(err, Error::MissingLink("parent.links.self.href")));
    }

    #[test]
    fn non_string_href_is_treated_as_missing() {
        let repo = json!({"links": {"forks": {"href": 42}}});
        assert!(extract_forks_link(&repo).is_err());
    }
}
