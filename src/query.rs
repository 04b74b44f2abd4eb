//
//  bitbucket-repos
//  query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-parameter and path-segment encoding helpers.
//!
//! Two small encoding concerns live here: the `fields` partial-response
//! syntax, and percent-encoding of caller-supplied identifiers before they are
//! placed into a path. The transport contract assumes path segments arrive
//! already encoded and does not re-encode them.

use crate::error::Error;

/// Encodes a list of field paths for the partial-response mechanism.
///
/// Each field path is prefixed with a literal `+` (which signals "include" to
/// the remote API) and the results are joined with `,` into a single query
/// parameter value.
///
/// # Parameters
///
/// * `fields` - A non-empty sequence of field-path strings such as
///   `"values.title"`.
///
/// # Returns
///
/// The encoded `fields` parameter value, or [`Error::InvalidArgument`] when
/// the sequence is empty.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::encode_field_selectors;
///
/// let value = encode_field_selectors(&["values.title", "values.id"]).unwrap();
/// assert_eq!(value, "+values.title,+values.id");
/// ```
///
/// # Notes
///
/// Field-path syntax is not validated here; unknown or malformed paths are the
/// remote API's concern.
pub fn encode_field_selectors(fields: &[&str]) -> Result<String, Error> {
    if fields.is_empty() {
        return Err(Error::InvalidArgument(
            "field selector list must not be empty".to_string(),
        ));
    }

    Ok(fields
        .iter()
        .map(|field| format!("+{field}"))
        .collect::<Vec<_>>()
        .join(","))
}

/// Percent-encodes a caller-supplied identifier for use as a path segment.
///
/// Workspace IDs and repository slugs are caller input and may contain
/// characters with URL syntax meaning (spaces, `/`, `%`). They are encoded
/// here, once, before path assembly.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::query::encode_segment;
///
/// assert_eq!(encode_segment("my-workspace"), "my-workspace");
/// assert_eq!(encode_segment("odd id"), "odd%20id");
/// assert_eq!(encode_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_selectors_are_prefixed_and_joined() {
        assert_eq!(
            encode_field_selectors(&["values.title", "values.id"]).unwrap(),
            "+values.title,+values.id"
        );
        assert_eq!(encode_field_selectors(&["size"]).unwrap(), "+size");
    }

    #[test]
    fn empty_field_list_is_rejected() {
        assert!(matches!(
            encode_field_selectors(&[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn malformed_field_paths_pass_through_unvalidated() {
        assert_eq!(encode_field_selectors(&["..", ""]).unwrap(), "+..,+");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(encode_segment("plain-slug"), "plain-slug");
        assert_eq!(encode_segment("with space"), "with%20space");
        assert_eq!(encode_segment("ws/../x"), "ws%2F..%2Fx");
    }
}
