//
//  bitbucket-repos
//  states.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request state tokens and filter normalization.
//!
//! # Pull Request Lifecycle
//!
//! 1. **OPEN** - Initial state when created
//! 2. **MERGED** - Successfully merged into the destination branch
//! 3. **DECLINED** - Rejected and closed without merging
//! 4. **SUPERSEDED** - Replaced by another pull request
//!
//! # Filter Normalization
//!
//! Pull request queries accept an optional state filter that callers may give
//! as a single token or as an ordered sequence. [`normalize`] resolves it to
//! the sequence actually serialized onto the wire:
//!
//! - no filter defaults to `[OPEN]`
//! - a single token is wrapped into a one-element sequence
//! - a sequence containing **any** token outside the closed enumeration is
//!   discarded whole and replaced with `[OPEN]`
//! - otherwise the sequence passes through in caller order
//!
//! The whole-or-nothing fallback mirrors the remote API, which rejects unknown
//! state tokens outright: silently falling back to the single safe default
//! avoids a hard failure for a cosmetic filter mistake. The cost is that a
//! typo like `"MEGRED"` silently widens or narrows the result set. This is a
//! known sharp edge of the contract, preserved deliberately; callers who want
//! strict validation can parse tokens with `str::parse::<PullRequestState>()`
//! themselves before building a filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a pull request.
///
/// This is the closed enumeration of tokens the remote API accepts in the
/// `state` query parameter. Wire tokens are uppercase and matching is
/// case-sensitive, exactly as the API treats them.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::PullRequestState;
///
/// assert_eq!(PullRequestState::Merged.as_str(), "MERGED");
/// assert_eq!("OPEN".parse::<PullRequestState>(), Ok(PullRequestState::Open));
/// assert!("open".parse::<PullRequestState>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PullRequestState {
    /// The pull request is open for review.
    Open,
    /// The pull request was merged into its destination branch.
    Merged,
    /// The pull request was rejected and closed without merging.
    Declined,
    /// The pull request was replaced by another pull request.
    Superseded,
}

impl PullRequestState {
    /// Returns the wire token for this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
            Self::Declined => "DECLINED",
            Self::Superseded => "SUPERSEDED",
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is outside the closed state enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStateToken(pub String);

impl fmt::Display for InvalidStateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pull request state token: {:?}", self.0)
    }
}

impl std::error::Error for InvalidStateToken {}

impl FromStr for PullRequestState {
    type Err = InvalidStateToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "MERGED" => Ok(Self::Merged),
            "DECLINED" => Ok(Self::Declined),
            "SUPERSEDED" => Ok(Self::Superseded),
            other => Err(InvalidStateToken(other.to_string())),
        }
    }
}

/// A caller-supplied pull request state filter.
///
/// Callers may name a single state or an ordered sequence of states. The two
/// shapes are kept as a tagged variant at the boundary, then resolved to one
/// sequence type by [`normalize`]; no runtime type inspection happens past
/// that point.
///
/// Tokens are held as raw strings so that unknown tokens can flow into the
/// whole-or-nothing fallback instead of failing at construction time.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::{PullRequestState, StateFilter};
///
/// let single = StateFilter::from("MERGED");
/// let many = StateFilter::from(vec!["OPEN", "MERGED"]);
/// let typed = StateFilter::from(PullRequestState::Declined);
/// # let _ = (single, many, typed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateFilter {
    /// A single state token.
    Single(String),
    /// An ordered sequence of state tokens.
    Multiple(Vec<String>),
}

impl From<&str> for StateFilter {
    fn from(token: &str) -> Self {
        Self::Single(token.to_string())
    }
}

impl From<String> for StateFilter {
    fn from(token: String) -> Self {
        Self::Single(token)
    }
}

impl From<Vec<&str>> for StateFilter {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Multiple(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for StateFilter {
    fn from(tokens: Vec<String>) -> Self {
        Self::Multiple(tokens)
    }
}

impl From<PullRequestState> for StateFilter {
    fn from(state: PullRequestState) -> Self {
        Self::Single(state.as_str().to_string())
    }
}

impl From<Vec<PullRequestState>> for StateFilter {
    fn from(states: Vec<PullRequestState>) -> Self {
        Self::Multiple(states.iter().map(|s| s.as_str().to_string()).collect())
    }
}

/// Resolves an optional state filter to the sequence serialized on the wire.
///
/// # Parameters
///
/// * `filter` - The caller-supplied filter, if any.
///
/// # Returns
///
/// A non-empty `Vec<PullRequestState>` in caller order. Absent, empty, or
/// partially invalid filters all resolve to `[Open]`.
///
/// # Example
///
/// ```rust
/// use bitbucket_repos::states::normalize;
/// use bitbucket_repos::{PullRequestState, StateFilter};
///
/// assert_eq!(normalize(None), vec![PullRequestState::Open]);
///
/// let filter = StateFilter::from(vec!["MERGED", "BOGUS"]);
/// // One bad token discards the whole sequence, not just the bad element.
/// assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Open]);
/// ```
pub fn normalize(filter: Option<&StateFilter>) -> Vec<PullRequestState> {
    let tokens: &[String] = match filter {
        None => return vec![PullRequestState::Open],
        Some(StateFilter::Single(token)) => std::slice::from_ref(token),
        Some(StateFilter::Multiple(tokens)) => tokens,
    };

    if tokens.is_empty() {
        return vec![PullRequestState::Open];
    }

    let parsed: Result<Vec<_>, _> = tokens.iter().map(|t| t.parse::<PullRequestState>()).collect();
    match parsed {
        Ok(states) => states,
        // Whole-or-nothing: any invalid token falls back to the safe default.
        Err(InvalidStateToken(_)) => vec![PullRequestState::Open],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_filter_defaults_to_open() {
        assert_eq!(normalize(None), vec![PullRequestState::Open]);
    }

    #[test]
    fn single_token_wraps_into_sequence() {
        let filter = StateFilter::from("MERGED");
        assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Merged]);
    }

    #[test]
    fn any_invalid_token_discards_the_whole_sequence() {
        let filter = StateFilter::from(vec!["MERGED", "BOGUS"]);
        assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Open]);
    }

    #[test]
    fn valid_sequence_preserves_caller_order() {
        let filter = StateFilter::from(vec!["OPEN", "MERGED"]);
        assert_eq!(
            normalize(Some(&filter)),
            vec![PullRequestState::Open, PullRequestState::Merged]
        );

        let reversed = StateFilter::from(vec!["MERGED", "OPEN"]);
        assert_eq!(
            normalize(Some(&reversed)),
            vec![PullRequestState::Merged, PullRequestState::Open]
        );
    }

    #[test]
    fn tokens_are_case_sensitive() {
        let filter = StateFilter::from("merged");
        assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Open]);
    }

    #[test]
    fn empty_sequence_is_treated_as_absent() {
        let filter = StateFilter::Multiple(vec![]);
        assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Open]);
    }

    #[test]
    fn invalid_single_token_falls_back_to_open() {
        let filter = StateFilter::from("SUPERCEDED"); // common misspelling
        assert_eq!(normalize(Some(&filter)), vec![PullRequestState::Open]);
    }

    #[test]
    fn all_four_states_round_trip_through_from_str() {
        for token in ["OPEN", "MERGED", "DECLINED", "SUPERSEDED"] {
            let state: PullRequestState = token.parse().unwrap();
            assert_eq!(state.as_str(), token);
        }
    }
}
