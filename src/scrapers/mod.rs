//! Fetch collaborators for search results and article pages.
//!
//! Both submodules are thin wrappers over `reqwest` + `scraper`; all the
//! interesting decisions live in the classification modules they feed.
//!
//! - [`search`]: fetches a search-results page for one subject and extracts
//!   best-effort [`crate::models::RawArticle`] candidates
//! - [`article`]: fetches one article page and extracts its paragraph text,
//!   degrading to sentinel/error strings instead of failing
//!
//! Failed fetches never abort the run: a failed search skips one subject, a
//! failed article fetch fills one content cell with an error description.

pub mod article;
pub mod search;
