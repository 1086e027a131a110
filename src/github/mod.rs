//! Search Engine: queries GitHub's `/search/users` endpoint
//!
//! [`GithubSearcher`] turns a [`SearchQuery`](crate::models::SearchQuery) into exactly one
//! GET request (or none, for empty input) and normalizes whatever comes back into a
//! [`SearchOutcome`](crate::models::SearchOutcome):
//!
//! - 2xx: the `items` array becomes `UserRecord`s in upstream order
//! - 403 with `X-RateLimit-Remaining: 0`: a rate-limit error carrying the wait time
//! - anything else, including timeouts and DNS failures: a context-prefixed upstream error
//!
//! The network sits behind the [`Transport`] trait so the policy can be exercised without
//! sockets; [`ReqwestTransport`] is the production implementation.

pub mod client;
pub mod response;
pub mod transport;

pub use client::{DEFAULT_API_URL, GithubSearcher, SearchConfig};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
