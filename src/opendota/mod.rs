pub mod client;
pub mod models;
pub mod source;

pub use client::OpenDotaClient;
pub use models::{ProMatch, TeamMatch, TeamProfile};
pub use source::MatchSource;

/// Number of entries kept from every list endpoint.
pub const FORM_WINDOW: usize = 5;
