// Fetcher module: remote statistics API collaborator.

pub mod client;
pub mod traits;

pub use client::BcraClient;
pub use traits::SeriesFetcher;
