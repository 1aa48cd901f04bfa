//! Minimal client for the [football-data.org](https://www.football-data.org) v4 API.
//!
//! Only the endpoints needed to sync competition, season and team data are covered.
//! Requests are authenticated with the `X-Auth-Token` header, carry an explicit timeout
//! and are never retried; callers own any retry policy.
//!
//! ```no_run
//! # async fn example() -> Result<(), football_data::Error> {
//! let client = football_data::Client::builder()
//!     .api_token("token")
//!     .build()?;
//!
//! let payload = client.competitions().get_teams("PL", 2025).await?;
//! println!("{} teams", payload.teams.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;
