//! Typed client for the MongoDB Atlas administration REST API
//!
//! Covers projects (groups), clusters, and VPC peering containers. Requests
//! use digest authentication and JSON bodies; every operation is a single
//! HTTP round trip whose status code is checked against the value the API
//! documents for it.
//!
//! # Module Structure
//!
//! - [`client`] - Client handle holding endpoint, credentials, and group id
//! - [`http`] - Digest-authenticated transport helper
//! - [`error`] - Error taxonomy for transport, status, and decode failures
//! - [`projects`] - Project listing, lookup, and creation
//! - [`clusters`] - Cluster CRUD
//! - [`containers`] - VPC peering container CRUD
//!
//! # Example
//!
//! ```no_run
//! use atlas_client::AtlasClient;
//!
//! async fn example() -> atlas_client::Result<()> {
//!     let client = AtlasClient::new("https://cloud.mongodb.com", "user", "api-key")?
//!         .with_group("5356823b3794de37132bb7b");
//!     let clusters = client.list_clusters().await?;
//!     println!("{} clusters", clusters.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod clusters;
pub mod containers;
pub mod error;
pub mod http;
pub mod projects;

pub use client::AtlasClient;
pub use error::{Error, Result};
