//! Client for the Agri Integrated Business System (AIBS) REST API
//!
//! AIBS is a marketplace where farmers list crops, vendors sell farm supplies
//! and buy listings, and administrators manage accounts. This crate exposes
//! one async function per backend endpoint.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **api**: [`ApiClient`] with one method per endpoint (auth, listings,
//!   supplies, transactions, admin)
//! - **models**: Request descriptor, response value, and typed payloads
//! - **executor**: Issues a single request through reqwest and decodes JSON
//! - **session**: Explicit cookie credentials passed to every call
//! - **query**: Flat key-value query string serialization
//! - **config**: Base URL, API prefix, and default headers
//!
//! # Request flow
//!
//! Every call follows the same shape:
//! 1. Build the URL below the base path (`/api`), with a query string for list calls
//! 2. Serialize the JSON body and set `Content-Type: application/json` if there is one
//! 3. Attach the session cookies and send exactly one request
//! 4. Store any cookies the server sets back into the session
//! 5. Parse the body as JSON and return it, whatever the status code
//!
//! Only a transport failure or a non-JSON body produces an error. HTTP error
//! statuses come back as normal [`ApiResponse`] values; use
//! [`ApiResponse::into_outcome`] or the typed companion methods to tell
//! success from failure.
//!
//! # Usage
//!
//! ```no_run
//! use aibs_client::{ApiClient, ClientConfig, Session};
//! use aibs_client::models::{NewListing, UserType};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:5000"))?;
//! let session = Session::new();
//!
//! let login = client
//!     .login_typed(&session, "asha@example.com", "secret", UserType::Farmer)
//!     .await?
//!     .into_result()?;
//! println!("Logged in as {}", login.user.name);
//!
//! let listing = NewListing {
//!     crop: "Wheat".to_string(),
//!     quantity_kg: 120.0,
//!     price_per_kg: 24.5,
//! };
//! let created = client.create_listing(&session, &listing).await?;
//! println!("{}", created.body);
//!
//! client.logout(&session).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod executor;
pub mod models;
pub mod query;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use executor::ClientError;
pub use models::{ApiFailure, ApiOutcome, ApiRequest, ApiResponse, HttpMethod};
pub use query::QueryParams;
pub use session::Session;
