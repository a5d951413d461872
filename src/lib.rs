//! Australian Business Register (ABR) lookup client
//!
//! - [`AbnClient`] resolves an ABN, an ACN or a business name to registry records
//!   through the ABR JSON service, given an authentication GUID.
//! - [`validate`] checks an ABN against the public check-digit scheme, offline.
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use abn_lookup::AbnClient;
//!
//! let client = AbnClient::new("your-guid")?;
//! let lookup = client.abn_search("51824753556").await?;
//! println!("{} ({})", lookup.data.entity.name, lookup.data.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod messages;
pub mod models;
pub mod normalize;
pub mod transport;
pub mod validation;

pub use client::{AbnClient, Lookup, DEFAULT_MAX_RESULTS};
pub use config::AbnConfig;
pub use error::{AbnError, ConfigError, ResponseError, Result, TransportError};
pub use messages::{MessageKey, MessageOverrides, Messages};
pub use models::{Address, BusinessRecord, Entity, EntityType, NameSearchResult};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use validation::{is_valid, validate, ValidationFailure};
