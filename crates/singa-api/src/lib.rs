//! # singa-api: Order Data Provider
//!
//! HTTP access to the sales-order backend. Everything that leaves this
//! crate is a `singa_core` type; wire records and their quirks stay inside.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ApiConfig::load()  ──►  ApiClient::new()                               │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │   SalesOrderRepository           DeliveryScheduleRepository             │
//! │              │                               │                          │
//! │              ▼                               ▼                          │
//! │     wire::SalesOrderRecord       wire::DeliveryScheduleRecord           │
//! │              │                               │                          │
//! │              └────────► normalize ◄──────────┘                          │
//! │                            │                                            │
//! │                            ▼                                            │
//! │               singa_core::Order / DeliverySchedule                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven client configuration
//! - [`client`] - reqwest wrapper (status and decode errors)
//! - [`wire`] - Backend JSON records and payloads
//! - [`normalize`] - Record → domain conversion
//! - [`repository`] - Sales order and delivery schedule repositories
//! - [`error`] - `ApiError`

pub mod client;
pub mod config;
pub mod error;
pub mod normalize;
pub mod repository;
pub mod wire;

pub use client::ApiClient;
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use repository::{DeliveryScheduleRepository, SalesOrderRepository};

/// Both repositories sharing one client.
#[derive(Debug, Clone)]
pub struct Backend {
    pub orders: SalesOrderRepository,
    pub schedules: DeliveryScheduleRepository,
}

impl Backend {
    /// Connects both repositories using `config`.
    pub fn connect(config: &ApiConfig) -> ApiResult<Self> {
        let client = ApiClient::new(config)?;
        Ok(Backend {
            orders: SalesOrderRepository::new(client.clone()),
            schedules: DeliveryScheduleRepository::new(client),
        })
    }
}
