//! # Repository Module
//!
//! Remote record access for Singa Sales.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CLI command                                                           │
//! │       │                                                                 │
//! │       │  orders.find_by_so_number("SO-001")                            │
//! │       ▼                                                                 │
//! │  SalesOrderRepository / DeliveryScheduleRepository                     │
//! │  ├── list()                                                            │
//! │  ├── find_*()                                                          │
//! │  ├── create() / update() / reschedule()                                │
//! │  └── delete()                                                          │
//! │       │                                                                 │
//! │       │  JSON over HTTP (wire records)                                 │
//! │       ▼                                                                 │
//! │  Backend  /salesorder   /jadwalkirim                                   │
//! │                                                                         │
//! │  Callers only ever see singa_core types.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SalesOrderRepository`] - Sales order listing, lookup and CRUD
//! - [`DeliveryScheduleRepository`] - Delivery schedule listing and CRUD

pub mod delivery_schedule;
pub mod sales_order;

pub use delivery_schedule::DeliveryScheduleRepository;
pub use sales_order::SalesOrderRepository;
