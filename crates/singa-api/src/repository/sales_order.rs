//! # Sales Order Repository
//!
//! `/salesorder` endpoints. The backend has no lookup by SO number, so
//! lookups list everything and search locally.

use reqwest::Method;
use tracing::{debug, info};

use singa_core::validation::{validate_order_submission, validate_record_id};
use singa_core::Order;

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::normalize::order_from_record;
use crate::wire::{SalesOrderListResponse, SalesOrderPayload};

const PATH: &str = "/salesorder";

/// Repository for sales orders.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SalesOrderRepository::new(client);
///
/// let orders = repo.list().await?;
/// let order = repo.find_by_so_number("SO-001").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SalesOrderRepository {
    client: ApiClient,
}

impl SalesOrderRepository {
    pub fn new(client: ApiClient) -> Self {
        SalesOrderRepository { client }
    }

    /// Lists every sales order in backend order.
    pub async fn list(&self) -> ApiResult<Vec<Order>> {
        let response: SalesOrderListResponse = self.client.get_json(PATH).await?;

        let orders: Vec<Order> = response
            .penjualan_app
            .data
            .iter()
            .map(order_from_record)
            .collect();

        debug!(count = orders.len(), "Listed sales orders");
        Ok(orders)
    }

    /// Finds an order by its SO number (exact match).
    pub async fn find_by_so_number(&self, so_number: &str) -> ApiResult<Order> {
        let so_number = so_number.trim();
        self.list()
            .await?
            .into_iter()
            .find(|order| order.so_number == so_number)
            .ok_or_else(|| ApiError::not_found("Sales order", so_number))
    }

    /// Finds an order by its backend id.
    pub async fn find_by_id(&self, id: &str) -> ApiResult<Order> {
        self.list()
            .await?
            .into_iter()
            .find(|order| order.id.as_deref() == Some(id))
            .ok_or_else(|| ApiError::not_found("Sales order", id))
    }

    /// Creates a new order.
    pub async fn create(&self, order: &Order) -> ApiResult<()> {
        validate_order_submission(order)?;

        let payload = SalesOrderPayload::from_order(order);
        self.client.send_json(Method::POST, PATH, &payload).await?;

        info!(so_number = %order.so_number, "Created sales order");
        Ok(())
    }

    /// Replaces a stored order. Totals in the payload are recomputed.
    pub async fn update(&self, order: &Order) -> ApiResult<()> {
        validate_order_submission(order)?;
        let id = order.id.as_deref().unwrap_or_default();
        validate_record_id(id)?;

        let payload = SalesOrderPayload::from_order(order);
        self.client
            .send_json(Method::PUT, &format!("{PATH}/{id}"), &payload)
            .await?;

        info!(so_number = %order.so_number, id = %id, "Updated sales order");
        Ok(())
    }

    /// Deletes an order by backend id.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        validate_record_id(id)?;
        self.client.delete(&format!("{PATH}/{id}")).await?;

        info!(id = %id, "Deleted sales order");
        Ok(())
    }
}
