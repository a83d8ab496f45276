//! # Delivery Schedule Repository
//!
//! `/jadwalkirim` endpoints.

use reqwest::Method;
use tracing::{debug, info};

use singa_core::validation::{validate_delivery_date, validate_record_id, validate_schedule_request};
use singa_core::{DeliverySchedule, Order};

use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::normalize::schedule_from_record;
use crate::wire::{CreateSchedulePayload, DataEnvelope, DeliveryScheduleRecord, ReschedulePayload};

const PATH: &str = "/jadwalkirim";

/// Repository for delivery schedules.
#[derive(Debug, Clone)]
pub struct DeliveryScheduleRepository {
    client: ApiClient,
}

impl DeliveryScheduleRepository {
    pub fn new(client: ApiClient) -> Self {
        DeliveryScheduleRepository { client }
    }

    /// Lists every schedule in backend order.
    pub async fn list(&self) -> ApiResult<Vec<DeliverySchedule>> {
        let response: DataEnvelope<DeliveryScheduleRecord> = self.client.get_json(PATH).await?;

        let schedules: Vec<DeliverySchedule> =
            response.data.iter().map(schedule_from_record).collect();

        debug!(count = schedules.len(), "Listed delivery schedules");
        Ok(schedules)
    }

    /// Finds a schedule by backend id.
    pub async fn find(&self, id: &str) -> ApiResult<DeliverySchedule> {
        self.list()
            .await?
            .into_iter()
            .find(|schedule| schedule.id.as_deref() == Some(id))
            .ok_or_else(|| ApiError::not_found("Delivery schedule", id))
    }

    /// Books a delivery for `order` on `delivery_date` (`YYYY-MM-DD`).
    ///
    /// The schedule records the order's current customer name.
    pub async fn create(&self, order: &Order, delivery_date: &str) -> ApiResult<()> {
        let (order_id, date) = validate_schedule_request(Some(order), delivery_date)?;
        validate_record_id(&order_id)?;

        let payload = CreateSchedulePayload {
            pilih_customer: order.customer_name.clone(),
            pilih_nomor_so: order_id,
            pilih_tanggal: date.format("%Y-%m-%d").to_string(),
        };
        self.client.send_json(Method::POST, PATH, &payload).await?;

        info!(
            so_number = %order.so_number,
            delivery_date = %payload.pilih_tanggal,
            "Created delivery schedule"
        );
        Ok(())
    }

    /// Moves a schedule to a new delivery date.
    pub async fn reschedule(&self, id: &str, delivery_date: &str) -> ApiResult<()> {
        validate_record_id(id)?;
        let date = validate_delivery_date(delivery_date)?;

        let payload = ReschedulePayload {
            pilih_tanggal: date.format("%Y-%m-%d").to_string(),
        };
        self.client
            .send_json(Method::PUT, &format!("{PATH}/{id}"), &payload)
            .await?;

        info!(id = %id, delivery_date = %payload.pilih_tanggal, "Rescheduled delivery");
        Ok(())
    }

    /// Deletes a schedule by backend id.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        validate_record_id(id)?;
        self.client.delete(&format!("{PATH}/{id}")).await?;

        info!(id = %id, "Deleted delivery schedule");
        Ok(())
    }
}

/// Fills in the order snapshot of schedules whose record carried only the
/// order id.
pub fn link_orders(schedules: &mut [DeliverySchedule], orders: &[Order]) {
    for schedule in schedules.iter_mut().filter(|s| s.order.is_none()) {
        schedule.order = orders
            .iter()
            .find(|order| order.id.as_deref() == Some(schedule.linked_order_id.as_str()))
            .cloned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_orders_fills_missing_snapshots() {
        let orders = vec![Order {
            id: Some("65f1".to_string()),
            so_number: "SO-002".to_string(),
            ..Order::default()
        }];

        let mut schedules = vec![
            DeliverySchedule {
                linked_order_id: "65f1".to_string(),
                ..DeliverySchedule::default()
            },
            DeliverySchedule {
                linked_order_id: "gone".to_string(),
                ..DeliverySchedule::default()
            },
        ];

        link_orders(&mut schedules, &orders);
        assert_eq!(schedules[0].so_number(), "SO-002");
        assert!(schedules[1].order.is_none());
    }
}
