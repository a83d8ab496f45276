//! Delivery schedule repository against a mock backend.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use singa_api::repository::delivery_schedule::link_orders;
use singa_api::{ApiClient, ApiConfig, ApiError, DeliveryScheduleRepository};
use singa_core::{build_delivery_document, DocumentSettings, Order};

fn repository(server: &MockServer) -> DeliveryScheduleRepository {
    let client = ApiClient::new(&ApiConfig::with_base_url(server.uri())).unwrap();
    DeliveryScheduleRepository::new(client)
}

fn saved_order() -> Order {
    Order {
        id: Some("65f0".to_string()),
        customer_name: "Toko Makmur".to_string(),
        so_number: "SO-001".to_string(),
        ..Order::default()
    }
}

#[tokio::test]
async fn test_list_with_populated_and_bare_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jadwalkirim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "_id": "j1",
                    "pilihCustomer": "Toko Makmur",
                    "pilihNomorSo": {
                        "_id": "65f0",
                        "nomorSO": "SO-001",
                        "alamatPelanggan": "Jl. Merdeka 1",
                        "barang": [{ "kuantitas": 2, "namaBarang": "Paku", "harga": 500000 }]
                    },
                    "pilihTanggal": "2024-03-10T00:00:00.000Z"
                },
                { "_id": "j2", "pilihCustomer": "CV Sentosa", "pilihNomorSo": "65f1" }
            ]
        })))
        .mount(&server)
        .await;

    let schedules = repository(&server).list().await.unwrap();

    assert_eq!(schedules.len(), 2);
    assert_eq!(schedules[0].so_number(), "SO-001");
    assert_eq!(schedules[1].linked_order_id, "65f1");
    assert!(schedules[1].order.is_none());

    let doc = build_delivery_document(&schedules[0], &DocumentSettings::default());
    assert_eq!(doc.file_name, "JadwalPengiriman_SO-001.pdf");
    assert_eq!(doc.header_value("Delivery Date"), Some("10 Maret 2024"));
    assert_eq!(doc.summary_value("Sub Total"), Some("Rp\u{a0}1.000.000,00"));
}

#[tokio::test]
async fn test_find_missing_schedule() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jadwalkirim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let err = repository(&server).find("j9").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_find_bare_schedule_then_link_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/jadwalkirim"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "_id": "j1", "pilihCustomer": "CV Sentosa", "pilihNomorSo": "65f1" },
                { "_id": "j2", "pilihCustomer": "Toko Makmur", "pilihNomorSo": "65f0" }
            ]
        })))
        .mount(&server)
        .await;

    let mut schedule = repository(&server).find("j2").await.unwrap();
    assert!(schedule.order.is_none());

    link_orders(std::slice::from_mut(&mut schedule), &[saved_order()]);

    assert_eq!(schedule.so_number(), "SO-001");
    let doc = build_delivery_document(&schedule, &DocumentSettings::default());
    assert_eq!(doc.file_name, "JadwalPengiriman_SO-001.pdf");
}

#[tokio::test]
async fn test_create_posts_order_id_and_date() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/jadwalkirim"))
        .and(body_json(json!({
            "pilihCustomer": "Toko Makmur",
            "pilihNomorSo": "65f0",
            "pilihTanggal": "2024-03-10"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .create(&saved_order(), "2024-03-10")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_requires_date() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = repository(&server)
        .create(&saved_order(), "")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
}

#[tokio::test]
async fn test_reschedule_sends_only_date() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/jadwalkirim/j1"))
        .and(body_json(json!({ "pilihTanggal": "2024-04-02" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    repository(&server)
        .reschedule("j1", " 2024-04-02 ")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_not_found_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/jadwalkirim/j1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = repository(&server).delete("j1").await.unwrap_err();
    assert!(err.is_not_found());
}
