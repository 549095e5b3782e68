//! Address book, avoidance zone, territory, and order endpoints.

use route4me::types::{
    AddressBookContact, AddressBookParameters, AvoidanceZoneParameters, AvoidanceZoneQuery,
    Order, OrderParameters, Territory, TerritoryQuery, TerritoryType,
};
use route4me::{Client, Error, Field};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ADDRESS_BOOK: &str = "/api.v4/address_book.php";
const AVOIDANCE: &str = "/api.v4/avoidance.php";
const TERRITORY: &str = "/api.v4/territory.php";
const ORDER: &str = "/api.v4/order.php";

fn client(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_key("TESTKEY")
        .base_url(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_address_book_contacts_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_BOOK))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "address_id": 1, "address_1": "A", "cached_lat": 1.0, "cached_lng": 1.0 },
                { "address_id": 2, "address_1": "B", "cached_lat": 2.0, "cached_lng": 2.0 },
                { "address_id": 3, "address_1": "C", "cached_lat": 3.0, "cached_lng": 3.0 }
            ],
            "total": 123
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let page = client
        .get_address_book_contacts(&AddressBookParameters {
            limit: Some(10),
            offset: Some(0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.results.len(), 3);
    assert_eq!(page.total, 123);
}

#[tokio::test]
async fn test_search_address_book_defaults_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ADDRESS_BOOK))
        .and(query_param("query", "Louisville"))
        .and(query_param("fields", "first_name,address_email"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [["Home", "home@example.com"], ["Work", null]],
            "total": 2,
            "fields": ["first_name", "address_email"]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let found = client
        .search_address_book_location(&AddressBookParameters {
            query: Some("Louisville".to_string()),
            fields: Some("first_name,address_email".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(found.results.len(), 2);
    assert_eq!(found.column("address_email"), vec![Some("home@example.com".to_string()), None]);
}

#[tokio::test]
async fn test_update_contact_clears_group() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(ADDRESS_BOOK))
        .and(body_json(json!({
            "address_id": 3928601,
            "address_1": "17205 Kings Park Dr",
            "address_group": null,
            "cached_lat": 29.5785,
            "cached_lng": -95.1165
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address_id": 3928601,
            "address_1": "17205 Kings Park Dr",
            "address_group": null,
            "cached_lat": 29.5785,
            "cached_lng": -95.1165
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let contact = AddressBookContact {
        address_id: Some(3928601),
        address_1: "17205 Kings Park Dr".to_string(),
        address_group: Field::Null,
        cached_lat: 29.5785,
        cached_lng: -95.1165,
        ..Default::default()
    };
    let updated = client.update_address_book_contact(&contact).await.unwrap();
    assert!(updated.address_group.is_null());
}

#[tokio::test]
async fn test_remove_address_book_contacts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(ADDRESS_BOOK))
        .and(body_json(json!({ "address_ids": ["3928601", "3928602"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .remove_address_book_contacts(&["3928601".to_string(), "3928602".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_avoidance_zone_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(AVOIDANCE))
        .and(body_json(json!({
            "territory_name": "Test Territory",
            "territory_color": "ff0000",
            "territory": { "type": "circle", "data": ["37.569752822786455,-77.47833251953125", "5000"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "territory_id": "596A2A44FE9FB19EEB9C3C072BF2D0BE",
            "territory_name": "Test Territory",
            "territory_color": "ff0000",
            "territory": { "type": "circle", "data": ["37.569752822786455,-77.47833251953125", "5000"] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(AVOIDANCE))
        .and(query_param("territory_id", "596A2A44FE9FB19EEB9C3C072BF2D0BE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let zone = client
        .add_avoidance_zone(&AvoidanceZoneParameters {
            territory_name: Some("Test Territory".to_string()),
            territory_color: Some("ff0000".to_string()),
            territory: Some(Territory {
                territory_type: TerritoryType::Circle,
                data: vec![
                    "37.569752822786455,-77.47833251953125".to_string(),
                    "5000".to_string(),
                ],
            }),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(zone.territory_id, "596A2A44FE9FB19EEB9C3C072BF2D0BE");

    client
        .delete_avoidance_zone(&AvoidanceZoneQuery {
            territory_id: Some(zone.territory_id),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_avoidance_zone_targets_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(AVOIDANCE))
        .and(query_param("territory_id", "Z1"))
        .and(query_param("device_id", "D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "territory_id": "Z1",
            "territory_name": "Renamed",
            "territory_color": "00ff00"
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let zone = client
        .update_avoidance_zone(&AvoidanceZoneParameters {
            territory_id: Some("Z1".to_string()),
            territory_name: Some("Renamed".to_string()),
            device_id: Some("D1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(zone.territory_name, "Renamed");

    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(body.get("device_id").is_none());
}

#[tokio::test]
async fn test_avoidance_zones_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(AVOIDANCE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "territory_id": "Z1", "territory_name": "One", "territory_color": "ff0000" },
            { "territory_id": "Z2", "territory_name": "Two", "territory_color": "00ff00" }
        ])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let zones = client
        .get_avoidance_zones(&AvoidanceZoneQuery::default())
        .await
        .unwrap();
    assert_eq!(zones.len(), 2);
}

#[tokio::test]
async fn test_territory_with_addresses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(TERRITORY))
        .and(query_param("territory_id", "T1"))
        .and(query_param("addresses", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "territory_id": "T1",
            "territory_name": "North",
            "territory_color": "0000ff",
            "addresses": [3928601, 3928602]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(TERRITORY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": false })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let territory = client
        .get_territory(&TerritoryQuery {
            territory_id: Some("T1".to_string()),
            addresses: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(territory.addresses, vec![3928601, 3928602]);

    let err = client
        .remove_territory(&AvoidanceZoneQuery {
            territory_id: Some("T1".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn test_get_orders_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDER))
        .and(query_param("day_added_YYMMDD", "2016-06-15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                { "order_id": 1, "address_1": "A", "cached_lat": 0.0, "cached_lng": 0.0 },
                { "order_id": 2, "address_1": "B", "cached_lat": 0.0, "cached_lng": 0.0 }
            ],
            "total": 2
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let page = client
        .get_orders(&OrderParameters {
            day_added: Some("2016-06-15".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.total, 2);
}

#[tokio::test]
async fn test_get_order_by_single_id_sends_it_twice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ORDER))
        .and(query_param("order_id", "7205711,7205711"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "order_id": 7205711, "address_1": "A", "cached_lat": 0.0, "cached_lng": 0.0 }],
            "total": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let orders = client
        .get_order_by_id(&OrderParameters {
            order_id: Some("7205711".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
}

#[tokio::test]
async fn test_get_order_by_id_requires_an_id() {
    let client = Client::new("TESTKEY").unwrap();
    let err = client
        .get_order_by_id(&OrderParameters::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
}

#[tokio::test]
async fn test_order_update_and_removal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(ORDER))
        .and(body_json(json!({
            "order_id": 7205711,
            "address_1": "Test Address1",
            "EXT_FIELD_phone": null,
            "cached_lat": 37.773972,
            "cached_lng": -122.431297
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order_id": 7205711,
            "address_1": "Test Address1",
            "cached_lat": 37.773972,
            "cached_lng": -122.431297
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(ORDER))
        .and(body_json(json!({ "order_ids": ["7205711"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let order = Order {
        order_id: Some(7205711),
        address_1: "Test Address1".to_string(),
        phone: Field::Null,
        cached_lat: 37.773972,
        cached_lng: -122.431297,
        ..Default::default()
    };
    let updated = client.update_order(&order).await.unwrap();
    assert_eq!(updated.order_id, Some(7205711));

    client.remove_orders(&["7205711".to_string()]).await.unwrap();
}
