//! Optimization problem endpoints.

use route4me::types::{
    Address, AlgorithmType, HybridDepotParameters, HybridOptimizationParameters,
    OptimizationParameters, OptimizationState, Optimize, RouteParameters, RouteParametersQuery,
};
use route4me::{Client, Error};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OPTIMIZATION: &str = "/api.v4/optimization_problem.php";

fn client(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_key("TESTKEY")
        .base_url(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn solved_problem() -> serde_json::Value {
    json!({
        "optimization_problem_id": "07372F2CF3814EC6DFFAFE92E22771AA",
        "state": 4,
        "parameters": { "route_name": "Single Driver Round Trip", "algorithm_type": 1 },
        "addresses": [
            { "address": "754 5th Ave New York, NY 10019", "lat": 40.7636197, "lng": -73.9744388, "is_depot": true, "route_destination_id": 1 },
            { "address": "717 5th Ave New York, NY 10022", "lat": 40.7669692, "lng": -73.9693864, "route_destination_id": 2 }
        ],
        "routes": [
            { "route_id": "3A2DD89E6E1A044B2098AD1313E3138C", "addresses": [] }
        ]
    })
}

#[tokio::test]
async fn test_run_optimization_sends_problem_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(OPTIMIZATION))
        .and(body_json(json!({
            "parameters": {
                "algorithm_type": 1,
                "route_name": "Single Driver Round Trip",
                "optimize": "Distance",
                "rt": true
            },
            "addresses": [
                { "address": "754 5th Ave New York, NY 10019", "lat": 40.7636197, "lng": -73.9744388, "is_depot": true },
                { "address": "717 5th Ave New York, NY 10022", "lat": 40.7669692, "lng": -73.9693864 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(solved_problem()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let problem = OptimizationParameters {
        addresses: Some(vec![
            Address {
                is_depot: Some(true),
                ..Address::new("754 5th Ave New York, NY 10019", 40.7636197, -73.9744388)
            },
            Address::new("717 5th Ave New York, NY 10022", 40.7669692, -73.9693864),
        ]),
        parameters: Some(RouteParameters {
            algorithm_type: Some(AlgorithmType::Tsp),
            route_name: Some("Single Driver Round Trip".to_string()),
            optimize: Some(Optimize::Distance),
            rt: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    let solved = client.run_optimization(&problem).await.unwrap();
    assert_eq!(solved.state, Some(OptimizationState::Optimized));
    assert_eq!(solved.addresses.len(), 2);
    assert_eq!(solved.routes.len(), 1);
}

#[tokio::test]
async fn test_get_optimizations_unwraps_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OPTIMIZATION))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "optimizations": [solved_problem(), solved_problem(), solved_problem()]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let query = RouteParametersQuery {
        limit: Some(10),
        offset: Some(5),
        ..Default::default()
    };
    let problems = client.get_optimizations(&query).await.unwrap();
    assert_eq!(problems.len(), 3);
}

#[tokio::test]
async fn test_update_optimization_flags_are_bits() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(OPTIMIZATION))
        .and(query_param("optimization_problem_id", "07372F2CF3814EC6DFFAFE92E22771AA"))
        .and(query_param("reoptimize", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(solved_problem()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = OptimizationParameters {
        optimization_problem_id: Some("07372F2CF3814EC6DFFAFE92E22771AA".to_string()),
        reoptimize: Some(true),
        ..Default::default()
    };
    client.update_optimization(&params).await.unwrap();

    let received = mock_server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_remove_optimization_without_removal_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(OPTIMIZATION))
        .and(query_param("redirect", "0"))
        .and(body_json(json!({ "optimization_problem_ids": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true, "removed": 0 })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client.remove_optimization(&[]).await.unwrap_err();

    assert!(err.is_rejection());
    assert_eq!(err.to_string(), "Error removing optimization");
}

#[tokio::test]
async fn test_remove_optimization_succeeds_on_removal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(OPTIMIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true, "removed": 1 })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .remove_optimization(&["07372F2CF3814EC6DFFAFE92E22771AA".to_string()])
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_destination_from_optimization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api.v4/address.php"))
        .and(query_param("optimization_problem_id", "P1"))
        .and(query_param("route_destination_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": false })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client
        .remove_destination_from_optimization("P1", 42)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Rejected(_)));
}

#[tokio::test]
async fn test_get_route_id_waits_for_final_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OPTIMIZATION))
        .and(query_param("wait_for_final_state", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(solved_problem()))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let route_id = client
        .get_route_id("07372F2CF3814EC6DFFAFE92E22771AA")
        .await
        .unwrap();
    assert_eq!(route_id, "3A2DD89E6E1A044B2098AD1313E3138C");
}

#[tokio::test]
async fn test_get_route_id_without_routes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(OPTIMIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "optimization_problem_id": "P1",
            "state": 5,
            "routes": []
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client.get_route_id("P1").await.unwrap_err();
    assert!(err.is_rejection());
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
async fn test_add_orders_to_optimization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(OPTIMIZATION))
        .and(query_param("optimization_problem_id", "P1"))
        .and(query_param("redirect", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(solved_problem()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = OptimizationParameters {
        optimization_problem_id: Some("P1".to_string()),
        redirect: Some(false),
        ..Default::default()
    };
    let orders = vec![Address {
        order_id: Some(7205711),
        ..Address::new("273 Canal St, New York, NY 10013, USA", 40.7191558, -74.0011966)
    }];
    let parameters = RouteParameters {
        route_name: Some("Wednesday 15th of June 2016 07:01 PM (+03:00)".to_string()),
        ..Default::default()
    };
    client
        .add_orders_to_optimization(&params, &orders, &parameters)
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
    assert_eq!(body["addresses"][0]["order_id"], 7205711);
    assert_eq!(
        body["parameters"]["route_name"],
        "Wednesday 15th of June 2016 07:01 PM (+03:00)"
    );
}

#[tokio::test]
async fn test_hybrid_optimization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.v4/hybrid_date_optimization.php"))
        .and(query_param("target_date_string", "2017-08-29"))
        .and(query_param("timezone_offset_minutes", "480"))
        .respond_with(ResponseTemplate::new(200).set_body_json(solved_problem()))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/change_hybrid_optimization_depot.php"))
        .and(body_json(json!({
            "optimization_problem_id": "07372F2CF3814EC6DFFAFE92E22771AA",
            "delete_old_depots": true,
            "new_depots": [{ "address": "Depot", "lat": 40.0, "lng": -73.0, "is_depot": true }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let hybrid = client
        .get_hybrid_optimization(&HybridOptimizationParameters {
            target_date_string: "2017-08-29".to_string(),
            timezone_offset_minutes: 480,
        })
        .await
        .unwrap();

    client
        .add_depots_to_hybrid_optimization(&HybridDepotParameters {
            optimization_problem_id: hybrid.optimization_problem_id,
            delete_old_depots: true,
            new_depots: vec![Address {
                is_depot: Some(true),
                ..Address::new("Depot", 40.0, -73.0)
            }],
        })
        .await
        .unwrap();
}
