//! Address notes and custom note types.

use route4me::types::{DeviceType, NoteParameters};
use route4me::{Client, Error};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROUTE_NOTES: &str = "/actions/addRouteNotes.php";
const CUSTOM_NOTE_TYPE: &str = "/api.v4/note_custom_types.php";
const ROUTE_ID: &str = "585A1E0A3A3B4A2F1D6A0C9C1EE3F332";

fn client(mock_server: &MockServer) -> Client {
    Client::builder()
        .api_key("TESTKEY")
        .base_url(mock_server.uri())
        .unwrap()
        .build()
        .unwrap()
}

fn note_params() -> NoteParameters {
    NoteParameters {
        route_id: Some(ROUTE_ID.to_string()),
        address_id: Some(167899269),
        latitude: Some(33.132675170898),
        longitude: Some(-83.244743347168),
        device_type: Some(DeviceType::Web),
        activity_type: Some("dropoff".to_string()),
    }
}

fn added_note() -> serde_json::Value {
    json!({
        "status": true,
        "note_id": "1015289",
        "upload_id": "",
        "note": {
            "note_id": 1015289,
            "route_id": ROUTE_ID,
            "route_destination_id": 167899269,
            "activity_type": "dropoff",
            "contents": "Test Note Contents"
        }
    })
}

#[tokio::test]
async fn test_add_address_note_sends_two_form_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_NOTES))
        .and(query_param("route_id", ROUTE_ID))
        .and(query_param("address_id", "167899269"))
        .and(query_param("dev_lat", "33.132675170898"))
        .and(query_param("device_type", "web"))
        .respond_with(ResponseTemplate::new(200).set_body_json(added_note()))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let note = client
        .add_address_note(&note_params(), "Test Note Contents")
        .await
        .unwrap();
    assert_eq!(note.note_id, Some(1015289));

    let received = mock_server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&received[0].body)
        .into_owned()
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("strUpdateType".to_string(), "dropoff".to_string()),
            ("strNoteContents".to_string(), "Test Note Contents".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_add_address_note_with_file_sends_three_parts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_NOTES))
        .respond_with(ResponseTemplate::new(200).set_body_json(added_note()))
        .mount(&mock_server)
        .await;

    let attachment = std::env::temp_dir().join("route4me_note_attachment.txt");
    tokio::fs::write(&attachment, b"signed by the customer").await.unwrap();

    let client = client(&mock_server);
    let params = NoteParameters {
        activity_type: None,
        ..note_params()
    };
    client
        .add_address_note_with_file(&params, "Test Note Contents", &attachment)
        .await
        .unwrap();

    let received = mock_server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&received[0].body);
    assert_eq!(body.matches("Content-Disposition: form-data;").count(), 3);
    assert!(body.contains("name=\"strFilename\"; filename=\"route4me_note_attachment.txt\""));
    assert!(body.contains("signed by the customer"));
    assert!(body.contains("unclassified"));
}

#[tokio::test]
async fn test_missing_attachment_is_reported() {
    let client = Client::new("TESTKEY").unwrap();
    let err = client
        .add_address_note_with_file(&note_params(), "contents", "/nonexistent/route4me/file.png")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Attachment(_)));
}

#[tokio::test]
async fn test_note_not_added() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_NOTES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": false })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client
        .add_address_note(&note_params(), "Test Note Contents")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Note not added");
}

#[tokio::test]
async fn test_get_address_notes_requests_notes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api.v4/address.php"))
        .and(query_param("route_id", ROUTE_ID))
        .and(query_param("route_destination_id", "167899269"))
        .and(query_param("notes", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "Stop", "lat": 0.0, "lng": 0.0,
            "notes": [{ "note_id": 1 }, { "note_id": 2 }]
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let notes = client.get_address_notes(&note_params()).await.unwrap();
    assert_eq!(notes.len(), 2);
}

#[tokio::test]
async fn test_custom_note_type_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CUSTOM_NOTE_TYPE))
        .and(body_json(json!({
            "type": "To Do",
            "values": ["Pass a package", "Pickup package"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "OK", "affected": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(CUSTOM_NOTE_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "note_custom_type_id": 10,
            "note_custom_type": "To Do",
            "root_owner_member_id": 1,
            "note_custom_type_values": ["Pass a package", "Pickup package"]
        }])))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(CUSTOM_NOTE_TYPE))
        .and(body_json(json!({ "id": 10 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "OK", "affected": 1 })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let values = vec!["Pass a package".to_string(), "Pickup package".to_string()];
    assert_eq!(client.add_custom_note_type("To Do", &values).await.unwrap(), 1);

    let types = client.get_all_custom_note_types().await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].note_custom_type_values, values);

    let affected = client
        .remove_custom_note_type(types[0].note_custom_type_id)
        .await
        .unwrap();
    assert_eq!(affected, 1);
}

#[tokio::test]
async fn test_custom_note_type_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(CUSTOM_NOTE_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "FAIL", "affected": 0 })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = client.remove_custom_note_type(99).await.unwrap_err();
    assert!(err.is_rejection());
}

#[tokio::test]
async fn test_add_custom_note_to_route() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ROUTE_NOTES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": false })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let custom = vec![("custom_note_type[11]".to_string(), "slippery".to_string())];
    let err = client
        .add_custom_note_to_route(&note_params(), &custom)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Can not add custom note to the route");

    let received = mock_server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&received[0].body)
        .into_owned()
        .collect();
    assert_eq!(pairs, custom);
}
