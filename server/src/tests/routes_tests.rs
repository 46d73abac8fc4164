use std::sync::Arc;

use warp::http::StatusCode;

use super::{Room, RoomStatus, RoomStore, routes};

#[tokio::test]
async fn list_returns_seeded_rooms_in_creation_order() {
    let store = Arc::new(RoomStore::with_seed(["Alpha", "Beta"]).await);
    let api = routes(store);

    let res = warp::test::request()
        .method("GET")
        .path("/room")
        .reply(&api)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    let rooms: Vec<Room> = serde_json::from_slice(res.body()).expect("decode rooms");
    let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert_eq!(rooms[0].id, 1);
    assert_eq!(rooms[1].id, 2);
}

#[tokio::test]
async fn blank_seed_names_are_skipped() {
    let store = RoomStore::with_seed(["Alpha", "   ", "Beta"]).await;

    let rooms = store.list().await;
    let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert_eq!(rooms[1].id, 2);
}

#[tokio::test]
async fn create_trims_name_and_returns_created_room() {
    let store = Arc::new(RoomStore::new());
    let api = routes(store.clone());

    let res = warp::test::request()
        .method("POST")
        .path("/room")
        .json(&serde_json::json!({ "name": "  Gamma  " }))
        .reply(&api)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let room: Room = serde_json::from_slice(res.body()).expect("decode room");
    assert_eq!(room.name, "Gamma");
    assert_eq!(room.status, RoomStatus::Active);
    assert!(room.players.is_empty());
    assert_eq!(room.turn_count, 0);
    assert_eq!(store.list().await, vec![room]);
}

#[tokio::test]
async fn create_rejects_blank_name() {
    let store = Arc::new(RoomStore::new());
    let api = routes(store.clone());

    let res = warp::test::request()
        .method("POST")
        .path("/room")
        .json(&serde_json::json!({ "name": "   " }))
        .reply(&api)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(res.body()).expect("decode error");
    assert!(body["error"].as_str().is_some());
    assert!(store.list().await.is_empty());
}

#[test]
fn room_serializes_with_wire_field_names() {
    let room = Room {
        id: 7,
        name: "Delta".to_string(),
        status: RoomStatus::Inactive,
        players: vec!["ana".to_string()],
        turn_count: 3,
    };

    let value = serde_json::to_value(&room).expect("encode room");
    assert_eq!(value["status"], "INACTIVE");
    assert_eq!(value["turnCount"], 3);
    assert_eq!(value["players"].as_array().map(Vec::len), Some(1));
}
