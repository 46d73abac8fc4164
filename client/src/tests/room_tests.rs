use super::{MAX_PLAYERS, Room, RoomId, RoomStatus, filter_rooms};

fn room(id: u64, name: &str) -> Room {
    Room {
        id: RoomId(id),
        name: name.to_string(),
        ..Default::default()
    }
}

#[test]
fn filter_matches_case_insensitive_substring_and_keeps_order() {
    let rooms = vec![
        room(1, "Alpha"),
        room(2, "Beta"),
        room(3, "CALAMITY"),
        room(4, "gala"),
    ];

    let ids: Vec<u64> = filter_rooms(&rooms, "aL").iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn empty_term_keeps_every_room() {
    let rooms = vec![room(1, "Alpha"), room(2, "Beta")];
    assert_eq!(filter_rooms(&rooms, ""), rooms);
}

#[test]
fn decodes_wire_room_and_tolerates_partial_payloads() {
    let full: Room = serde_json::from_str(
        r#"{"id":2,"name":"Beta","status":"INACTIVE","players":[1,2],"turnCount":3}"#,
    )
    .expect("decode full room");
    assert_eq!(full.status, RoomStatus::Inactive);
    assert_eq!(full.players.len(), 2);
    assert_eq!(full.turn_count, 3);
    assert!(!full.is_open());

    let partial: Room = serde_json::from_str(r#"{"id":9}"#).expect("decode partial room");
    assert_eq!(partial.id, RoomId(9));
    assert_eq!(partial.status, RoomStatus::Unknown);

    let odd: Room =
        serde_json::from_str(r#"{"id":3,"status":"ARCHIVED"}"#).expect("decode odd status");
    assert_eq!(odd.status, RoomStatus::Unknown);
}

#[test]
fn title_and_subtitle_follow_list_item_format() {
    let mut beta = room(2, "Beta");
    beta.players = vec![serde_json::json!(1), serde_json::json!(2)];
    beta.turn_count = 3;
    beta.status = RoomStatus::Active;

    assert_eq!(beta.title(), "Beta (#2)");
    assert_eq!(
        beta.subtitle(),
        format!("2/{MAX_PLAYERS} players  -  Turn 3")
    );
    assert!(beta.is_open());
}

mod properties {
    use proptest::prelude::*;

    use super::super::{Room, RoomId, filter_rooms};

    fn rooms_strategy() -> impl Strategy<Value = Vec<Room>> {
        prop::collection::vec("\\PC{0,12}", 0..12).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(idx, name)| Room {
                    id: RoomId(idx as u64),
                    name,
                    ..Default::default()
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn filter_keeps_exactly_the_matching_rooms_in_order(
            rooms in rooms_strategy(),
            term in "\\PC{0,3}",
        ) {
            let filtered = filter_rooms(&rooms, &term);

            let expected: Vec<Room> = rooms
                .iter()
                .filter(|r| r.name.to_uppercase().contains(&term.to_uppercase()))
                .cloned()
                .collect();
            prop_assert_eq!(&filtered, &expected);

            // Subsequência do snapshot: ids (índices) estritamente crescentes.
            let ids: Vec<u64> = filtered.iter().map(|r| r.id.0).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(filtered.iter().all(|r| rooms.contains(r)));
        }

        #[test]
        fn filter_by_own_name_always_keeps_the_room(
            rooms in rooms_strategy(),
            pick in any::<prop::sample::Index>(),
        ) {
            prop_assume!(!rooms.is_empty());
            let room = &rooms[pick.index(rooms.len())];

            let filtered = filter_rooms(&rooms, &room.name);
            prop_assert!(filtered.iter().any(|r| r.id == room.id));
        }
    }
}
