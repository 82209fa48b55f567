//! Room availability aggregation.
//!
//! A pure projection from (room registry, flat booking list) to a per-room
//! occupancy view plus summary counts. Recomputed on every read, never stored
//! and never patched incrementally.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Booking, RoomRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Unavailable,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancy {
    pub room: String,
    pub status: RoomStatus,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccupancySummary {
    pub available: usize,
    pub occupied: usize,
    pub unavailable: usize,
}

/// Everything the dashboard needs for one render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyView {
    pub summary: OccupancySummary,
    /// One entry per registry room, in registry order.
    pub rooms: Vec<RoomOccupancy>,
    pub available_rooms: Vec<String>,
    pub unavailable_rooms: Vec<String>,
}

/// Derives the occupancy view from the full booking list.
///
/// A statically unavailable room stays `Unavailable` even if bookings exist
/// for it, and a room with several bookings counts once toward `occupied`.
/// Bookings referencing rooms outside the registry are dropped.
pub fn aggregate(registry: &RoomRegistry, bookings: &[Booking]) -> OccupancyView {
    let mut per_room: HashMap<&str, Vec<Booking>> = HashMap::new();
    for booking in bookings {
        if registry.contains(&booking.room) {
            per_room
                .entry(booking.room.as_str())
                .or_default()
                .push(booking.clone());
        } else {
            log::debug!("dropping booking {} for unknown room {}", booking.id, booking.room);
        }
    }

    let mut rooms = Vec::with_capacity(registry.len());
    let mut available_rooms = Vec::new();
    let mut unavailable_rooms = Vec::new();
    let mut occupied = 0;

    for room in registry.rooms() {
        let bookings = per_room.remove(room).unwrap_or_default();
        let status = if registry.is_unavailable(room) {
            unavailable_rooms.push(room.to_string());
            RoomStatus::Unavailable
        } else if bookings.is_empty() {
            available_rooms.push(room.to_string());
            RoomStatus::Available
        } else {
            occupied += 1;
            RoomStatus::Occupied
        };
        rooms.push(RoomOccupancy {
            room: room.to_string(),
            status,
            bookings,
        });
    }

    let unavailable = registry.unavailable_count();
    let candidates = registry.len() - unavailable;
    OccupancyView {
        summary: OccupancySummary {
            available: candidates - occupied,
            occupied,
            unavailable,
        },
        rooms,
        available_rooms,
        unavailable_rooms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn booking(id: i64, room: &str) -> Booking {
        Booking {
            id,
            room: room.to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            guest_name: "Asha Rao".to_string(),
            room_type: "Deluxe".to_string(),
            check_in_meter: Some(1200),
            check_out_meter: None,
            phone_number: "+15550001111".to_string(),
        }
    }

    #[test]
    fn counts_partition_the_registry() {
        let registry = RoomRegistry::standard();
        let cases: Vec<Vec<Booking>> = vec![
            vec![],
            vec![booking(1, "G1")],
            vec![booking(1, "G1"), booking(2, "101"), booking(3, "303")],
            vec![booking(1, "G2")], // unavailable room with a booking
            vec![booking(1, "G1"), booking(2, "G1")],
        ];
        for bookings in cases {
            let view = aggregate(&registry, &bookings);
            let s = view.summary;
            assert_eq!(s.available + s.occupied + s.unavailable, registry.len());
        }
    }

    #[test]
    fn unavailable_room_never_listed_as_available() {
        let registry = RoomRegistry::standard();
        let view = aggregate(&registry, &[booking(1, "G1")]);
        assert!(!view.available_rooms.contains(&"G2".to_string()));
        assert!(view.unavailable_rooms.contains(&"G2".to_string()));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let registry = RoomRegistry::standard();
        let bookings = vec![booking(1, "G1"), booking(2, "201"), booking(3, "201")];
        let first = aggregate(&registry, &bookings);
        let second = aggregate(&registry, &bookings);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.available_rooms, second.available_rooms);
        assert_eq!(first.unavailable_rooms, second.unavailable_rooms);
    }

    #[test]
    fn two_room_scenario() {
        let registry = RoomRegistry::new(["A", "B"], ["B"]);
        let view = aggregate(&registry, &[booking(1, "A")]);
        assert_eq!(view.summary.available, 0);
        assert_eq!(view.summary.occupied, 1);
        assert_eq!(view.summary.unavailable, 1);
    }

    #[test]
    fn room_with_multiple_bookings_counts_once() {
        let registry = RoomRegistry::standard();
        let view = aggregate(&registry, &[booking(1, "G1"), booking(2, "G1")]);
        assert_eq!(view.summary.occupied, 1);
        let g1 = view.rooms.iter().find(|r| r.room == "G1").unwrap();
        assert_eq!(g1.bookings.len(), 2);
        assert_eq!(g1.status, RoomStatus::Occupied);
    }

    #[test]
    fn booking_for_unknown_room_is_dropped() {
        let registry = RoomRegistry::standard();
        let view = aggregate(&registry, &[booking(1, "penthouse")]);
        assert_eq!(view.summary.occupied, 0);
        assert!(view.rooms.iter().all(|r| r.bookings.is_empty()));
    }

    #[test]
    fn booked_unavailable_room_stays_unavailable() {
        let registry = RoomRegistry::standard();
        let view = aggregate(&registry, &[booking(1, "G2")]);
        assert_eq!(view.summary.occupied, 0);
        let g2 = view.rooms.iter().find(|r| r.room == "G2").unwrap();
        assert_eq!(g2.status, RoomStatus::Unavailable);
        assert_eq!(g2.bookings.len(), 1);
    }

    #[test]
    fn rooms_come_back_in_registry_order() {
        let registry = RoomRegistry::standard();
        let view = aggregate(&registry, &[]);
        let order: Vec<&str> = view.rooms.iter().map(|r| r.room.as_str()).collect();
        assert_eq!(order[0], "G1");
        assert_eq!(order[10], "101");
        assert_eq!(order[34], "303");
    }
}
