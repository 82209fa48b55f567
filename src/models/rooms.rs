use std::collections::HashSet;

/// Every room the hotel knows about, in the order the dashboard renders them.
pub const ROOMS: [&str; 35] = [
    "G1", "G2", "G3", "G4", "G5", "G6", "G7", "G8", "G9", "G10", //
    "101", "102", "103", "104", "105", "106", "107", "108", "109", "110", "111", //
    "201", "202", "203", "204", "205", "206", "207", "208", "209", "210", "211", //
    "301", "302", "303",
];

/// Rooms administratively excluded from booking (maintenance etc.).
pub const UNAVAILABLE_ROOMS: [&str; 7] = ["G2", "G5", "G6", "104", "105", "107", "109"];

/// The fixed catalogue of room identifiers, shared by input validation, the
/// occupancy aggregation and the dashboard. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct RoomRegistry {
    rooms: Vec<String>,
    unavailable: HashSet<String>,
}

impl RoomRegistry {
    pub fn new<R, U>(rooms: R, unavailable: U) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        Self {
            rooms: rooms.into_iter().map(Into::into).collect(),
            unavailable: unavailable.into_iter().map(Into::into).collect(),
        }
    }

    /// The hotel's real floor plan.
    pub fn standard() -> Self {
        Self::new(ROOMS, UNAVAILABLE_ROOMS)
    }

    pub fn contains(&self, room: &str) -> bool {
        self.rooms.iter().any(|r| r == room)
    }

    pub fn is_unavailable(&self, room: &str) -> bool {
        self.unavailable.contains(room)
    }

    /// Room identifiers in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn unavailable_count(&self) -> usize {
        self.unavailable.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_matches_floor_plan() {
        let registry = RoomRegistry::standard();
        assert_eq!(registry.len(), 35);
        assert_eq!(registry.unavailable_count(), 7);
        assert!(registry.contains("G1"));
        assert!(registry.contains("303"));
        assert!(!registry.contains("304"));
    }

    #[test]
    fn unavailable_rooms_are_still_registry_members() {
        let registry = RoomRegistry::standard();
        for room in UNAVAILABLE_ROOMS {
            assert!(registry.contains(room));
            assert!(registry.is_unavailable(room));
        }
        assert!(!registry.is_unavailable("G1"));
    }
}
