pub mod bookings;
pub mod occupancy;
