pub mod booking;
pub mod rooms;

pub use booking::{Booking, CreateBooking};
pub use rooms::RoomRegistry;
