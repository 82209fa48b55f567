use crate::models::Booking;

/// Renders the guest-facing confirmation text. Deterministic template
/// substitution; dates are typed, so there is no malformed-date path here.
pub fn format_booking_message(booking: &Booking) -> String {
    format!(
        "Hello {guest}, your booking details are as follows:\n\
         Room: {room}\n\
         Room Type: {room_type}\n\
         Check-In: {check_in}\n\
         Check-Out: {check_out}\n",
        guest = booking.guest_name,
        room = booking.room,
        room_type = booking.room_type,
        check_in = booking.check_in.format("%m/%d/%Y"),
        check_out = booking.check_out.format("%m/%d/%Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn message_contains_all_booking_details() {
        let booking = Booking {
            id: 7,
            room: "203".to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, 7, 4).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
            guest_name: "Maya Lindqvist".to_string(),
            room_type: "Twin".to_string(),
            check_in_meter: Some(420),
            check_out_meter: None,
            phone_number: "+46701234567".to_string(),
        };

        let message = format_booking_message(&booking);
        assert_eq!(
            message,
            "Hello Maya Lindqvist, your booking details are as follows:\n\
             Room: 203\n\
             Room Type: Twin\n\
             Check-In: 07/04/2024\n\
             Check-Out: 07/09/2024\n"
        );
    }
}
