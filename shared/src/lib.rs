use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Entities rendered in a table expose the server-assigned id used for
/// reconciliation (replace/remove by key) and row keying.
pub trait Keyed {
    fn key(&self) -> i64;
}

/// A hotel as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    /// One-decimal rating, absent for unrated hotels
    pub rating: Option<f32>,
    /// Whether the hotel offers breakfast at all
    #[serde(default)]
    pub breakfast: bool,
}

impl Keyed for Hotel {
    fn key(&self) -> i64 {
        self.id
    }
}

/// Payload for creating a hotel (no id yet, the server assigns one).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub rating: Option<f32>,
    pub breakfast: bool,
}

/// PATCH payload for a hotel; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HotelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<bool>,
}

/// A room, always attached to a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub hotel_id: i64,
    /// Price per night
    pub price: f64,
    pub number_of_beds: i32,
}

impl Keyed for Room {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub hotel_id: i64,
    pub price: f64,
    pub number_of_beds: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_beds: Option<i32>,
}

/// A reservation. Dates are plain calendar dates (`YYYY-MM-DD`), no
/// timezone semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Owner of the booking, assigned server-side from the bearer token
    pub user_id: i64,
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nbr_people: i32,
    #[serde(default)]
    pub breakfast: bool,
}

impl Keyed for Booking {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub nbr_people: i32,
    pub breakfast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbr_people: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<bool>,
}

/// A user account. The password is write-only and never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Display name
    pub pseudo: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl Keyed for User {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub pseudo: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

/// Successful login body, the only place the token appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// A booking joined with its room and hotel for the my-bookings list.
/// Assembled client-side per view and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingStay {
    pub booking: Booking,
    pub hotel_name: String,
    pub hotel_address: String,
    pub price: f64,
    pub number_of_beds: i32,
}

impl Keyed for BookingStay {
    fn key(&self) -> i64 {
        self.booking.id
    }
}

impl BookingStay {
    pub fn assemble(booking: Booking, room: &Room, hotel: &Hotel) -> Self {
        Self {
            hotel_name: hotel.name.clone(),
            hotel_address: hotel.address.clone(),
            price: room.price,
            number_of_beds: room.number_of_beds,
            booking,
        }
    }
}

/// Fully enriched booking for the admin detail panel: the booking's own
/// dates plus the guest's pseudo and the hotel behind the room.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetails {
    pub booking: Booking,
    pub user_pseudo: String,
    pub hotel_name: String,
    pub hotel_address: String,
}

impl BookingDetails {
    pub fn assemble(booking: Booking, user: &User, hotel: &Hotel) -> Self {
        Self {
            user_pseudo: user.pseudo.clone(),
            hotel_name: hotel.name.clone(),
            hotel_address: hotel.address.clone(),
            booking,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel() -> Hotel {
        Hotel {
            id: 100,
            name: "Hotel California".into(),
            address: "42 Sunset Blvd".into(),
            description: Some("Such a lovely place".into()),
            rating: Some(4.5),
            breakfast: true,
        }
    }

    #[test]
    fn booking_deserializes_from_api_shape() {
        let json = r#"{
            "id": 7,
            "user_id": 1,
            "room_id": 1,
            "start_date": "2026-03-01",
            "end_date": "2026-03-05",
            "nbr_people": 2,
            "breakfast": true
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.key(), 7);
        assert_eq!(booking.start_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(booking.end_date.to_string(), "2026-03-05");
        assert!(booking.breakfast);
    }

    #[test]
    fn booking_breakfast_defaults_to_false_when_absent() {
        let json = r#"{
            "id": 8,
            "user_id": 1,
            "room_id": 2,
            "start_date": "2026-03-01",
            "end_date": "2026-03-02",
            "nbr_people": 1
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert!(!booking.breakfast);
    }

    #[test]
    fn update_payloads_skip_unset_fields() {
        let update = HotelUpdate {
            rating: Some(3.5),
            ..HotelUpdate::default()
        };
        let body = serde_json::to_string(&update).unwrap();
        assert_eq!(body, r#"{"rating":3.5}"#);

        let update = BookingUpdate {
            nbr_people: Some(3),
            breakfast: Some(false),
            ..BookingUpdate::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 2);
        assert!(body.get("start_date").is_none());
    }

    #[test]
    fn booking_update_dates_serialize_as_plain_dates() {
        let update = BookingUpdate {
            start_date: NaiveDate::from_ymd_opt(2026, 7, 14),
            ..BookingUpdate::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["start_date"], "2026-07-14");
    }

    #[test]
    fn booking_details_joins_user_and_hotel() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":1,"user_id":1,"room_id":1,
                "start_date":"2026-03-01","end_date":"2026-03-05",
                "nbr_people":2,"breakfast":false}"#,
        )
        .unwrap();
        let user = User {
            id: 1,
            email: "john@example.com".into(),
            pseudo: "JohnDoe".into(),
            is_admin: false,
        };
        let details = BookingDetails::assemble(booking, &user, &hotel());
        assert_eq!(details.user_pseudo, "JohnDoe");
        assert_eq!(details.hotel_name, "Hotel California");
        assert_eq!(details.booking.start_date.to_string(), "2026-03-01");
        assert_eq!(details.booking.end_date.to_string(), "2026-03-05");
    }

    #[test]
    fn booking_stay_carries_room_and_hotel_fields() {
        let booking: Booking = serde_json::from_str(
            r#"{"id":2,"user_id":1,"room_id":5,
                "start_date":"2026-01-10","end_date":"2026-01-12",
                "nbr_people":1,"breakfast":true}"#,
        )
        .unwrap();
        let room = Room {
            id: 5,
            hotel_id: 100,
            price: 120.0,
            number_of_beds: 2,
        };
        let stay = BookingStay::assemble(booking, &room, &hotel());
        assert_eq!(stay.key(), 2);
        assert_eq!(stay.hotel_name, "Hotel California");
        assert_eq!(stay.price, 120.0);
        assert_eq!(stay.number_of_beds, 2);
    }

    #[test]
    fn user_password_never_appears_in_responses() {
        let json = r#"{"id":3,"email":"a@b.c","pseudo":"abc","is_admin":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin);
        // and a response without the flag is a regular user
        let user: User =
            serde_json::from_str(r#"{"id":4,"email":"d@e.f","pseudo":"def"}"#).unwrap();
        assert!(!user.is_admin);
    }
}
