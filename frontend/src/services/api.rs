use futures_util::future::try_join_all;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Booking, BookingDetails, BookingStay, BookingUpdate, Hotel, HotelUpdate, LoginResponse,
    NewBooking, NewHotel, NewRoom, NewUser, Room, RoomUpdate, User, UserUpdate,
};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Failure of one API call, surfaced to the user as its display string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response; the message comes from the response body
    #[error("{message}")]
    Status { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Rejections that invalidate the session. Every screen applies the
    /// same policy: clear the token and return to the login screen.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Pull a human-readable message out of an error body. The backend emits
/// `{"detail": ...}` or `{"message": ...}` depending on the route; anything
/// else is shown verbatim.
fn error_message_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for field in ["message", "detail"] {
            if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    if body.trim().is_empty() {
        format!("request failed with status {}", status)
    } else {
        body.to_string()
    }
}

/// Query string for the hotel search endpoint. Empty name and address are
/// kept as empty parameters: that is the unfiltered listing the home
/// screen issues on first load.
fn search_query(name: &str, address: &str, limit: u32) -> String {
    format!(
        "name={}&address={}&limit={}",
        String::from(js_sys::encode_uri_component(name)),
        String::from(js_sys::encode_uri_component(address)),
        limit
    )
}

/// API client for the booking backend. Carries the base origin and, for
/// authenticated sessions, the bearer token attached to every request.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.ok() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: Response) -> ApiError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: error_message_from_body(status, &body),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::patch(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }

    // --- session ---

    /// Exchange credentials for a bearer token. The login endpoint takes a
    /// multipart form, not JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build login form".to_string()))?;
        form.append_with_str("username", username)
            .and_then(|_| form.append_with_str("password", password))
            .map_err(|_| ApiError::Network("could not build login form".to_string()))?;

        let response = Request::post(&self.url("/users/login"))
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::parse(response).await
    }

    // --- users ---

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        self.post_json("/users/", user).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json("/users/me").await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        self.get_json(&format!("/users/{}", id)).await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, ApiError> {
        self.patch_json(&format!("/users/{}", id), update).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }

    // --- hotels ---

    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, ApiError> {
        self.get_json("/hotels").await
    }

    pub async fn search_hotels(
        &self,
        name: &str,
        address: &str,
        limit: u32,
    ) -> Result<Vec<Hotel>, ApiError> {
        self.get_json(&format!(
            "/hotels/search?{}",
            search_query(name, address, limit)
        ))
        .await
    }

    pub async fn get_hotel(&self, id: i64) -> Result<Hotel, ApiError> {
        self.get_json(&format!("/hotels/{}", id)).await
    }

    pub async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        self.post_json("/hotels", hotel).await
    }

    pub async fn update_hotel(&self, id: i64, update: &HotelUpdate) -> Result<Hotel, ApiError> {
        self.patch_json(&format!("/hotels/{}", id), update).await
    }

    pub async fn delete_hotel(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/hotels/{}", id)).await
    }

    // --- rooms ---

    pub async fn rooms_for_hotel(&self, hotel_id: i64) -> Result<Vec<Room>, ApiError> {
        self.get_json(&format!("/rooms/hotel/{}", hotel_id)).await
    }

    pub async fn get_room(&self, id: i64) -> Result<Room, ApiError> {
        self.get_json(&format!("/rooms/{}", id)).await
    }

    pub async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.post_json("/rooms", room).await
    }

    pub async fn update_room(&self, id: i64, update: &RoomUpdate) -> Result<Room, ApiError> {
        self.patch_json(&format!("/rooms/{}", id), update).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/rooms/{}", id)).await
    }

    // --- bookings ---

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings").await
    }

    pub async fn bookings_for_user(&self, user_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get_json(&format!("/bookings/user/{}", user_id)).await
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.post_json("/bookings", booking).await
    }

    pub async fn update_booking(
        &self,
        id: i64,
        update: &BookingUpdate,
    ) -> Result<Booking, ApiError> {
        self.patch_json(&format!("/bookings/{}", id), update).await
    }

    pub async fn delete_booking(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/bookings/{}", id)).await
    }

    // --- chained fetches ---

    /// Room plus the hotel it belongs to. The room fetch failing aborts the
    /// chain before the hotel is requested.
    pub async fn room_with_hotel(&self, room_id: i64) -> Result<(Room, Hotel), ApiError> {
        let room = self.get_room(room_id).await?;
        let hotel = self.get_hotel(room.hotel_id).await?;
        Ok((room, hotel))
    }

    /// The current user's bookings, each enriched with its room and hotel.
    /// The sub-chains run together; the first failure abandons the whole
    /// enriched fetch.
    pub async fn stays_for_user(&self, user_id: i64) -> Result<Vec<BookingStay>, ApiError> {
        let bookings = self.bookings_for_user(user_id).await?;
        try_join_all(bookings.into_iter().map(|booking| async move {
            let (room, hotel) = self.room_with_hotel(booking.room_id).await?;
            Ok(BookingStay::assemble(booking, &room, &hotel))
        }))
        .await
    }

    /// Full enrichment for one booking: guest, room, and hotel.
    pub async fn booking_details(&self, booking: Booking) -> Result<BookingDetails, ApiError> {
        let user = self.get_user(booking.user_id).await?;
        let (_, hotel) = self.room_with_hotel(booking.room_id).await?;
        Ok(BookingDetails::assemble(booking, &user, &hotel))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_covers_401_and_403_only() {
        let unauthorized = ApiError::Status {
            status: 401,
            message: "Not authenticated".into(),
        };
        assert!(unauthorized.is_unauthorized());

        let forbidden = ApiError::Status {
            status: 403,
            message: "Admin only".into(),
        };
        assert!(forbidden.is_unauthorized());

        let not_found = ApiError::Status {
            status: 404,
            message: "Hotel not found".into(),
        };
        assert!(!not_found.is_unauthorized());
        assert!(!ApiError::Network("timeout".into()).is_unauthorized());
    }

    #[test]
    fn error_message_prefers_structured_fields() {
        assert_eq!(
            error_message_from_body(400, r#"{"message":"Email already taken"}"#),
            "Email already taken"
        );
        assert_eq!(
            error_message_from_body(404, r#"{"detail":"Hotel not found"}"#),
            "Hotel not found"
        );
        // message wins when both are present
        assert_eq!(
            error_message_from_body(400, r#"{"message":"a","detail":"b"}"#),
            "a"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status() {
        assert_eq!(
            error_message_from_body(500, "internal server error"),
            "internal server error"
        );
        assert_eq!(
            error_message_from_body(502, ""),
            "request failed with status 502"
        );
        // structured but not a string field: show the raw body
        assert_eq!(
            error_message_from_body(422, r#"{"detail":[{"loc":["body"]}]}"#),
            r#"{"detail":[{"loc":["body"]}]}"#
        );
    }

    #[test]
    fn status_error_display_is_the_message_alone() {
        let err = ApiError::Status {
            status: 404,
            message: "Hotel not found".into(),
        };
        assert_eq!(err.to_string(), "Hotel not found");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn empty_search_keeps_empty_parameters() {
        assert_eq!(search_query("", "", 10), "name=&address=&limit=10");
    }

    #[wasm_bindgen_test]
    fn search_query_percent_encodes_values() {
        assert_eq!(
            search_query("Hotel California", "Sunset & Vine", 5),
            "name=Hotel%20California&address=Sunset%20%26%20Vine&limit=5"
        );
    }
}
