use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub district: String,
    pub address: String,
}

/// Host details shown alongside a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub rating: f64,
    pub reviews: u32,
    pub languages: Vec<String>,
    pub response_time: String,
    pub avatar: String,
}

/// Core property data model, as served by the backend.
///
/// The backend owns the lifecycle of these records; within a session the
/// client treats them as immutable and refetches the full list after an
/// admin write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Monthly rate, currency-less number paired with `currency`.
    pub price: f64,
    pub currency: String,
    pub location: Location,
    #[serde(rename = "type")]
    pub property_type: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: f64,
    pub amenities: Vec<String>,
    /// First image is the primary one.
    pub images: Vec<String>,
    pub host: Host,
    pub available: bool,
    /// Minimum stay in months. Invariant: `min_stay <= max_stay`.
    pub min_stay: u32,
    pub max_stay: u32,
}

/// Guest contact details on a booking request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub nationality: String,
}

/// Unit the guest expressed the stay duration in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Days,
    Weeks,
    Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StayDetails {
    pub move_in_date: NaiveDate,
    pub duration: u32,
    pub duration_type: DurationUnit,
}

/// Booking request sent to and returned by the backend.
/// `id` is assigned by the backend and absent on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub property_id: u64,
    pub guest_info: GuestInfo,
    pub stay_details: StayDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_uses_backend_field_names() {
        let value = json!({
            "id": 7,
            "title": "Riverside Studio",
            "description": "Bright studio near the river",
            "price": 650,
            "currency": "USD",
            "location": {
                "city": "Bangkok",
                "district": "Sathorn",
                "address": "12 Riverside Rd"
            },
            "type": "Studio",
            "bedrooms": 0,
            "bathrooms": 1,
            "area": 32.5,
            "amenities": ["WiFi", "Air Conditioning"],
            "images": ["https://img.example/7-1.jpg"],
            "host": {
                "name": "Nok",
                "rating": 4.8,
                "reviews": 112,
                "languages": ["English", "Thai"],
                "responseTime": "within an hour",
                "avatar": "https://img.example/host-nok.jpg"
            },
            "available": true,
            "minStay": 1,
            "maxStay": 12
        });

        let property: Property = serde_json::from_value(value).unwrap();
        assert_eq!(property.property_type, "Studio");
        assert_eq!(property.min_stay, 1);
        assert_eq!(property.max_stay, 12);
        assert_eq!(property.host.response_time, "within an hour");
        assert_eq!(property.location.district, "Sathorn");
    }

    #[test]
    fn new_booking_omits_backend_assigned_id() {
        let booking = BookingRequest {
            id: None,
            property_id: 7,
            guest_info: GuestInfo {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+66 555 0101".to_string(),
                nationality: "British".to_string(),
            },
            stay_details: StayDetails {
                move_in_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
                duration: 6,
                duration_type: DurationUnit::Months,
            },
            message: None,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("message").is_none());
        assert_eq!(value["propertyId"], 7);
        assert_eq!(value["stayDetails"]["durationType"], "months");
        assert_eq!(value["stayDetails"]["moveInDate"], "2026-10-01");
    }
}
