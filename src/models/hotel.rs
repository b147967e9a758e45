//! Wire model for the backend's hotel objects.

use serde::Deserialize;

use crate::domain::hotel::HotelSummary;

/// Hotel object as returned by `/api/hotels/nearby`. The backend sends
/// more fields than the portal shows; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RemoteHotel {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl From<RemoteHotel> for HotelSummary {
    fn from(hotel: RemoteHotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            address: hotel.address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_hotel_and_ignores_extras() {
        let payload = r#"{
            "_id": "66b2f0c1",
            "name": "Hotel Lutetia",
            "address": "45 Boulevard Raspail",
            "pricePerNight": 420,
            "rating": 4.7
        }"#;

        let hotel: HotelSummary = serde_json::from_str::<RemoteHotel>(payload).unwrap().into();
        assert_eq!(
            hotel,
            HotelSummary::new(
                "66b2f0c1".to_string(),
                "Hotel Lutetia".to_string(),
                "45 Boulevard Raspail".to_string()
            )
        );
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let hotel: HotelSummary = serde_json::from_str::<RemoteHotel>(r#"{"_id": "x1"}"#)
            .unwrap()
            .into();
        assert_eq!(hotel.id, "x1");
        assert_eq!(hotel.name, "");
        assert_eq!(hotel.address, "");
    }
}
