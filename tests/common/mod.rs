//! Mock gateway implementation shared by the integration tests.

use mockall::mock;

use bookify_portal::domain::geo::Coordinates;
use bookify_portal::domain::hotel::HotelSummary;
use bookify_portal::domain::profile::{ImageUpload, UpdateProfile, UserProfile};
use bookify_portal::gateway::errors::GatewayResult;
use bookify_portal::gateway::{GeocodeApi, HotelSearchApi, NearbyQuery, ProfileApi};

mock! {
    pub Gateway {}

    impl GeocodeApi for Gateway {
        async fn resolve(&self, location: &str) -> GatewayResult<Option<Coordinates>>;
    }

    impl HotelSearchApi for Gateway {
        async fn nearby(&self, query: NearbyQuery) -> GatewayResult<Vec<HotelSummary>>;
    }

    impl ProfileApi for Gateway {
        async fn fetch_profile(&self, token: &str) -> GatewayResult<UserProfile>;
        async fn update_profile(
            &self,
            token: &str,
            profile_id: &str,
            updates: &UpdateProfile,
            image: Option<ImageUpload>,
        ) -> GatewayResult<()>;
    }
}

/// Hotel fixture helper.
pub fn hotel(id: &str, name: &str, address: &str) -> HotelSummary {
    HotelSummary::new(id.to_string(), name.to_string(), address.to_string())
}
