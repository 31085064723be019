//! Reverse geocoding for delivery-address enrichment.
//!
//! When the customer drops a map pin, the storefront sends coordinates
//! alongside whatever address fields they typed. If city or zip were left
//! blank we try to fill them from a reverse lookup. Lookup failure is
//! non-fatal: the address stays exactly as typed and normal validation
//! decides its fate.

use serde::Deserialize;

use cakebox_core::ordering::DeliveryAddress;

/// Nominatim-style reverse geocoding response (the fields we read).
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    postcode: Option<String>,
}

/// Reverse geocoding client. Disabled (every lookup yields `None`) when no
/// endpoint is configured.
pub struct ReverseGeocoder {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl ReverseGeocoder {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fill blank `city`/`zip` fields from the coordinates, when possible.
    ///
    /// Returns the address unchanged unless coordinates are present, a
    /// lookup endpoint is configured, the lookup succeeds, and a field was
    /// actually blank.
    pub async fn enrich(&self, mut address: DeliveryAddress) -> DeliveryAddress {
        let needs_city = address.city.trim().is_empty();
        let needs_zip = address.zip.trim().is_empty();
        if !needs_city && !needs_zip {
            return address;
        }

        let (Some(lat), Some(lng)) = (address.lat, address.lng) else {
            return address;
        };

        let Some(resolved) = self.reverse(lat, lng).await else {
            return address;
        };

        if needs_city {
            if let Some(city) = resolved.city.or(resolved.town).or(resolved.village) {
                address.city = city;
            }
        }
        if needs_zip {
            if let Some(postcode) = resolved.postcode {
                address.zip = postcode;
            }
        }
        address
    }

    /// One reverse lookup; any failure collapses to `None`.
    async fn reverse(&self, lat: f64, lng: f64) -> Option<ReverseAddress> {
        let base_url = self.base_url.as_ref()?;
        let url = format!("{base_url}/reverse?lat={lat}&lon={lng}&format=jsonv2");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(error = %e, "Reverse geocoding request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "Reverse geocoding rejected");
            return None;
        }

        match response.json::<ReverseResponse>().await {
            Ok(body) => body.address,
            Err(e) => {
                tracing::debug!(error = %e, "Unreadable reverse geocoding response");
                None
            }
        }
    }
}
