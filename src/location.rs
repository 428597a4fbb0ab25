use std::{
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{
    render::{DebugFields, Float},
    structural::opt_bits,
};

/// Geographic attributes of an endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city: Option<String>,
    /// ISO 3166-1 alpha-2 or alpha-3 code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::opt_float"
    )]
    latitude: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::opt_float"
    )]
    longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    region: Option<String>,
}

impl EndpointLocation {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(city, set_city, with_city);
    string_field!(country, set_country, with_country);
    copy_field!(latitude, set_latitude, with_latitude, f64);
    copy_field!(longitude, set_longitude, with_longitude, f64);
    string_field!(postal_code, set_postal_code, with_postal_code);
    string_field!(region, set_region, with_region);
}

impl PartialEq for EndpointLocation {
    fn eq(&self, other: &Self) -> bool {
        self.city == other.city
            && self.country == other.country
            && opt_bits(self.latitude) == opt_bits(other.latitude)
            && opt_bits(self.longitude) == opt_bits(other.longitude)
            && self.postal_code == other.postal_code
            && self.region == other.region
    }
}

impl Eq for EndpointLocation {}

impl Hash for EndpointLocation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.city.hash(state);
        self.country.hash(state);
        opt_bits(self.latitude).hash(state);
        opt_bits(self.longitude).hash(state);
        self.postal_code.hash(state);
        self.region.hash(state);
    }
}

impl fmt::Display for EndpointLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugFields::new(f)?
            .field("City", self.city())?
            .field("Country", self.country())?
            .field("Latitude", self.latitude.map(Float).as_ref())?
            .field("Longitude", self.longitude.map(Float).as_ref())?
            .field("PostalCode", self.postal_code())?
            .field("Region", self.region())?
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seattle() -> EndpointLocation {
        EndpointLocation::new()
            .with_city("Seattle")
            .with_country("US")
            .with_latitude(47.6062)
            .with_longitude(-122.3321)
    }

    #[test]
    fn renders_coordinates() {
        assert_eq!(
            seattle().to_string(),
            "{City: Seattle,Country: US,Latitude: 47.6062,Longitude: -122.3321}"
        );
    }

    #[test]
    fn nan_coordinates_stay_reflexive() {
        let location = EndpointLocation::new().with_latitude(f64::NAN);

        assert_eq!(location, location.clone());
    }

    #[test]
    fn differing_coordinate_breaks_equality() {
        let mut moved = seattle();
        moved.set_longitude(Some(-122.0));

        assert_ne!(seattle(), moved);
    }

    #[test]
    fn whole_coordinates_keep_fraction() {
        let location = EndpointLocation::new().with_latitude(10.0);

        assert_eq!(location.to_string(), "{Latitude: 10.0}");
    }

    #[test]
    fn non_finite_coordinates_round_trip() {
        let location = EndpointLocation::new()
            .with_latitude(f64::INFINITY)
            .with_longitude(f64::NAN);

        let json = serde_json::to_string(&location).unwrap();
        assert_eq!(json, r#"{"latitude":"Infinity","longitude":"NaN"}"#);

        let decoded: EndpointLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, location);
    }

    #[test]
    fn rejects_unknown_float_string() {
        assert!(serde_json::from_str::<EndpointLocation>(r#"{"latitude":"north"}"#).is_err());
    }

    #[test]
    fn deserializes_partial_document() {
        let location: EndpointLocation =
            serde_json::from_str(r#"{"postalCode":"98101","latitude":47.61}"#).unwrap();

        assert_eq!(location.postal_code(), Some("98101"));
        assert_eq!(location.latitude(), Some(47.61));
        assert_eq!(location.city(), None);
    }
}
