use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::DebugFields;

/// Device and locale information attached to an endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDemographic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    make: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_version: Option<String>,
    /// IANA zone name, e.g. `America/Los_Angeles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timezone: Option<String>,
}

impl EndpointDemographic {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(app_version, set_app_version, with_app_version);
    string_field!(locale, set_locale, with_locale);
    string_field!(make, set_make, with_make);
    string_field!(model, set_model, with_model);
    string_field!(model_version, set_model_version, with_model_version);
    string_field!(platform, set_platform, with_platform);
    string_field!(platform_version, set_platform_version, with_platform_version);
    string_field!(timezone, set_timezone, with_timezone);
}

impl fmt::Display for EndpointDemographic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugFields::new(f)?
            .field("AppVersion", self.app_version())?
            .field("Locale", self.locale())?
            .field("Make", self.make())?
            .field("Model", self.model())?
            .field("ModelVersion", self.model_version())?
            .field("Platform", self.platform())?
            .field("PlatformVersion", self.platform_version())?
            .field("Timezone", self.timezone())?
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_present_fields_in_order() {
        let demographic = EndpointDemographic::new()
            .with_timezone("Europe/Berlin")
            .with_platform("android")
            .with_make("Pixel");

        assert_eq!(
            demographic.to_string(),
            "{Make: Pixel,Platform: android,Timezone: Europe/Berlin}"
        );
    }

    #[test]
    fn wire_names_are_camel_case() {
        let demographic = EndpointDemographic::new()
            .with_app_version("1.2.0")
            .with_platform_version("14");

        let json = serde_json::to_value(&demographic).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "appVersion": "1.2.0", "platformVersion": "14" })
        );
    }

    #[test]
    fn setter_can_unset() {
        let mut demographic = EndpointDemographic::new().with_locale("en_US");
        demographic.set_locale(None);

        assert_eq!(demographic.locale(), None);
        assert_eq!(demographic, EndpointDemographic::new());
    }
}
