use std::{
    convert::Infallible,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Delivery channel of an endpoint.
///
/// Values the service adds later than this crate knows about are kept
/// verbatim in [`ChannelType::Unknown`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChannelType {
    Push,
    Gcm,
    Apns,
    ApnsSandbox,
    ApnsVoip,
    ApnsVoipSandbox,
    Adm,
    Sms,
    Voice,
    Email,
    Baidu,
    Custom,
    Unknown(String),
}

impl ChannelType {
    pub fn as_str(&self) -> &str {
        match self {
            ChannelType::Push => "PUSH",
            ChannelType::Gcm => "GCM",
            ChannelType::Apns => "APNS",
            ChannelType::ApnsSandbox => "APNS_SANDBOX",
            ChannelType::ApnsVoip => "APNS_VOIP",
            ChannelType::ApnsVoipSandbox => "APNS_VOIP_SANDBOX",
            ChannelType::Adm => "ADM",
            ChannelType::Sms => "SMS",
            ChannelType::Voice => "VOICE",
            ChannelType::Email => "EMAIL",
            ChannelType::Baidu => "BAIDU",
            ChannelType::Custom => "CUSTOM",
            ChannelType::Unknown(value) => value,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ChannelType::Unknown(_))
    }
}

impl From<&str> for ChannelType {
    fn from(value: &str) -> Self {
        match value {
            "PUSH" => ChannelType::Push,
            "GCM" => ChannelType::Gcm,
            "APNS" => ChannelType::Apns,
            "APNS_SANDBOX" => ChannelType::ApnsSandbox,
            "APNS_VOIP" => ChannelType::ApnsVoip,
            "APNS_VOIP_SANDBOX" => ChannelType::ApnsVoipSandbox,
            "ADM" => ChannelType::Adm,
            "SMS" => ChannelType::Sms,
            "VOICE" => ChannelType::Voice,
            "EMAIL" => ChannelType::Email,
            "BAIDU" => ChannelType::Baidu,
            "CUSTOM" => ChannelType::Custom,
            other => ChannelType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ChannelType {
    fn from(value: String) -> Self {
        match ChannelType::from(value.as_str()) {
            ChannelType::Unknown(_) => ChannelType::Unknown(value),
            known => known,
        }
    }
}

impl From<ChannelType> for String {
    fn from(value: ChannelType) -> Self {
        match value {
            ChannelType::Unknown(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ChannelType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Compared by wire string so `Unknown("SMS")` and `Sms` are the same channel.
impl PartialEq for ChannelType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ChannelType {}

impl Hash for ChannelType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("SMS", ChannelType::Sms)]
    #[case("APNS_VOIP_SANDBOX", ChannelType::ApnsVoipSandbox)]
    #[case("GCM", ChannelType::Gcm)]
    #[case("IN_APP", ChannelType::Unknown("IN_APP".to_string()))]
    fn parses_wire_value(#[case] raw: &str, #[case] expected: ChannelType) {
        let parsed: ChannelType = raw.parse().unwrap();

        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn unknown_matching_known_value_is_equal() {
        assert_eq!(ChannelType::Unknown("SMS".to_string()), ChannelType::Sms);
        assert_ne!(ChannelType::Unknown("sms".to_string()), ChannelType::Sms);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ChannelType::Email).unwrap();
        assert_eq!(json, "\"EMAIL\"");

        let unknown: ChannelType = serde_json::from_str("\"CARRIER_PIGEON\"").unwrap();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.as_str(), "CARRIER_PIGEON");
    }
}
