use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{
    channel::ChannelType,
    demographic::EndpointDemographic,
    insert_entry,
    location::EndpointLocation,
    render::{DebugFields, MapDisplay},
    structural::{float_map_eq, FloatMap, StructuralHash},
    user::EndpointUser,
    Error,
};

/// Request to create or update a messaging endpoint.
///
/// Every field is optional and absence is kept distinct from an empty
/// value: a cleared attribute map is `None`, not `Some({})`. The request is
/// a passive payload; nothing here is validated beyond its type.
///
/// ```
/// use endpoint_model::{ChannelType, EndpointRequest};
///
/// let request = EndpointRequest::new()
///     .with_address("+12065550100")
///     .with_channel_type(ChannelType::Sms);
///
/// assert_eq!(request.to_string(), "{Address: +12065550100,ChannelType: SMS}");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRequest {
    /// Token, phone number or email address, depending on the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attributes: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel_type: Option<ChannelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    demographic: Option<EndpointDemographic>,
    /// ISO-8601 timestamp, kept as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    effective_date: Option<String>,
    /// Not used by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    endpoint_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<EndpointLocation>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::wire::opt_float_map"
    )]
    metrics: Option<BTreeMap<String, f64>>,
    /// `ALL` or `NONE` by convention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    opt_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<EndpointUser>,
}

impl EndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    string_field!(address, set_address, with_address);

    ref_field!(
        attributes,
        set_attributes,
        with_attributes,
        BTreeMap<String, Vec<String>>
    );

    /// Adds one attribute, creating the map if needed.
    ///
    /// Fails without touching the request if `key` is already present.
    pub fn add_attributes_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self, Error> {
        insert_entry(&mut self.attributes, "Attributes", key.into(), values)?;
        Ok(self)
    }

    /// Resets attributes to absent.
    pub fn clear_attributes_entries(&mut self) -> &mut Self {
        self.attributes = None;
        self
    }

    pub fn channel_type(&self) -> Option<&ChannelType> {
        self.channel_type.as_ref()
    }

    pub fn set_channel_type(&mut self, channel_type: Option<ChannelType>) {
        self.channel_type = channel_type;
    }

    /// Accepts a [`ChannelType`] or its raw wire string.
    #[must_use]
    pub fn with_channel_type(mut self, channel_type: impl Into<ChannelType>) -> Self {
        self.channel_type = Some(channel_type.into());
        self
    }

    ref_field!(demographic, set_demographic, with_demographic, EndpointDemographic);
    string_field!(effective_date, set_effective_date, with_effective_date);
    string_field!(endpoint_status, set_endpoint_status, with_endpoint_status);
    ref_field!(location, set_location, with_location, EndpointLocation);
    ref_field!(metrics, set_metrics, with_metrics, BTreeMap<String, f64>);

    /// Adds one metric, creating the map if needed.
    ///
    /// Fails without touching the request if `key` is already present.
    pub fn add_metrics_entry(
        &mut self,
        key: impl Into<String>,
        value: f64,
    ) -> Result<&mut Self, Error> {
        insert_entry(&mut self.metrics, "Metrics", key.into(), value)?;
        Ok(self)
    }

    /// Resets metrics to absent.
    pub fn clear_metrics_entries(&mut self) -> &mut Self {
        self.metrics = None;
        self
    }

    string_field!(opt_out, set_opt_out, with_opt_out);
    string_field!(request_id, set_request_id, with_request_id);
    ref_field!(user, set_user, with_user, EndpointUser);

    /// Polynomial (×31) combination of the per-field hashes in declaration
    /// order. Absent fields contribute `0`.
    pub fn structural_hash(&self) -> u64 {
        StructuralHash::new()
            .field(self.address())
            .field(self.attributes())
            .field(self.channel_type())
            .field(self.demographic())
            .field(self.effective_date())
            .field(self.endpoint_status())
            .field(self.location())
            .field(self.metrics().map(FloatMap).as_ref())
            .field(self.opt_out())
            .field(self.request_id())
            .field(self.user())
            .finish()
    }
}

impl PartialEq for EndpointRequest {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
            && self.attributes == other.attributes
            && self.channel_type == other.channel_type
            && self.demographic == other.demographic
            && self.effective_date == other.effective_date
            && self.endpoint_status == other.endpoint_status
            && self.location == other.location
            && float_map_eq(self.metrics(), other.metrics())
            && self.opt_out == other.opt_out
            && self.request_id == other.request_id
            && self.user == other.user
    }
}

impl Eq for EndpointRequest {}

impl Hash for EndpointRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}

impl fmt::Display for EndpointRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugFields::new(f)?
            .field("Address", self.address())?
            .field("Attributes", self.attributes().map(MapDisplay).as_ref())?
            .field("ChannelType", self.channel_type())?
            .field("Demographic", self.demographic())?
            .field("EffectiveDate", self.effective_date())?
            .field("EndpointStatus", self.endpoint_status())?
            .field("Location", self.location())?
            .field("Metrics", self.metrics().map(MapDisplay).as_ref())?
            .field("OptOut", self.opt_out())?
            .field("RequestId", self.request_id())?
            .field("User", self.user())?
            .finish()
    }
}
