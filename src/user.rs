use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    insert_entry,
    render::{DebugFields, MapDisplay},
    Error,
};

/// The user an endpoint belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_attributes: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl EndpointUser {
    pub fn new() -> Self {
        Self::default()
    }

    ref_field!(
        user_attributes,
        set_user_attributes,
        with_user_attributes,
        BTreeMap<String, Vec<String>>
    );
    string_field!(user_id, set_user_id, with_user_id);

    pub fn add_user_attributes_entry(
        &mut self,
        key: impl Into<String>,
        values: Vec<String>,
    ) -> Result<&mut Self, Error> {
        insert_entry(&mut self.user_attributes, "UserAttributes", key.into(), values)?;
        Ok(self)
    }

    pub fn clear_user_attributes_entries(&mut self) -> &mut Self {
        self.user_attributes = None;
        self
    }
}

impl fmt::Display for EndpointUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugFields::new(f)?
            .field("UserAttributes", self.user_attributes().map(MapDisplay).as_ref())?
            .field("UserId", self.user_id())?
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_user_attribute_is_rejected() -> Result<(), Error> {
        let mut user = EndpointUser::new().with_user_id("user-42");
        user.add_user_attributes_entry("plan", vec!["pro".to_string()])?;

        let error = user
            .add_user_attributes_entry("plan", vec!["free".to_string()])
            .unwrap_err();

        assert!(matches!(error, Error::DuplicateKey { map: "UserAttributes", .. }));
        assert_eq!(user.user_attributes().unwrap()["plan"], vec!["pro".to_string()]);

        Ok(())
    }

    #[test]
    fn renders_attributes_and_id() -> Result<(), Error> {
        let mut user = EndpointUser::new().with_user_id("user-42");
        user.add_user_attributes_entry("plan", vec!["pro".to_string()])?;

        assert_eq!(user.to_string(), "{UserAttributes: {plan=[pro]},UserId: user-42}");

        user.clear_user_attributes_entries();
        assert_eq!(user.to_string(), "{UserId: user-42}");

        Ok(())
    }
}
