#[macro_use]
mod accessors;
mod render;
mod structural;
mod wire;

pub mod channel;
pub mod demographic;
pub mod endpoint;
pub mod location;
pub mod user;

use std::collections::{btree_map::Entry, BTreeMap};

pub use channel::ChannelType;
pub use demographic::EndpointDemographic;
pub use endpoint::EndpointRequest;
pub use location::EndpointLocation;
pub use user::EndpointUser;

/// Opt the endpoint out of all messages.
pub const OPT_OUT_ALL: &str = "ALL";
/// Endpoint receives messages.
pub const OPT_OUT_NONE: &str = "NONE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A convenience insert hit a key that is already present.
    DuplicateKey { map: &'static str, key: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateKey { map, key } => {
                write!(f, "{map}: duplicated key '{key}' provided")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Inserts into a lazily created map, refusing to overwrite.
pub(crate) fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    name: &'static str,
    key: String,
    value: V,
) -> Result<(), Error> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(entry) => {
            tracing::debug!(map = name, key = %entry.key(), "rejected duplicate entry");

            Err(Error::DuplicateKey {
                map: name,
                key: entry.key().clone(),
            })
        }
        Entry::Vacant(entry) => {
            entry.insert(value);
            Ok(())
        }
    }
}
