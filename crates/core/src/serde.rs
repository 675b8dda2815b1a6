//! Serde helper functions for recipe payloads.
//!
//! Clients built against the first version of the API send `null` for
//! fields they leave empty. These helpers fold `null` into the field's
//! default value so absent, `null` and empty all decode the same way.

use serde::{Deserialize, Deserializer};

/// Deserialize a value, treating `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so a missing key also decodes to the
/// default.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
