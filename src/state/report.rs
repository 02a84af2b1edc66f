//! SSO session report types.
//!
//! Mirrors the JSON document served by the CAS `getSsoSessions` status
//! endpoint. Unknown fields are ignored and missing ones fall back to their
//! zero values.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Snapshot of the active SSO sessions on a CAS server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SsoSessionReport {
    /// Number of distinct authenticated principals.
    ///
    /// This count, not the length of `active_sso_sessions`, decides whether
    /// the server has any sessions at all.
    pub total_principals: u64,
    /// Active sessions in the order the server listed them.
    #[serde(deserialize_with = "null_as_empty")]
    pub active_sso_sessions: Vec<ActiveSession>,
}

impl SsoSessionReport {
    /// Whether the server reported any authenticated principal.
    #[must_use]
    pub const fn has_sessions(&self) -> bool {
        self.total_principals > 0
    }
}

/// One principal's active login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ActiveSession {
    /// Authenticated principal identifier.
    pub authenticated_principal: String,
    /// Authentication timestamp, already formatted by the server.
    #[serde(rename = "authentication_date_formatted")]
    pub authentication_date: String,
    /// How many times the session granted a service ticket.
    pub number_of_uses: u64,
    /// Services that consumed this session, keyed by ticket id.
    #[serde(deserialize_with = "ordered_services")]
    pub authenticated_services: Vec<(String, AuthenticatedService)>,
}

impl ActiveSession {
    /// Original URLs of the services that consumed this session.
    pub fn service_urls(&self) -> impl Iterator<Item = &str> {
        self.authenticated_services
            .iter()
            .map(|(_, service)| service.original_url.as_str())
    }
}

/// A downstream service that consumed an SSO session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthenticatedService {
    /// URL the service was originally accessed with.
    #[serde(rename = "originalUrl", alias = "OriginalUrl")]
    pub original_url: String,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode the services object into pairs, keeping document order.
///
/// A key repeated within the object keeps its last value in the position of
/// its first occurrence.
fn ordered_services<'de, D>(
    deserializer: D,
) -> Result<Vec<(String, AuthenticatedService)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ServicesVisitor;

    impl<'de> Visitor<'de> for ServicesVisitor {
        type Value = Vec<(String, AuthenticatedService)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of authenticated services or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_some<Inner>(self, deserializer: Inner) -> Result<Self::Value, Inner::Error>
        where
            Inner: Deserializer<'de>,
        {
            deserializer.deserialize_map(self)
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut services: Vec<(String, AuthenticatedService)> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, service)) =
                access.next_entry::<String, AuthenticatedService>()?
            {
                match services.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = service,
                    None => services.push((key, service)),
                }
            }
            Ok(services)
        }
    }

    deserializer.deserialize_option(ServicesVisitor)
}
