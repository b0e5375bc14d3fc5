//! Directory collections exposed by the Graph API.

use crate::graph::error::Error;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Applications,
    Contacts,
    Contracts,
    Devices,
    DirectoryObjects,
    DirectoryRoles,
    DirectoryRoleTemplates,
    Domains,
    Groups,
    OAuth2PermissionGrants,
    ServicePrincipals,
    SubscribedSkus,
    TenantDetails,
    Users,
}

impl Resource {
    pub const ALL: [Self; 14] = [
        Self::Applications,
        Self::Contacts,
        Self::Contracts,
        Self::Devices,
        Self::DirectoryObjects,
        Self::DirectoryRoles,
        Self::DirectoryRoleTemplates,
        Self::Domains,
        Self::Groups,
        Self::OAuth2PermissionGrants,
        Self::ServicePrincipals,
        Self::SubscribedSkus,
        Self::TenantDetails,
        Self::Users,
    ];

    /// Path segment of the collection, relative to the tenant.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Applications => "applications",
            Self::Contacts => "contacts",
            Self::Contracts => "contracts",
            Self::Devices => "devices",
            Self::DirectoryObjects => "directoryObjects",
            Self::DirectoryRoles => "directoryRoles",
            Self::DirectoryRoleTemplates => "directoryRoleTemplates",
            Self::Domains => "domains",
            Self::Groups => "groups",
            Self::OAuth2PermissionGrants => "oauth2PermissionGrants",
            Self::ServicePrincipals => "servicePrincipals",
            Self::SubscribedSkus => "subscribedSkus",
            Self::TenantDetails => "tenantDetails",
            Self::Users => "users",
        }
    }

    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|r| r.path()).collect()
    }
}

impl FromStr for Resource {
    type Err = Error;

    /// Accepts the collection name (`users`) or its singular form (`user`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() {
            return Err(Error::endpoint("resource type must not be empty"));
        }

        Self::ALL
            .into_iter()
            .find(|r| {
                let path = r.path();
                path.eq_ignore_ascii_case(name)
                    || path
                        .strip_suffix('s')
                        .is_some_and(|singular| singular.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| Error::endpoint(format!("unknown resource type: {name}")))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::error::ErrorKind;

    #[test]
    fn parses_collection_and_singular_names() {
        assert_eq!("users".parse::<Resource>().ok(), Some(Resource::Users));
        assert_eq!("user".parse::<Resource>().ok(), Some(Resource::Users));
        assert_eq!("group".parse::<Resource>().ok(), Some(Resource::Groups));
        assert_eq!(
            "directoryRoleTemplates".parse::<Resource>().ok(),
            Some(Resource::DirectoryRoleTemplates)
        );
        assert_eq!(
            "servicePrincipal".parse::<Resource>().ok(),
            Some(Resource::ServicePrincipals)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["", "  ", "widgets", "user/"] {
            let err = name.parse::<Resource>().err();
            assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::Endpoint), "{name:?}");
        }
    }

    #[test]
    fn names_round_trip_through_display() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>().ok(), Some(resource));
        }
        assert_eq!(Resource::names().len(), Resource::ALL.len());
    }
}
