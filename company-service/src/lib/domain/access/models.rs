use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::access::errors::RoleError;
use crate::domain::identity::models::Username;

/// Named permission grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    /// Accepts `ADMIN`/`USER`, with or without a `ROLE_` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix("ROLE_").unwrap_or(s) {
            "ADMIN" => Ok(Role::Admin),
            "USER" => Ok(Role::User),
            _ => Err(RoleError::Unknown(s.to_string())),
        }
    }
}

/// Non-empty set of roles held by an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// # Errors
    /// * `Empty` - No roles given
    pub fn new(roles: impl IntoIterator<Item = Role>) -> Result<Self, RoleError> {
        let roles: BTreeSet<Role> = roles.into_iter().collect();
        if roles.is_empty() {
            Err(RoleError::Empty)
        } else {
            Ok(Self(roles))
        }
    }

    pub fn of(role: Role) -> Self {
        Self(BTreeSet::from([role]))
    }

    /// Parse role names as stored or carried in a token.
    ///
    /// # Errors
    /// * `Unknown` - A name is not a known role
    /// * `Empty` - No names given
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, RoleError> {
        let roles = names
            .iter()
            .map(|name| name.as_ref().parse::<Role>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(roles)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|role| role.as_str().to_string()).collect()
    }
}

/// Caller identity established from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub username: Username,
    pub roles: RoleSet,
}
