use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::access::errors::TokenError;
use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::models::RoleSet;
use crate::domain::identity::models::Username;

const ROLES_CLAIM: &str = "roles";

/// Issues and validates signed, time-bounded bearer tokens.
///
/// Tokens carry the username in `sub` and the role names in a `roles` claim.
/// Validation performs no I/O.
pub struct TokenCodec {
    authenticator: Arc<Authenticator>,
    ttl: Duration,
}

impl TokenCodec {
    /// # Arguments
    /// * `authenticator` - Holds the shared signing secret
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(authenticator: Arc<Authenticator>, ttl: Duration) -> Self {
        Self { authenticator, ttl }
    }

    pub fn issue(&self, identity: &AuthenticatedIdentity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as of `issued_at`; it expires `ttl` later.
    ///
    /// # Errors
    /// * `IssueFailed` - Signing failed
    pub fn issue_at(
        &self,
        identity: &AuthenticatedIdentity,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims::for_subject(&identity.username, issued_at, self.ttl)
            .with_extra(ROLES_CLAIM, identity.roles.to_strings());

        self.authenticator
            .generate_token(&claims)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    /// Validate a token and recover the identity it was issued for.
    ///
    /// # Errors
    /// * `Invalid` - Malformed, wrongly signed or expired token, or missing
    ///   subject, expiry or role claims
    pub fn validate(&self, token: &str) -> Result<AuthenticatedIdentity, TokenError> {
        let claims: Claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        let subject = claims
            .sub
            .clone()
            .ok_or_else(|| TokenError::Invalid("missing subject".to_string()))?;
        let username = Username::new(subject).map_err(|e| TokenError::Invalid(e.to_string()))?;

        let role_names: Vec<String> = claims
            .extra_as(ROLES_CLAIM)
            .ok_or_else(|| TokenError::Invalid("missing roles claim".to_string()))?;
        let roles = RoleSet::parse(&role_names).map_err(|e| TokenError::Invalid(e.to_string()))?;

        Ok(AuthenticatedIdentity { username, roles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::models::Role;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn codec() -> TokenCodec {
        TokenCodec::new(Arc::new(Authenticator::new(SECRET)), Duration::hours(10))
    }

    fn identity() -> AuthenticatedIdentity {
        AuthenticatedIdentity {
            username: Username::new("alice".to_string()).unwrap(),
            roles: RoleSet::new([Role::Admin, Role::User]).unwrap(),
        }
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let codec = codec();

        let token = codec.issue(&identity()).unwrap();
        let validated = codec.validate(&token).unwrap();

        assert_eq!(validated, identity());
    }

    #[test]
    fn test_every_tampered_character_is_rejected() {
        let codec = codec();
        let token = codec.issue(&identity()).unwrap();

        for (index, original) in token.char_indices() {
            let replacement = if original == 'A' { 'B' } else { 'A' };
            let mut tampered = token.clone();
            tampered.replace_range(index..index + 1, &replacement.to_string());

            assert!(
                matches!(codec.validate(&tampered), Err(TokenError::Invalid(_))),
                "tampered position {} was accepted",
                index
            );
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let codec = codec();
        let issued_at = Utc::now() - Duration::hours(10) - Duration::seconds(1);

        let token = codec.issue_at(&identity(), issued_at).unwrap();

        assert!(matches!(codec.validate(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let other = TokenCodec::new(
            Arc::new(Authenticator::new(b"another_secret_key_at_least_32_bytes")),
            Duration::hours(10),
        );

        let token = other.issue(&identity()).unwrap();

        assert!(codec().validate(&token).is_err());
    }

    #[test]
    fn test_token_without_roles_is_rejected() {
        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_subject("alice", Utc::now(), Duration::hours(1));
        let token = authenticator.generate_token(&claims).unwrap();

        let result = codec().validate(&token);

        assert_eq!(
            result,
            Err(TokenError::Invalid("missing roles claim".to_string()))
        );
    }

    #[test]
    fn test_token_with_unknown_role_is_rejected() {
        let authenticator = Authenticator::new(SECRET);
        let claims = Claims::for_subject("alice", Utc::now(), Duration::hours(1))
            .with_extra(ROLES_CLAIM, vec!["SUPERUSER"]);
        let token = authenticator.generate_token(&claims).unwrap();

        assert!(codec().validate(&token).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(codec().validate("").is_err());
        assert!(codec().validate("not.a.token").is_err());
    }
}
