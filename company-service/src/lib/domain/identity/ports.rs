use async_trait::async_trait;

use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::errors::NotificationError;
use crate::domain::identity::models::BootstrapAdminCommand;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;

/// Port for identity operations: registration and credential verification.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new identity with the default `USER` role.
    ///
    /// # Errors
    /// * `Conflict` - Username or email already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, IdentityError>;

    /// Verify credentials and return the identity they prove.
    ///
    /// Unknown username and wrong password are indistinguishable.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<AuthenticatedIdentity, IdentityError>;

    /// Ensure an administrator account exists; an existing username is left untouched.
    ///
    /// # Errors
    /// * `Conflict` - Email already belongs to another identity
    /// * `DatabaseError` - Database operation failed
    async fn bootstrap_admin(&self, command: BootstrapAdminCommand) -> Result<User, IdentityError>;
}

/// Persistence operations for identities.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Errors
    /// * `Conflict` - Username or email violates a unique constraint
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, IdentityError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityError>;
}

/// Outbound registration confirmation.
#[async_trait]
pub trait RegistrationNotifier: Send + Sync + 'static {
    /// # Errors
    /// * `DeliveryFailed` - The message could not be handed over
    async fn registration_confirmed(&self, user: &User) -> Result<(), NotificationError>;
}
