use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::access::models::AuthenticatedIdentity;
use crate::domain::access::models::Role;
use crate::domain::access::models::RoleSet;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::BootstrapAdminCommand;
use crate::domain::identity::models::Credentials;
use crate::domain::identity::models::Password;
use crate::domain::identity::models::RegisterUserCommand;
use crate::domain::identity::models::User;
use crate::domain::identity::models::UserId;
use crate::domain::identity::models::Username;
use crate::domain::identity::ports::IdentityServicePort;
use crate::domain::identity::ports::RegistrationNotifier;
use crate::domain::identity::ports::UserRepository;
use crate::domain::uniqueness::ensure_unique;
use crate::domain::uniqueness::UniqueField;
use crate::domain::values::EmailAddress;
use crate::domain::values::PersonName;

/// Domain service implementation for identity operations.
pub struct IdentityService<UR, RN>
where
    UR: UserRepository,
    RN: RegistrationNotifier,
{
    repository: Arc<UR>,
    notifier: Arc<RN>,
    authenticator: Arc<Authenticator>,
}

impl<UR, RN> IdentityService<UR, RN>
where
    UR: UserRepository,
    RN: RegistrationNotifier,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `notifier` - Registration confirmation channel
    /// * `authenticator` - Password hashing and verification
    pub fn new(repository: Arc<UR>, notifier: Arc<RN>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            notifier,
            authenticator,
        }
    }

    async fn ensure_available(
        &self,
        username: &Username,
        email: &EmailAddress,
    ) -> Result<(), IdentityError> {
        let holder = self
            .repository
            .find_by_username(username.as_str())
            .await?
            .map(|user| user.id);
        ensure_unique::<UserId>(UniqueField::Username, username.as_str(), holder, None)?;

        let holder = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .map(|user| user.id);
        ensure_unique::<UserId>(UniqueField::UserEmail, email.as_str(), holder, None)?;

        Ok(())
    }

    fn hash(&self, password: &Password) -> Result<String, IdentityError> {
        Ok(self.authenticator.hash_password(password.expose())?)
    }
}

#[async_trait]
impl<UR, RN> IdentityServicePort for IdentityService<UR, RN>
where
    UR: UserRepository,
    RN: RegistrationNotifier,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, IdentityError> {
        self.ensure_available(&command.username, &command.email)
            .await?;

        let user = User {
            id: UserId::new(),
            password_hash: self.hash(&command.password)?,
            username: command.username,
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            roles: RoleSet::of(Role::User),
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::info!(user_id = %created.id, username = %created.username, "User registered");

        if let Err(e) = self.notifier.registration_confirmed(&created).await {
            tracing::error!(
                "Failed to send registration confirmation for user {}: {}",
                created.id,
                e
            );
        }

        Ok(created)
    }

    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<AuthenticatedIdentity, IdentityError> {
        let user = self
            .repository
            .find_by_username(&credentials.username)
            .await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.as_str());
        match self
            .authenticator
            .verify_credentials(&credentials.password, stored_hash)
        {
            Ok(()) => {}
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::warn!(username = %credentials.username, "Rejected login attempt");
                return Err(IdentityError::InvalidCredentials);
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(username = %credentials.username, "Stored password hash is unusable: {}", e);
                return Err(IdentityError::Password(e));
            }
            Err(AuthenticationError::JwtError(e)) => {
                return Err(IdentityError::Unknown(e.to_string()));
            }
        }

        let user = user.ok_or(IdentityError::InvalidCredentials)?;
        tracing::info!(username = %user.username, "User authenticated");

        Ok(AuthenticatedIdentity {
            username: user.username,
            roles: user.roles,
        })
    }

    async fn bootstrap_admin(&self, command: BootstrapAdminCommand) -> Result<User, IdentityError> {
        if let Some(existing) = self
            .repository
            .find_by_username(command.username.as_str())
            .await?
        {
            tracing::info!(username = %existing.username, "Administrator account already present");
            return Ok(existing);
        }

        self.ensure_available(&command.username, &command.email)
            .await?;

        let admin_name = PersonName::new(Some("Admin".to_string()))
            .map_err(|e| IdentityError::Unknown(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            password_hash: self.hash(&command.password)?,
            username: command.username,
            email: command.email,
            first_name: admin_name.clone(),
            last_name: admin_name,
            roles: RoleSet::new([Role::Admin, Role::User])
                .map_err(|e| IdentityError::Unknown(e.to_string()))?,
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;
        tracing::info!(username = %created.username, "Administrator account created");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::identity::errors::NotificationError;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, IdentityError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityError>;
        }
    }

    mock! {
        pub TestNotifier {}

        #[async_trait]
        impl RegistrationNotifier for TestNotifier {
            async fn registration_confirmed(&self, user: &User) -> Result<(), NotificationError>;
        }
    }

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET))
    }

    fn register_command() -> RegisterUserCommand {
        RegisterUserCommand {
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com").unwrap(),
            password: Password::new("password123".to_string()).unwrap(),
            first_name: PersonName::new(Some("Alice".to_string())).unwrap(),
            last_name: PersonName::new(Some("Smith".to_string())).unwrap(),
        }
    }

    fn stored_user(authenticator: &Authenticator, password: &str) -> User {
        User {
            id: UserId::new(),
            username: Username::new("alice".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com").unwrap(),
            password_hash: authenticator.hash_password(password).unwrap(),
            first_name: PersonName::new(Some("Alice".to_string())).unwrap(),
            last_name: PersonName::new(Some("Smith".to_string())).unwrap(),
            roles: RoleSet::of(Role::User),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestUserRepository::new();
        let mut notifier = MockTestNotifier::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "alice"
                    && user.password_hash.starts_with("$argon2")
                    && user.roles == RoleSet::of(Role::User)
            })
            .times(1)
            .returning(Ok);
        notifier
            .expect_registration_confirmed()
            .times(1)
            .returning(|_| Ok(()));

        let service = IdentityService::new(Arc::new(repository), Arc::new(notifier), authenticator());

        let user = service.register(register_command()).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_ne!(user.password_hash, "password123");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();
        let mut notifier = MockTestNotifier::new();
        let existing = stored_user(&Authenticator::new(SECRET), "whatever1");

        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);
        notifier.expect_registration_confirmed().times(0);

        let service = IdentityService::new(Arc::new(repository), Arc::new(notifier), authenticator());

        let result = service.register(register_command()).await;
        match result {
            Err(IdentityError::Conflict(conflict)) => {
                assert_eq!(conflict.field, UniqueField::Username);
                assert_eq!(conflict.value, "alice");
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestUserRepository::new();
        let notifier = MockTestNotifier::new();
        let existing = stored_user(&Authenticator::new(SECRET), "whatever1");

        repository
            .expect_find_by_username()
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = IdentityService::new(Arc::new(repository), Arc::new(notifier), authenticator());

        let result = service.register(register_command()).await;
        assert!(matches!(
            result,
            Err(IdentityError::Conflict(ref c)) if c.field == UniqueField::UserEmail
        ));
    }

    #[tokio::test]
    async fn test_register_survives_notification_failure() {
        let mut repository = MockTestUserRepository::new();
        let mut notifier = MockTestNotifier::new();

        repository.expect_find_by_username().returning(|_| Ok(None));
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository.expect_create().times(1).returning(Ok);
        notifier
            .expect_registration_confirmed()
            .times(1)
            .returning(|_| Err(NotificationError::DeliveryFailed("smtp down".to_string())));

        let service = IdentityService::new(Arc::new(repository), Arc::new(notifier), authenticator());

        assert!(service.register(register_command()).await.is_ok());
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let authenticator = authenticator();
        let mut repository = MockTestUserRepository::new();
        let user = stored_user(&authenticator, "password123");

        repository
            .expect_find_by_username()
            .withf(|username| username == "alice")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(MockTestNotifier::new()),
            authenticator,
        );

        let identity = service
            .authenticate(Credentials {
                username: "alice".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(identity.username.as_str(), "alice");
        assert!(identity.roles.contains(Role::User));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password_and_unknown_user_look_the_same() {
        let authenticator = authenticator();
        let mut repository = MockTestUserRepository::new();
        let user = stored_user(&authenticator, "password123");

        repository
            .expect_find_by_username()
            .returning(move |username| {
                if username == "alice" {
                    Ok(Some(user.clone()))
                } else {
                    Ok(None)
                }
            });

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(MockTestNotifier::new()),
            authenticator,
        );

        let wrong_password = service
            .authenticate(Credentials {
                username: "alice".to_string(),
                password: "wrongpass".to_string(),
            })
            .await;
        let unknown_user = service
            .authenticate(Credentials {
                username: "mallory".to_string(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(wrong_password, Err(IdentityError::InvalidCredentials)));
        assert!(matches!(unknown_user, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_bootstrap_admin_creates_admin() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_find_by_username().returning(|_| Ok(None));
        repository.expect_find_by_email().returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|user| user.roles.contains(Role::Admin) && user.roles.contains(Role::User))
            .times(1)
            .returning(Ok);

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(MockTestNotifier::new()),
            authenticator(),
        );

        let admin = service
            .bootstrap_admin(BootstrapAdminCommand {
                username: Username::new("admin".to_string()).unwrap(),
                email: EmailAddress::new("admin@example.com").unwrap(),
                password: Password::new("changeme".to_string()).unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(admin.username.as_str(), "admin");
    }

    #[tokio::test]
    async fn test_bootstrap_admin_is_idempotent() {
        let mut repository = MockTestUserRepository::new();
        let existing = stored_user(&Authenticator::new(SECRET), "password123");

        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_create().times(0);

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(MockTestNotifier::new()),
            authenticator(),
        );

        let result = service
            .bootstrap_admin(BootstrapAdminCommand {
                username: Username::new("alice".to_string()).unwrap(),
                email: EmailAddress::new("alice@example.com").unwrap(),
                password: Password::new("changeme".to_string()).unwrap(),
            })
            .await;

        assert!(result.is_ok());
    }
}
