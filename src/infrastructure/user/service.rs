//! Auth service for registration and login

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::auth::JwtService;

use super::password::PasswordHasher;

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful login: the session token and the public profile.
/// The profile never carries the password hash.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: User,
}

/// Orchestrates registration (hash + persist) and login
/// (fetch + verify + issue token).
#[derive(Debug)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self { users, hasher, jwt }
    }

    /// Register a new account.
    ///
    /// No existence pre-check: the storage layer's unique constraint on email
    /// is the only duplicate guard, and the repository surfaces it as
    /// `Conflict`.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.username, request.email, password_hash);

        self.users.create(user).await
    }

    /// Authenticate by email and password, issuing a session token.
    ///
    /// Existence is checked before credential verification; "no such account"
    /// and "wrong password" stay distinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        let user = self
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("No account for '{}'", email)))?;

        if !self.hasher.verify(password, user.password_hash()) {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self.jwt.issue(&user)?;

        Ok(LoginOutcome { token, user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use crate::infrastructure::auth::JwtConfig;
    use crate::infrastructure::user::password::Argon2Hasher;

    fn create_service() -> (AuthService, Arc<MockUserRepository>) {
        let users = Arc::new(MockUserRepository::new());
        let service = AuthService::new(
            users.clone(),
            Arc::new(Argon2Hasher::new()),
            Arc::new(JwtService::new(JwtConfig::new("test-secret", 3600))),
        );
        (service, users)
    }

    fn make_request(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let (service, _) = create_service();

        let user = service
            .register(make_request("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        assert_eq!(user.username(), "alice");
        assert_ne!(user.password_hash(), "pw1");
        assert!(Argon2Hasher::new().verify("pw1", user.password_hash()));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (service, _) = create_service();

        service
            .register(make_request("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let result = service
            .register(make_request("bob", "a@x.com", "pw2"))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        // First registration is unaffected
        let alice = service.login("a@x.com", "pw1").await.unwrap();
        assert_eq!(alice.user.username(), "alice");
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_not_found() {
        let (service, _) = create_service();

        let result = service.login("missing@x.com", "whatever").await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (service, _) = create_service();

        service
            .register(make_request("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let result = service.login("a@x.com", "wrong").await;
        assert!(matches!(result, Err(DomainError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let (service, _) = create_service();

        service
            .register(make_request("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let outcome = service.login("a@x.com", "pw1").await.unwrap();

        assert!(!outcome.token.is_empty());
        assert_eq!(outcome.user.username(), "alice");
        assert_eq!(outcome.user.email(), "a@x.com");
    }

    #[tokio::test]
    async fn test_login_profile_never_serializes_hash() {
        let (service, _) = create_service();

        service
            .register(make_request("alice", "a@x.com", "pw1"))
            .await
            .unwrap();

        let outcome = service.login("a@x.com", "pw1").await.unwrap();
        let json = serde_json::to_string(&outcome.user).unwrap();

        assert!(!json.contains("password"));
        assert!(!json.contains("pw1"));
    }

    #[tokio::test]
    async fn test_lookup_failure_is_storage_error() {
        let (service, users) = create_service();

        users.set_should_fail(true).await;

        let result = service.login("a@x.com", "pw1").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
