//! Use-case and router tests for the auth crate
//!
//! Runs against an in-memory user store implementing the same repository
//! trait as the PostgreSQL one.

#[cfg(test)]
pub(crate) mod memory {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use kernel::id::UserId;

    use crate::domain::entity::user::User;
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::email::Email;
    use crate::error::{AuthError, AuthResult};

    #[derive(Clone, Default)]
    pub struct MemoryUsers {
        users: Arc<Mutex<HashMap<UserId, User>>>,
    }

    impl MemoryUsers {
        pub fn len(&self) -> usize {
            self.users.lock().unwrap().len()
        }
    }

    impl UserRepository for MemoryUsers {
        async fn create(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.email == user.email) {
                return Err(AuthError::EmailTaken);
            }
            users.insert(user.user_id, user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(user_id).cloned())
        }

        async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .find(|u| &u.email == email)
                .cloned())
        }

        async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
            Ok(self.users.lock().unwrap().values().any(|u| &u.email == email))
        }

        async fn update(&self, user: &User) -> AuthResult<()> {
            let mut users = self.users.lock().unwrap();
            if users
                .values()
                .any(|u| u.email == user.email && u.user_id != user.user_id)
            {
                return Err(AuthError::EmailTaken);
            }
            match users.get_mut(&user.user_id) {
                Some(slot) => {
                    *slot = user.clone();
                    Ok(())
                }
                None => Err(AuthError::UserNotFound),
            }
        }

        async fn delete(&self, user_id: &UserId) -> AuthResult<()> {
            match self.users.lock().unwrap().remove(user_id) {
                Some(_) => Ok(()),
                None => Err(AuthError::UserNotFound),
            }
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::memory::MemoryUsers;
    use crate::application::*;
    use crate::error::AuthError;

    struct Fixture {
        users: Arc<MemoryUsers>,
        tokens: Arc<TokenService>,
        config: Arc<AuthConfig>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = AuthConfig::with_secret("test-secret");
            Self {
                users: Arc::new(MemoryUsers::default()),
                tokens: Arc::new(TokenService::new(&config)),
                config: Arc::new(config),
            }
        }

        async fn register(&self, name: &str, email: &str, password: &str) -> RegisterOutput {
            RegisterUseCase::new(self.users.clone(), self.tokens.clone(), self.config.clone())
                .execute(RegisterInput {
                    name: name.into(),
                    email: email.into(),
                    password: password.into(),
                    password_confirmation: password.into(),
                })
                .await
                .unwrap()
        }

        async fn login(&self, email: &str, password: &str) -> Result<LoginOutput, AuthError> {
            LoginUseCase::new(self.users.clone(), self.tokens.clone(), self.config.clone())
                .execute(LoginInput {
                    email: email.into(),
                    password: password.into(),
                })
                .await
        }

        fn identify(&self) -> IdentifyUseCase<MemoryUsers> {
            IdentifyUseCase::new(self.users.clone(), self.tokens.clone())
        }
    }

    #[tokio::test]
    async fn test_register_then_login_same_user() {
        let fx = Fixture::new();
        let registered = fx.register("Alice", "alice@example.com", "pw123").await;

        let logged_in = fx.login("alice@example.com", "pw123").await.unwrap();
        assert_eq!(logged_in.user.user_id, registered.user.user_id);
        assert!(!logged_in.token.is_empty());
    }

    #[tokio::test]
    async fn test_confirmation_mismatch_persists_nothing() {
        let fx = Fixture::new();
        let result = RegisterUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
            .execute(RegisterInput {
                name: "Alice".into(),
                email: "alice@example.com".into(),
                password: "pw123".into(),
                password_confirmation: "pw124".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::Validation(_))));
        assert_eq!(fx.users.len(), 0);
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let fx = Fixture::new();
        let result = RegisterUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
            .execute(RegisterInput {
                name: "".into(),
                email: "alice@example.com".into(),
                password: "pw123".into(),
                password_confirmation: "pw123".into(),
            })
            .await;

        let err = result.err().unwrap();
        assert_eq!(err.kind(), kernel::error::kind::ErrorKind::UnprocessableEntity);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let fx = Fixture::new();
        fx.register("Alice", "alice@example.com", "pw123").await;

        let result = RegisterUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
            .execute(RegisterInput {
                name: "Other".into(),
                email: "ALICE@example.com".into(),
                password: "pw".into(),
                password_confirmation: "pw".into(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
        assert_eq!(fx.users.len(), 1);
    }

    #[tokio::test]
    async fn test_login_failures_are_distinct() {
        let fx = Fixture::new();
        fx.register("Alice", "alice@example.com", "pw123").await;

        assert!(matches!(
            fx.login("bob@example.com", "pw123").await,
            Err(AuthError::UserNotFound)
        ));
        assert!(matches!(
            fx.login("alice@example.com", "wrong").await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_identify_follows_email_change() {
        let fx = Fixture::new();
        let registered = fx.register("Alice", "alice@example.com", "pw123").await;

        UpdateAccountUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
            .execute(
                registered.user.clone(),
                UpdateAccountInput {
                    password: "pw123".into(),
                    new_name: "".into(),
                    new_email: "alice@new.example.com".into(),
                    new_password: "".into(),
                },
            )
            .await
            .unwrap();

        // The old token still resolves, to the current row
        let user = fx.identify().execute(&registered.token).await.unwrap();
        assert_eq!(user.email.as_str(), "alice@new.example.com");
        assert_eq!(user.user_name.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_identify_rejects_bad_token() {
        let fx = Fixture::new();
        fx.register("Alice", "alice@example.com", "pw123").await;

        let other = TokenService::new(&AuthConfig::with_secret("other-secret"));
        let user = fx.login("alice@example.com", "pw123").await.unwrap().user;
        let forged = other.issue(&user).unwrap();

        assert!(matches!(
            fx.identify().execute(&forged).await,
            Err(AuthError::TokenInvalid)
        ));
    }

    #[tokio::test]
    async fn test_update_account_requires_current_password() {
        let fx = Fixture::new();
        let registered = fx.register("Alice", "alice@example.com", "pw123").await;

        let result =
            UpdateAccountUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
                .execute(
                    registered.user,
                    UpdateAccountInput {
                        password: "nope".into(),
                        new_name: "Mallory".into(),
                        new_email: "".into(),
                        new_password: "".into(),
                    },
                )
                .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        let user = fx.login("alice@example.com", "pw123").await.unwrap().user;
        assert_eq!(user.user_name.as_str(), "Alice");
    }

    #[tokio::test]
    async fn test_update_password_and_name() {
        let fx = Fixture::new();
        let registered = fx.register("Alice", "alice@example.com", "pw123").await;

        let output =
            UpdateAccountUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
                .execute(
                    registered.user,
                    UpdateAccountInput {
                        password: "pw123".into(),
                        new_name: "Alice Liddell".into(),
                        new_email: "".into(),
                        new_password: "pw456".into(),
                    },
                )
                .await
                .unwrap();

        assert_eq!(output.user.user_name.as_str(), "Alice Liddell");
        assert_eq!(output.user.email.as_str(), "alice@example.com");
        assert!(fx.login("alice@example.com", "pw123").await.is_err());
        assert!(fx.login("alice@example.com", "pw456").await.is_ok());

        let claims = fx.tokens.verify(&output.token).unwrap();
        assert_eq!(claims.name, "Alice Liddell");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let fx = Fixture::new();
        let alice = fx.register("Alice", "alice@example.com", "pw123").await;
        fx.register("Bob", "bob@example.com", "pw123").await;

        let result =
            UpdateAccountUseCase::new(fx.users.clone(), fx.tokens.clone(), fx.config.clone())
                .execute(
                    alice.user,
                    UpdateAccountInput {
                        password: "pw123".into(),
                        new_name: "".into(),
                        new_email: "bob@example.com".into(),
                        new_password: "".into(),
                    },
                )
                .await;

        assert!(matches!(result, Err(AuthError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_deleted_user_token_stops_resolving() {
        let fx = Fixture::new();
        let registered = fx.register("Alice", "alice@example.com", "pw123").await;

        DeleteAccountUseCase::new(fx.users.clone())
            .execute(&registered.user)
            .await
            .unwrap();

        assert!(matches!(
            fx.identify().execute(&registered.token).await,
            Err(AuthError::UserNotFound)
        ));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::memory::MemoryUsers;
    use crate::application::config::AuthConfig;
    use crate::presentation::router::auth_router_generic;

    fn app() -> axum::Router {
        auth_router_generic(MemoryUsers::default(), AuthConfig::with_secret("test-secret"))
    }

    async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn register_alice(app: &axum::Router) -> String {
        let (status, body) = send(
            app,
            post_json(
                "/register",
                json!({
                    "name": "Alice",
                    "email": "alice@example.com",
                    "password": "pw123",
                    "passwordConfirmation": "pw123"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body["data"]["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_register_envelope() {
        let app = app();
        let (status, body) = send(
            &app,
            post_json(
                "/register",
                json!({
                    "name": "Alice",
                    "email": "alice@example.com",
                    "password": "pw123",
                    "passwordConfirmation": "pw123"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "success");
        assert_eq!(body["error"], "");
        assert_eq!(body["data"]["name"], "Alice");
        assert_eq!(body["data"]["email"], "alice@example.com");
        assert!(body["data"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn test_whoami() {
        let app = app();
        let token = register_alice(&app).await;

        let request = Request::get("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "Your name is Alice");
    }

    #[tokio::test]
    async fn test_whoami_without_token() {
        let app = app();
        let request = Request::get("/whoami").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["status"], "error");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = app();
        register_alice(&app).await;

        let (status, body) = send(
            &app,
            post_json(
                "/login",
                json!({ "email": "alice@example.com", "password": "nope" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app();
        let request = Request::post("/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_delete_account() {
        let app = app();
        let token = register_alice(&app).await;

        let request = Request::delete("/account")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "deleted successfully");

        let request = Request::get("/whoami")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
