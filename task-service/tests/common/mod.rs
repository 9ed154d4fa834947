#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtKeys;
use auth::TokenIssuer;
use serde_json::json;
use serde_json::Value;
use task_service::domain::identity::service::AuthService;
use task_service::domain::task::errors::TaskError;
use task_service::domain::task::models::Task;
use task_service::domain::task::ports::TaskRepository;
use task_service::domain::task::service::TaskService;
use task_service::domain::user::errors::UserError;
use task_service::domain::user::models::EmailAddress;
use task_service::domain::user::models::User;
use task_service::domain::user::models::UserId;
use task_service::domain::user::ports::UserRepository;
use task_service::domain::user::service::UserService;
use task_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
    pub api_client: reqwest::Client,
    pub token_issuer: TokenIssuer,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryStore::default());
        let keys = JwtKeys::hs256(TEST_SECRET).expect("Failed to build test keys");
        let authenticator = Arc::new(Authenticator::new(
            keys.clone(),
            chrono::Duration::minutes(30),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&store),
            Arc::clone(&authenticator),
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&store), authenticator));
        let task_service = Arc::new(TaskService::new(Arc::clone(&store), Arc::clone(&store)));

        let router = create_router(auth_service, user_service, task_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            store,
            api_client: reqwest::Client::new(),
            token_issuer: TokenIssuer::new(keys),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the `data` object of the response
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post("/users")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }

    /// Submit the login form
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in and return the access token
    pub async fn login_token(&self, username: &str, password: &str) -> String {
        let response = self.login(username, password).await;
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Register then log in, returning the user id and an access token
    pub async fn register_and_login(&self, name: &str, email: &str, password: &str) -> (String, String) {
        let user = self.register(name, email, password).await;
        let id = user["id"].as_str().expect("Missing id").to_string();
        let token = self.login_token(email, password).await;
        (id, token)
    }
}

/// Users and tasks held in process memory.
///
/// Mirrors the database constraints the Postgres adapters rely on: unique
/// email, task owner must exist, and deleting a user removes its tasks.
#[derive(Default)]
pub struct InMemoryStore {
    users: Mutex<HashMap<UserId, User>>,
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryStore {
    fn email_taken(users: &HashMap<UserId, User>, email: &EmailAddress, except: &UserId) -> bool {
        users
            .values()
            .any(|u| &u.email == email && &u.id != except)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if Self::email_taken(&users, &user.email, &user.id) {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        if Self::email_taken(&users, &user.email, &user.id) {
            return Err(UserError::EmailAlreadyExists(user.email.as_str().to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        if self.users.lock().unwrap().remove(id).is_none() {
            return Err(UserError::NotFound(id.to_string()));
        }
        self.tasks.lock().unwrap().retain(|t| &t.owner_id != id);
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryStore {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        if !self.users.lock().unwrap().contains_key(&task.owner_id) {
            return Err(TaskError::OwnerNotFound(task.owner_id.to_string()));
        }
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .filter(|t| &t.owner_id == owner)
            .cloned()
            .collect())
    }
}
