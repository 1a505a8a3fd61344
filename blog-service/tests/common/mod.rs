// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Algorithm;
use auth::Authenticator;
use auth::Claims;
use blog_service::blog::errors::BlogError;
use blog_service::blog::models::Blog;
use blog_service::blog::models::BlogFilter;
use blog_service::blog::models::BlogId;
use blog_service::blog::ports::BlogRepository;
use blog_service::domain::auth::service::AuthService;
use blog_service::domain::blog::service::BlogService;
use blog_service::domain::user::service::UserService;
use blog_service::inbound::http::router::create_router;
use blog_service::user::errors::UserError;
use blog_service::user::models::User;
use blog_service::user::models::UserId;
use blog_service::user::ports::UserRepository;
use serde_json::json;
use serde_json::Value;
use sqlx::postgres::PgConnectOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::Connection;
use sqlx::Executor;
use sqlx::PgConnection;
use sqlx::PgPool;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Authenticator,
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

        let user_repository = Arc::new(InMemoryUserRepository::default());
        let blog_repository = Arc::new(InMemoryBlogRepository::default());

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let blog_service = Arc::new(BlogService::new(blog_repository));
        let auth_service = Arc::new(AuthService::new(
            user_repository,
            Arc::new(Authenticator::new(TEST_SECRET)),
        ));

        let router = create_router(user_service, blog_service, auth_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator: Authenticator::new(TEST_SECRET),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register a user and return the response body
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post("/user")
            .json(&json!({ "name": name, "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user, log in and return the access token
    pub async fn register_and_login(&self, email: &str) -> String {
        self.register("Test Author", email, "pass_word!").await;

        let body: Value = self
            .login(email, "pass_word!")
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["access_token"]
            .as_str()
            .expect("Missing access_token")
            .to_string()
    }

    /// Token for `email` that expired thirty seconds ago
    pub fn expired_token(&self, email: &str) -> String {
        Authenticator::with_settings(
            TEST_SECRET,
            Algorithm::HS256,
            chrono::Duration::seconds(-30),
        )
        .generate_token(Claims::for_subject(email))
        .expect("Failed to sign token")
    }

    pub async fn create_blog(&self, token: &str, title: &str, published: bool) -> Value {
        let response = self
            .post_authenticated("/blog", token)
            .json(&json!({ "title": title, "body": "Lorem ipsum", "published": published }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

/// Blogs kept in insertion order
#[derive(Default)]
pub struct InMemoryBlogRepository {
    blogs: Mutex<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    fn newest_first(&self, keep: impl Fn(&Blog) -> bool) -> Vec<Blog> {
        let mut blogs: Vec<Blog> = self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|b| keep(b))
            .cloned()
            .collect();
        blogs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        blogs
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        self.blogs.lock().unwrap().push(blog.clone());
        Ok(blog)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError> {
        Ok(self
            .blogs
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list(&self, filter: &BlogFilter) -> Result<Vec<Blog>, BlogError> {
        let mut blogs =
            self.newest_first(|b| filter.published.map_or(true, |p| b.published == p));
        if let Some(limit) = filter.limit {
            blogs.truncate(limit as usize);
        }
        Ok(blogs)
    }

    async fn find_by_creator(&self, creator_id: UserId) -> Result<Vec<Blog>, BlogError> {
        Ok(self.newest_first(|b| b.creator.id == creator_id))
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let mut blogs = self.blogs.lock().unwrap();
        let slot = blogs
            .iter_mut()
            .find(|b| b.id == blog.id)
            .ok_or(BlogError::NotFound(blog.id))?;
        *slot = blog.clone();
        Ok(blog)
    }

    async fn delete(&self, id: BlogId) -> Result<(), BlogError> {
        let mut blogs = self.blogs.lock().unwrap();
        let before = blogs.len();
        blogs.retain(|b| b.id != id);
        if blogs.len() == before {
            return Err(BlogError::NotFound(id));
        }
        Ok(())
    }
}

/// Throwaway PostgreSQL database with migrations applied
pub struct TestDb {
    pub pool: PgPool,
    pub db_name: String,
    admin_url: String,
}

impl TestDb {
    /// Create a database with a unique name on the server named by `DATABASE_URL`.
    ///
    /// Returns `None` when `DATABASE_URL` is unset so the suite still runs without PostgreSQL.
    pub async fn from_env() -> Option<Self> {
        let Ok(admin_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping PostgreSQL test");
            return None;
        };

        let db_name = format!(
            "test_blog_service_{}",
            uuid::Uuid::new_v4().to_string().replace('-', "_")
        );

        let mut conn = PgConnection::connect(&admin_url)
            .await
            .expect("Failed to connect to Postgres");

        conn.execute(format!(r#"CREATE DATABASE "{}";"#, db_name).as_str())
            .await
            .expect("Failed to create test database");

        let options = admin_url
            .parse::<PgConnectOptions>()
            .expect("Failed to parse DATABASE_URL")
            .database(&db_name);

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        Some(Self {
            pool,
            db_name,
            admin_url,
        })
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // Database cleanup happens asynchronously
        let db_name = self.db_name.clone();
        let admin_url = self.admin_url.clone();
        tokio::spawn(async move {
            if let Ok(mut conn) = PgConnection::connect(&admin_url).await {
                let _ = conn
                    .execute(
                        format!(
                            r#"SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}';"#,
                            db_name
                        )
                        .as_str(),
                    )
                    .await;

                let _ = conn
                    .execute(format!(r#"DROP DATABASE IF EXISTS "{}";"#, db_name).as_str())
                    .await;
            }
        });
    }
}
