//! api-server — HTTP API for the user directory.
//!
//! Serves the in-memory user store over two surfaces:
//! - REST: `GET /user`, `GET /user/:id`, `POST /user`.
//! - GraphQL: `POST /graphql` (queries `users`, `user(id)`; mutation `createUser`),
//!   plus a GraphiQL page on `GET /graphql` when enabled.
//!
//! Run:
//! ```bash
//! # pretty logs (default); PORT optional
//! cargo run -p api-server
//!
//! # print the GraphQL SDL and exit
//! cargo run -p api-server -- schema
//! ```
//!
//! Configuration: See `config.rs` for all environment variables.
//!

mod config;
mod graphql;
mod rest;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use domain::adapters::memory_repo::InMemoryUserRepo;
use domain::service::UserService;
use domain::UserRepository;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The one store instance, shared by both adapters.
pub type SharedUsers = Arc<UserService<Arc<dyn UserRepository>>>;

fn shared_users<R: UserRepository + 'static>(repo: R) -> SharedUsers {
    let repo: Arc<dyn UserRepository> = Arc::new(repo);
    Arc::new(UserService::new(repo))
}

#[derive(Clone)]
pub struct AppState {
    users: SharedUsers,
    schema: graphql::UserSchema,
}

impl AppState {
    fn new(users: SharedUsers) -> Self {
        let schema = graphql::build_schema(users.clone());
        Self { users, schema }
    }
}

#[tokio::main]
async fn main() {
    if std::env::args().nth(1).as_deref() == Some("schema") {
        println!("{}", graphql::schema_sdl());
        return;
    }

    // Load and validate config first (fail fast on misconfiguration)
    let cfg = match config::Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cfg);

    let state = AppState::new(shared_users(InMemoryUserRepo::seeded()));

    // CORS - already validated in Config::from_env()
    let cors = if cfg.cors_allow_origin == HeaderValue::from_static("*") {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([cfg.cors_allow_origin.clone()]))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };
    let app = build_router(state, cfg.graphiql).layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], cfg.port).into();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, err = %e, "bind failed");
            std::process::exit(1);
        }
    };
    info!(%addr, graphiql = cfg.graphiql, "api-server listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(err = %e, "server error");
        std::process::exit(1);
    }
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

/// Route table for both surfaces, with request-id and trace layers.
fn build_router(state: AppState, graphiql: bool) -> Router {
    let x_request_id = axum::http::HeaderName::from_static("x-request-id");

    let graphql_route = if graphiql {
        get(graphql::graphiql).post(graphql::graphql_handler)
    } else {
        post(graphql::graphql_handler)
    };

    Router::new()
        .route("/user", get(rest::list_users).post(rest::create_user))
        .route("/user/:id", get(rest::get_user))
        .route("/graphql", graphql_route)
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    use domain::{CoreError, NewUser, User, UserId, UserRepository};

    /// Store whose every call fails like a poisoned lock.
    pub struct BrokenRepo;

    impl UserRepository for BrokenRepo {
        fn list_all(&self) -> Result<Vec<User>, CoreError> {
            Err(CoreError::Repository("mutex poisoned".into()))
        }

        fn find_by_id(&self, _id: UserId) -> Result<Option<User>, CoreError> {
            Err(CoreError::Repository("mutex poisoned".into()))
        }

        fn create(&self, _input: NewUser) -> Result<User, CoreError> {
            Err(CoreError::Repository("mutex poisoned".into()))
        }
    }
}
