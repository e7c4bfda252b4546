//! GraphQL surface over the user service.
//!
//! `user(id)` resolves to `null` when no record matches; store faults surface
//! as GraphQL errors.

use async_graphql::http::GraphiQLSource;
use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};
use axum::{extract::State, response::Html, response::IntoResponse, Json};
use domain::{NewUser, User};
use tracing::{error, info};

use crate::{AppState, SharedUsers};

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// GraphQL view of a user record.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserObject {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users in insertion order.
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<UserObject>> {
        let users = ctx.data::<SharedUsers>()?;
        let all = users.list_all().inspect_err(|e| error!(err = ?e, "graphql users error"))?;
        Ok(all.into_iter().map(UserObject::from).collect())
    }

    /// A single user, or null when the id is unknown.
    async fn user(&self, ctx: &Context<'_>, id: i64) -> async_graphql::Result<Option<UserObject>> {
        let users = ctx.data::<SharedUsers>()?;
        let found = users
            .find_by_id(id)
            .inspect_err(|e| error!(id, err = ?e, "graphql user error"))?;
        if found.is_none() {
            info!(id, "graphql user not found");
        }
        Ok(found.map(UserObject::from))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user; the id is assigned by the store.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<UserObject> {
        let users = ctx.data::<SharedUsers>()?;
        let user = users
            .create(NewUser::new(name, email))
            .inspect_err(|e| error!(err = ?e, "graphql createUser error"))?;
        info!(id = user.id, "graphql user created");
        Ok(user.into())
    }
}

pub fn build_schema(users: SharedUsers) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(users)
        .finish()
}

/// SDL of the served schema.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(req): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(req).await)
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_users;
    use crate::testing::BrokenRepo;
    use domain::adapters::memory_repo::InMemoryUserRepo;

    fn schema() -> UserSchema {
        build_schema(shared_users(InMemoryUserRepo::seeded()))
    }

    #[tokio::test]
    async fn users_query_lists_seeded_records() {
        let resp = schema().execute("{ users { id name email } }").await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(
            data,
            serde_json::json!({"users": [
                {"id": 1, "name": "Matt", "email": "matt@gmail.com"},
                {"id": 2, "name": "Neo", "email": "neo@gmail.com"}
            ]})
        );
    }

    #[tokio::test]
    async fn user_query_found_and_null() {
        let schema = schema();
        let resp = schema.execute("{ user(id: 1) { name } }").await;
        assert_eq!(
            resp.data.into_json().unwrap(),
            serde_json::json!({"user": {"name": "Matt"}})
        );

        let resp = schema.execute("{ user(id: 999) { name } }").await;
        assert!(resp.errors.is_empty());
        assert_eq!(
            resp.data.into_json().unwrap(),
            serde_json::json!({"user": null})
        );
    }

    #[tokio::test]
    async fn create_user_mutation_is_visible_in_users() {
        let schema = schema();
        let resp = schema
            .execute(r#"mutation { createUser(name: "Ada", email: "ada@x.com") { id name email } }"#)
            .await;
        assert!(resp.errors.is_empty(), "{:?}", resp.errors);
        let created = resp.data.into_json().unwrap();
        assert_eq!(
            created,
            serde_json::json!({"createUser": {"id": 3, "name": "Ada", "email": "ada@x.com"}})
        );

        let resp = schema.execute("{ users { id } }").await;
        let ids: Vec<i64> = resp.data.into_json().unwrap()["users"]
            .as_array()
            .unwrap()
            .iter()
            .map(|u| u["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn create_user_requires_both_args() {
        let resp = schema()
            .execute(r#"mutation { createUser(name: "Ada") { id } }"#)
            .await;
        assert!(!resp.errors.is_empty());
    }

    #[tokio::test]
    async fn store_fault_surfaces_as_graphql_error() {
        let schema = build_schema(shared_users(BrokenRepo));

        for query in [
            "{ users { id } }",
            "{ user(id: 1) { id } }",
            r#"mutation { createUser(name: "Ada", email: "ada@x.com") { id } }"#,
        ] {
            let resp = schema.execute(query).await;
            assert!(!resp.errors.is_empty(), "no error for {query}");
            assert!(resp.errors[0].message.contains("repository error"));
        }
    }

    #[test]
    fn sdl_declares_user_type() {
        let sdl = schema_sdl();
        assert!(sdl.contains("type User"));
        assert!(sdl.contains("createUser(name: String!, email: String!)"));
        assert!(sdl.contains("user(id: Int!): User"));
    }
}
