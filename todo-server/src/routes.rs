//! HTTP route handlers.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;

use crate::state::AppState;

/// GraphQL endpoint and explorer at `/`, liveness at `/health`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(graphiql).post(graphql))
        .route("/health", get(health))
}

async fn health() -> &'static str {
    "ok"
}

/// POST / - execute a GraphQL request.
async fn graphql(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET / - GraphiQL explorer pointed back at this endpoint.
async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
