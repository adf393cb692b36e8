use crate::{context::GraphqlContext, database::Database, schema::GraphqlRoot};
use actix_web::{get, http::StatusCode, post, web, Error, HttpResponse, Responder};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};
use std::sync::Arc;

pub const GRAPHQL_PATH: &str = "/api/graphql";

#[get("/api/graphql")]
pub async fn graphiql_handler() -> impl Responder {
    let html = graphiql_source(GRAPHQL_PATH, None);
    HttpResponse::Ok().content_type("text/html; charset=utf-8").body(html)
}

#[post("/api/graphql")]
pub async fn graphql_handler(
    graphql_root: web::Data<Arc<GraphqlRoot>>,
    database: web::Data<Arc<Database>>,
    req: web::Json<GraphQLRequest>,
) -> Result<HttpResponse, Error> {
    let context = GraphqlContext::init(database.get_ref().clone());
    let res = req.execute(&graphql_root, &context).await;
    // Field errors still count as an executed request; only parse and
    // validation failures are reported as a bad request.
    let body = serde_json::to_string(&res)?;
    let status = if res.is_ok() {
        StatusCode::OK
    } else {
        log::warn!("rejected graphql request: {}", body);
        StatusCode::BAD_REQUEST
    };
    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(body))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(graphql_handler).service(graphiql_handler);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    async fn post_graphql(body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(schema::init())))
                .app_data(web::Data::new(Arc::new(Database::new())))
                .configure(configure),
        )
        .await;
        let request = actix_test::TestRequest::post()
            .uri(GRAPHQL_PATH)
            .set_json(&body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[actix_web::test]
    async fn get_user_with_variables() {
        let (status, body) = post_graphql(json!({
            "query": "query GetUser($id: ID!) { getUser(id: $id) { id email name createdAt } }",
            "variables": { "id": "1" },
        }))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "data": {
                    "getUser": {
                        "id": "1",
                        "email": "a@x.com",
                        "name": "Alice",
                        "createdAt": "2024-01-01T00:00:00Z",
                    }
                }
            })
        );
    }

    #[actix_web::test]
    async fn variables_may_be_omitted() {
        let (status, body) =
            post_graphql(json!({ "query": "query { getUser(id: \"999\") { id } }" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": { "getUser": null } }));
    }

    #[actix_web::test]
    async fn malformed_query_reports_errors() {
        let (status, body) = post_graphql(json!({ "query": "query { getUser(" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("errors").and_then(Value::as_array).is_some());
        assert!(body.get("data").is_none());
    }

    #[actix_web::test]
    async fn graphiql_page_is_served() {
        let app = actix_test::init_service(App::new().configure(configure)).await;
        let request = actix_test::TestRequest::get().uri(GRAPHQL_PATH).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = actix_test::read_body(response).await;
        let html = String::from_utf8(body.to_vec()).expect("utf-8 page");
        assert!(html.contains(GRAPHQL_PATH));
    }
}
