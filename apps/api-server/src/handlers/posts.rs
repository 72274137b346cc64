//! Post handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use blog_shared::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::error::{ApiResult, WithPath};
use crate::state::AppState;

/// First `term` value of the query string, empty when absent or unparseable.
fn search_term(req: &HttpRequest) -> String {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()
        .and_then(|pairs| {
            pairs
                .into_inner()
                .into_iter()
                .find(|(key, _)| key == "term")
                .map(|(_, value)| value)
        })
        .unwrap_or_default()
}

/// POST /posts
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let response = state.posts.create(body.into_inner()).await.with_path(&req)?;
    Ok(HttpResponse::Created().json(response))
}

/// PUT /posts/{id}
pub async fn update_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> ApiResult<HttpResponse> {
    let response = state
        .posts
        .update(&id, body.into_inner())
        .await
        .with_path(&req)?;
    Ok(HttpResponse::Ok().json(response))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.posts.delete(&id).await.with_path(&req)?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /posts/{id}
pub async fn get_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let response = state.posts.get_by_id(&id).await.with_path(&req)?;
    Ok(HttpResponse::Ok().json(response))
}

/// GET /posts?term=
pub async fn search_posts(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let term = search_term(&req);
    let response = state.posts.search(&term).await.with_path(&req)?;
    Ok(HttpResponse::Ok().json(response))
}
