//! Route Handlers
//!
//! Translates HTTP requests into Store calls and Store results into
//! responses.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::audit::AuditLog;
use crate::error::{LibrisError, Result};
use crate::protocol::{decode_body, BookResponse, ListParams, MessageResponse};
use crate::query::Criteria;
use crate::record::Book;
use crate::store::Store;

/// State shared by all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub audit: Arc<AuditLog>,
}

impl AppState {
    pub fn new(store: Arc<Store>, audit: Arc<AuditLog>) -> Self {
        Self { store, audit }
    }
}

/// Build the catalog router
///
/// Methods not listed for a path are answered with 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/books", post(create_book).get(list_books))
        .route("/books/get-by-criteria", post(query_books))
        .route(
            "/books/:isbn",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn create_book(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<BookResponse>)> {
    let book: Book = decode_body(&body)?;
    state.store.create(book.clone())?;

    tracing::info!("Book created: {}", book.isbn);
    state.audit.log(format!("Book created: {}", book.isbn));

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            message: "Book successfully created".to_string(),
            book,
        }),
    ))
}

async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Book>> {
    Json(state.store.get_all(params.page(), params.limit()))
}

async fn get_book(State(state): State<AppState>, Path(isbn): Path<String>) -> Result<Json<Book>> {
    state
        .store
        .get(&isbn)
        .map(Json)
        .ok_or(LibrisError::NotFound(isbn))
}

async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    body: Bytes,
) -> Result<Json<BookResponse>> {
    let book: Book = decode_body(&body)?;
    let book = state.store.update(&isbn, book)?;

    tracing::info!("Book updated: {}", isbn);
    state.audit.log(format!("Book updated: {}", isbn));

    Ok(Json(BookResponse {
        message: "Book successfully updated".to_string(),
        book,
    }))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<MessageResponse>> {
    state.store.delete(&isbn)?;

    tracing::info!("Book deleted: {}", isbn);
    state.audit.log(format!("Book deleted: {}", isbn));

    Ok(Json(MessageResponse {
        message: format!("Book with ISBN {} successfully deleted", isbn),
    }))
}

async fn query_books(State(state): State<AppState>, body: Bytes) -> Result<Json<Vec<Book>>> {
    let criteria: Criteria = decode_body(&body)?;
    let books = state.store.query(&criteria);

    tracing::debug!("Criteria query {:?} matched {} books", criteria, books.len());

    Ok(Json(books))
}
