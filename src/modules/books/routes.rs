use axum::{
    extract::{FromRef, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use library_http::auth::{ApiKeySecret, RequireApiKey};
use library_http::error::AppError;

use super::models::{Book, ValidationFailure};
use super::service::BookService;
use super::validation;

/// Shared state for the books routes.
#[derive(Clone)]
pub struct BooksState {
    pub books: BookService,
    pub api_key: ApiKeySecret,
}

impl FromRef<BooksState> for ApiKeySecret {
    fn from_ref(state: &BooksState) -> Self {
        state.api_key.clone()
    }
}

/// Build the books router. Mutating routes require the API key; reads are
/// open.
pub fn router(state: BooksState) -> Router {
    Router::new()
        .route("/", get(get_all_books).post(create_book))
        .route(
            "/{isbn}",
            get(get_book_by_isbn).put(update_book).delete(delete_book),
        )
        .with_state(state)
}

fn location_for(isbn: &str) -> String {
    format!("/{}/{}", super::MODULE_NAME, isbn)
}

/// POST /books
async fn create_book(
    State(state): State<BooksState>,
    _key: RequireApiKey,
    Json(book): Json<Book>,
) -> Result<Response, AppError> {
    let failures = validation::validate(&book);
    if !failures.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, Json(failures)).into_response());
    }

    let created = state.books.create(&book).await?;
    if !created {
        let failures = vec![ValidationFailure::new(
            "isbn",
            "A book with that Isbn already exists.",
        )];
        return Ok((StatusCode::BAD_REQUEST, Json(failures)).into_response());
    }

    tracing::info!(isbn = %book.isbn, "book created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location_for(&book.isbn))],
        Json(book),
    )
        .into_response())
}

/// PUT /books/{isbn}
async fn update_book(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
    _key: RequireApiKey,
    Json(mut book): Json<Book>,
) -> Result<Response, AppError> {
    // The path names the resource; whatever ISBN the body carries loses.
    book.isbn = isbn;

    let failures = validation::validate(&book);
    if !failures.is_empty() {
        return Ok((StatusCode::BAD_REQUEST, Json(failures)).into_response());
    }

    let updated = state.books.update(&book).await?;
    if !updated {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    tracing::info!(isbn = %book.isbn, "book updated");

    Ok(Json(book).into_response())
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

/// GET /books?searchTerm=
async fn get_all_books(
    State(state): State<BooksState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = match query.search_term.as_deref() {
        Some(term) if !term.is_empty() => state.books.search_by_title(term).await?,
        _ => state.books.get_all().await?,
    };

    Ok(Json(books))
}

/// GET /books/{isbn}
async fn get_book_by_isbn(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
) -> Result<Response, AppError> {
    let book = state.books.get_by_isbn(&isbn).await?;

    Ok(match book {
        Some(book) => Json(book).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    })
}

/// DELETE /books/{isbn}
async fn delete_book(
    State(state): State<BooksState>,
    Path(isbn): Path<String>,
    _key: RequireApiKey,
) -> Result<Response, AppError> {
    let deleted = state.books.delete(&isbn).await?;

    Ok(if deleted {
        tracing::info!(isbn = %isbn, "book deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    })
}
