//! Protocol Module
//!
//! JSON bodies exchanged over HTTP.
//!
//! ## Requests
//! - `POST /books`, `PUT /books/{isbn}`: a [`Book`](crate::record::Book)
//! - `POST /books/get-by-criteria`: a [`Criteria`](crate::query::Criteria)
//! - `GET /books?page=&limit=`: [`ListParams`]
//!
//! ## Responses
//! - Mutations: `{ "message": ..., "book": ... }` or `{ "message": ... }`
//! - Errors: `{ "error": ..., "code": <status> }`

mod request;
mod response;

pub use request::{decode_body, ListParams};
pub use response::{BookResponse, ErrorResponse, MessageResponse};
