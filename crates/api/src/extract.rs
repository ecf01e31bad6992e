//! Request extractors.
//!
//! Thin wrappers over axum's extractors so that every rejection is reported
//! as an [`AppError::BadRequest`] with the usual JSON error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` whose rejection (malformed JSON, wrong content type, missing
/// or mistyped fields) becomes an [`AppError::BadRequest`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` for ids like `/locations/{id}`. A segment that does
/// not parse (`/locations/abc`) is a 400, not a plain-text response.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// `axum::extract::Query` for filters such as `?conference={id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
