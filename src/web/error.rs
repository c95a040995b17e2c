// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::InvalidFieldValue;
use crate::store::StoreError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const TICKET_NOT_FOUND: &str = "Ticket not found";

/// An error returned to the client as `{"detail": ...}` with the given status.
#[derive(Debug)]
pub struct ApiError {
	pub status: StatusCode,
	pub detail: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
	detail: &'a str,
}

impl ApiError {
	/// The request body or query was missing required data or had data of the wrong shape
	pub fn validation(detail: impl Into<String>) -> Self {
		Self {
			status: StatusCode::UNPROCESSABLE_ENTITY,
			detail: detail.into(),
		}
	}

	pub fn ticket_not_found() -> Self {
		Self {
			status: StatusCode::NOT_FOUND,
			detail: TICKET_NOT_FOUND.to_string(),
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { detail: &self.detail };
		(self.status, Json(body)).into_response()
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		Self::validation(rejection.body_text())
	}
}

impl From<QueryRejection> for ApiError {
	fn from(rejection: QueryRejection) -> Self {
		Self::validation(rejection.body_text())
	}
}

impl From<InvalidFieldValue> for ApiError {
	fn from(error: InvalidFieldValue) -> Self {
		Self::validation(error.to_string())
	}
}

impl From<StoreError> for ApiError {
	fn from(error: StoreError) -> Self {
		match error {
			StoreError::NotFound(_) => Self::ticket_not_found(),
		}
	}
}
