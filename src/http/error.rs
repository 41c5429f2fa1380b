use std::borrow::Cow;

use axum::response::IntoResponse;
use axum::Json;
use hyper::StatusCode;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ApiErrorCode(pub u16);

impl ApiErrorCode {
	/// The `lang` parameter is not a supported language.
	pub const INVALID_LANGUAGE: Self = Self(1000);
	/// The requested country code does not exist.
	pub const UNKNOWN_COUNTRY: Self = Self(1001);
	/// The requested route does not exist.
	pub const ROUTE_NOT_FOUND: Self = Self(1002);
	/// A database query failed unexpectedly.
	pub const DATABASE_ERROR: Self = Self(2000);
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiError {
	#[serde(skip)]
	pub status_code: StatusCode,
	pub status: Cow<'static, str>,
	pub error_code: ApiErrorCode,
	pub error: Cow<'static, str>,
}

impl ApiError {
	pub fn new(
		status_code: StatusCode,
		error_code: ApiErrorCode,
		error: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			status_code,
			status: status_code.canonical_reason().unwrap_or("unknown").into(),
			error_code,
			error: error.into(),
		}
	}

	pub fn bad_request(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, error_code, error)
	}

	pub fn not_found(error_code: ApiErrorCode, error: impl Into<Cow<'static, str>>) -> Self {
		Self::new(StatusCode::NOT_FOUND, error_code, error)
	}

	pub fn internal_server_error(
		error_code: ApiErrorCode,
		error: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, error_code, error)
	}
}

impl From<Error> for ApiError {
	fn from(e: Error) -> Self {
		match e {
			Error::InvalidArgument(_) => {
				Self::bad_request(ApiErrorCode::INVALID_LANGUAGE, e.to_string())
			}
			Error::NotFound(_) => Self::not_found(ApiErrorCode::UNKNOWN_COUNTRY, e.to_string()),
			Error::Query(ref source) => {
				tracing::error!(error = %source, "failed to query countries");
				Self::internal_server_error(
					ApiErrorCode::DATABASE_ERROR,
					"failed to query countries",
				)
			}
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> axum::http::Response<axum::body::Body> {
		(self.status_code, Json(self)).into_response()
	}
}
