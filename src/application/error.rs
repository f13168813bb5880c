use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{application::board::BoardError, infra::error::InfraError};

/// Diagnostic chain attached to error responses and picked up by the
/// response-logging middleware.
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub source: &'static str,
    pub status: StatusCode,
    pub messages: Vec<String>,
}

impl ErrorReport {
    pub fn from_error(source: &'static str, status: StatusCode, error: &dyn StdError) -> Self {
        let mut messages = vec![error.to_string()];
        let mut current = error.source();
        while let Some(inner) = current {
            messages.push(inner.to_string());
            current = inner.source();
        }
        Self {
            source,
            status,
            messages,
        }
    }

    pub fn from_message(
        source: &'static str,
        status: StatusCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source,
            status,
            messages: vec![message.into()],
        }
    }

    pub fn attach(self, response: &mut Response) {
        response.extensions_mut().insert(self);
    }
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    public_message: &'static str,
    report: ErrorReport,
}

impl HttpError {
    pub fn from_error(
        source: &'static str,
        status: StatusCode,
        public_message: &'static str,
        error: &dyn StdError,
    ) -> Self {
        let report = ErrorReport::from_error(source, status, error);
        Self {
            status,
            public_message,
            report,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Map a board precondition failure onto a client error.
    pub fn from_board(source: &'static str, err: BoardError) -> Self {
        match err {
            BoardError::UnknownPost(_) => {
                HttpError::from_error(source, StatusCode::NOT_FOUND, "Post not found", &err)
            }
            BoardError::CreateNotOpen => HttpError::from_error(
                source,
                StatusCode::CONFLICT,
                "Create form is not open",
                &err,
            ),
            BoardError::EditNotOpen(_) => HttpError::from_error(
                source,
                StatusCode::CONFLICT,
                "Post is not being edited",
                &err,
            ),
            BoardError::NothingPending => HttpError::from_error(
                source,
                StatusCode::CONFLICT,
                "Nothing to confirm",
                &err,
            ),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.public_message).into_response();
        self.report.attach(&mut response);
        response
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Infra(InfraError::Remote(_)) => StatusCode::BAD_GATEWAY,
            AppError::Infra(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn presentation_message(&self) -> &'static str {
        match self {
            AppError::Infra(InfraError::Remote(_)) => "Remote service unavailable",
            AppError::Infra(InfraError::Configuration { .. }) => "Service misconfigured",
            AppError::Infra(InfraError::Telemetry(_)) => "Logging subsystem could not start",
            AppError::Infra(InfraError::Io(_)) => "I/O failure during request",
            AppError::Unexpected(_) => "Unexpected error occurred",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.presentation_message();
        let report = ErrorReport::from_error("application::error::AppError", status, &self);
        let mut response = (status, message).into_response();
        report.attach(&mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;

    #[test]
    fn board_errors_map_to_client_statuses() {
        let cases = [
            (BoardError::UnknownPost(4), StatusCode::NOT_FOUND),
            (BoardError::CreateNotOpen, StatusCode::CONFLICT),
            (BoardError::EditNotOpen(4), StatusCode::CONFLICT),
            (BoardError::NothingPending, StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_board("test", err).status(), status);
        }
    }

    #[test]
    fn remote_failures_surface_as_bad_gateway() {
        let err = AppError::from(InfraError::from(RepoError::transport("connection refused")));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.extensions().get::<ErrorReport>().is_some());
    }

    #[test]
    fn report_collects_source_chain() {
        let err = AppError::from(InfraError::Io(std::io::Error::other("disk gone")));
        let report = ErrorReport::from_error("test", StatusCode::INTERNAL_SERVER_ERROR, &err);
        assert_eq!(report.messages.first().map(String::as_str), Some("io error: disk gone"));
    }
}
