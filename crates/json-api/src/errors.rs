//! JSON error responses.

use salvo::{
    handler,
    http::StatusCode,
    oapi::{self, Components, Content, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

pub(crate) const BAD_REQUEST_MESSAGE: &str = "Requête invalide.";
pub(crate) const NOT_FOUND_MESSAGE: &str = "Ressource introuvable.";
pub(crate) const METHOD_NOT_ALLOWED_MESSAGE: &str = "Méthode non autorisée.";
pub(crate) const INTERNAL_ERROR_MESSAGE: &str = "Erreur interne du serveur.";

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human readable reason, in French
    pub message: String,
}

/// A status code paired with an [`ErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorResponse {
    status: StatusCode,
    message: String,
}

impl ErrorResponse {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    /// Generic body for failures raised outside the handlers, e.g. an
    /// unparsable path id or an unknown route.
    pub(crate) fn from_status(status: StatusCode) -> Self {
        let message = match status {
            StatusCode::BAD_REQUEST => BAD_REQUEST_MESSAGE,
            StatusCode::NOT_FOUND => NOT_FOUND_MESSAGE,
            StatusCode::METHOD_NOT_ALLOWED => METHOD_NOT_ALLOWED_MESSAGE,
            status if status.is_server_error() => INTERNAL_ERROR_MESSAGE,
            status => status.canonical_reason().unwrap_or(BAD_REQUEST_MESSAGE),
        };

        Self::new(status, message)
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Scribe for ErrorResponse {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorBody {
            message: self.message,
        }));
    }
}

impl EndpointOutRegister for ErrorResponse {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    Content::new(ErrorBody::to_schema(components)),
                ),
            );
        }
    }
}

/// Catcher hoop rendering bodiless error statuses as an [`ErrorBody`].
#[handler]
pub(crate) async fn render_status_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let Some(status) = res
        .status_code
        .filter(|status| status.is_client_error() || status.is_server_error())
    else {
        return;
    };

    res.render(ErrorResponse::from_status(status));
    ctrl.skip_rest();
}
