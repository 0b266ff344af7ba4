//! Signup HTTP endpoint.

use actix_web::{error, web, Error, HttpResponse};
use actix_web::http::StatusCode;

use crate::server::signup::messages::{RegisterUser, SignupError, SignupRequest, SignupResponse};
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// `POST /api/signup` with a JSON `SignupRequest` body.
///
/// Returns 200 with a redirect target on success, 400 with a fixed message
/// for the two validation failures, 500 when persistence fails.
pub async fn signup(
    data: web::Data<AppState>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, Error> {
    let username = body.username.clone();

    let result = data
        .user_registry
        .send(RegisterUser { request: body.into_inner() })
        .await
        .map_err(error::ErrorInternalServerError)?;

    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(SignupResponse::ok())),
        Err(e @ (SignupError::WeakPassword | SignupError::UsernameTaken)) => Ok(
            http_error_response(e.code(), e.message(), Some(&username), StatusCode::BAD_REQUEST),
        ),
        Err(e @ SignupError::Storage(_)) => Ok(http_error_response(
            e.code(),
            e.message(),
            Some(&username),
            StatusCode::INTERNAL_SERVER_ERROR,
        )),
    }
}
