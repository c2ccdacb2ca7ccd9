//! Error type shared by the repository, service, and controller layers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use entity::enums::{UserRole, WalkStatus};

use crate::model::api::ErrorDto;

/// Failures surfaced by the marketplace core.
///
/// Variants group into five kinds, each with a distinct HTTP mapping:
/// missing entities (404), illegal lifecycle transitions (422), conflicts
/// such as a double-accept or double-rate (409), rejected input (400), and
/// storage failures (500). Storage failures are the only kind worth retrying.
#[derive(Error, Debug)]
pub enum Error {
    /// No user row exists for the ID
    #[error("user ID {0} not found")]
    UserNotFound(i32),
    /// No dog row exists for the ID
    #[error("dog ID {0} not found")]
    DogNotFound(i32),
    /// No walk request row exists for the ID
    #[error("walk request ID {0} not found")]
    WalkRequestNotFound(i32),
    /// The request's current status has no edge to the attempted status
    #[error("walk request ID {request_id} cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        /// The request that rejected the transition
        request_id: i32,
        /// Status the request currently holds
        from: WalkStatus,
        /// Status the caller attempted to move to
        to: WalkStatus,
    },
    /// Ratings may only be recorded once the walk has been completed
    #[error("walk request ID {request_id} is {status:?}, only completed walks can be rated")]
    RequestNotCompleted {
        /// The request the rating was submitted for
        request_id: i32,
        /// Status the request currently holds
        status: WalkStatus,
    },
    /// Another walker won the race to accept the request
    #[error("walk request ID {0} has already been accepted by another walker")]
    RequestAlreadyClaimed(i32),
    /// A rating already exists for the request
    #[error("walk request ID {0} has already been rated")]
    RequestAlreadyRated(i32),
    /// Ratings are integers from 1 through 5
    #[error("rating {0} is out of range, ratings run from 1 to 5")]
    RatingOutOfRange(i32),
    /// Walk durations are a positive number of minutes
    #[error("duration must be a positive number of minutes, got {0}")]
    NonPositiveDuration(i32),
    /// The user exists but does not hold the role the operation requires
    #[error("user ID {user_id} is not registered as a {expected:?}")]
    RoleMismatch {
        /// The user that failed the role check
        user_id: i32,
        /// Role the operation requires
        expected: UserRole,
    },
    /// The dog named in the operation belongs to a different owner
    #[error("user ID {owner_id} does not own dog ID {dog_id}")]
    DogNotOwned {
        /// The dog named in the operation
        dog_id: i32,
        /// The caller claiming to own it
        owner_id: i32,
    },
    /// The rating names a walker other than the one assigned to the walk
    #[error("walker ID {walker_id} was not assigned to walk request ID {request_id}")]
    WalkerMismatch {
        /// The request being rated
        request_id: i32,
        /// The walker named in the rating
        walker_id: i32,
    },
    /// The rating names an owner other than the owner of the walked dog
    #[error("owner ID {owner_id} does not own the dog walked in request ID {request_id}")]
    OwnerMismatch {
        /// The request being rated
        request_id: i32,
        /// The owner named in the rating
        owner_id: i32,
    },
    /// A required environment variable is unset
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable holds a value the server cannot use
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// The offending variable
        var: String,
        /// Why its value was rejected
        reason: String,
    },
    /// The underlying store failed or is unreachable
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

// In-crate unit tests use the shared `walkies-test-utils` fixtures, whose
// helpers surface `TestError`. Because those fixtures are compiled against a
// separate instance of this crate, the test harness cannot route the fixture
// error into `TestError` via the service `Error`; instead the tests return
// `Error` and this conversion threads fixture failures through `?`. Gated to
// `cfg(test)` so the production build never depends on the test-only crate.
#[cfg(test)]
impl From<walkies_test_utils::TestError> for Error {
    fn from(err: walkies_test_utils::TestError) -> Self {
        match err {
            walkies_test_utils::TestError::DbErr(e) => Error::DbErr(e),
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::UserNotFound(_) | Error::DogNotFound(_) | Error::WalkRequestNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            Error::InvalidTransition { .. } | Error::RequestNotCompleted { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::RequestAlreadyClaimed(_) | Error::RequestAlreadyRated(_) => {
                StatusCode::CONFLICT
            }
            Error::RatingOutOfRange(_)
            | Error::NonPositiveDuration(_)
            | Error::RoleMismatch { .. }
            | Error::DogNotOwned { .. }
            | Error::WalkerMismatch { .. }
            | Error::OwnerMismatch { .. } => StatusCode::BAD_REQUEST,
            Error::MissingEnvVar(_) | Error::InvalidEnvValue { .. } | Error::DbErr(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Internal server error: {}", self);

            return (
                status,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response();
        }

        debug!("Request rejected: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
