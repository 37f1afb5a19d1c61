//! API definitions and an async client for the Bracket tournament system.

pub mod fetch;
pub mod form;
pub mod http;
pub mod id;
pub mod inputs;
pub mod payload;
pub mod tournaments;

use std::fmt::{self, Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

use ::http::StatusCode;
use thiserror::Error;

use crate::http::{Request, RequestBuilder, Response};
use crate::id::StageItemId;
use crate::tournaments::TournamentsClient;

/// An asynchronous client for the Bracket REST API.
///
/// The client is cheap to clone. All request errors are routed through the
/// [`ErrorReporter`] given at construction exactly once before they are
/// returned to the caller.
#[derive(Clone)]
pub struct Client {
    http: crate::http::Client,
    base_url: String,
    reporter: Arc<dyn ErrorReporter>,
}

impl Client {
    /// Creates a new `Client` using the default [`LogReporter`].
    pub fn new<T>(base_url: T) -> Self
    where
        T: ToString,
    {
        Self::with_reporter(base_url, Arc::new(LogReporter))
    }

    /// Creates a new `Client` routing request errors through `reporter`.
    pub fn with_reporter<T>(base_url: T, reporter: Arc<dyn ErrorReporter>) -> Self
    where
        T: ToString,
    {
        Self {
            http: crate::http::Client::new(),
            base_url: base_url.to_string(),
            reporter,
        }
    }

    /// Returns the base url of the server this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tournaments(&self) -> TournamentsClient<'_> {
        TournamentsClient::new(self)
    }

    pub(crate) fn request(&self) -> RequestBuilder {
        RequestBuilder::new(self.base_url.clone())
    }

    pub(crate) async fn send(&self, request: Request) -> Result<Response> {
        self.http.send(request).await
    }

    pub(crate) fn report(&self, error: &Error) {
        self.reporter.report(error);
    }

    /// Awaits `fut`, routing an `Err` through the error reporter before
    /// returning it.
    pub(crate) async fn reported<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match fut.await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.report(&err);
                Err(err)
            }
        }
    }
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// A sink for request errors.
///
/// The reporter replaces an ambient global handler: it is given to the
/// [`Client`] explicitly so failure routing is testable.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &Error);
}

/// The default [`ErrorReporter`]. Writes every error to the `log` facade.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report(&self, error: &Error) {
        log::error!("request failed: {}", error);
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("bad status code: {0}")]
    BadStatusCode(StatusCode),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Http(#[from] crate::http::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    /// An input descriptor names a winner source without a winner position.
    #[error("input from stage item {0} is missing a winner position")]
    MissingWinnerPosition(StageItemId),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn status_error(status: StatusCode) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound,
        status => Error::BadStatusCode(status),
    }
}
