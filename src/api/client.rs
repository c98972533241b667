//! HTTP client for the tour backend.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use tracing::{debug, info, warn};

use crate::calendar::{format_date, DateSpan};
use crate::domain::{Availability, BookingConfirmation, BookingRequest, PackageId, Promotion};
use crate::error::{ApiError, Result};

use super::session::Session;
use super::types::{AvailabilityResponse, ErrorBody};

/// Applied to every request; the backend answers in well under a second, so
/// anything slower is treated as a failed check rather than left hanging.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the promotions, availability, and booking endpoints.
///
/// Owns its connection pool and session; construct one per backend and pass
/// it where needed.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client for `base_url` with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        Self::with_timeout(base_url, session, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Session,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Transport)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Fetch the full flat promotion list.
    pub async fn fetch_promotions(&self) -> Result<Vec<Promotion>> {
        self.fetch_promotion_list("promotions").await
    }

    /// Fetch only promotions the backend already flags active.
    pub async fn fetch_active_promotions(&self) -> Result<Vec<Promotion>> {
        self.fetch_promotion_list("promotions/active").await
    }

    async fn fetch_promotion_list(&self, path: &str) -> Result<Vec<Promotion>> {
        let url = format!("{}/{}", self.base_url, path);
        info!(url = %url, "Fetching promotions");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let promotions: Vec<Promotion> = decode(response).await?;

        debug!(count = promotions.len(), "Fetched promotions");
        Ok(promotions)
    }

    /// Ask whether `span` can be reserved for `package`.
    ///
    /// The backend answers `false` when the requested inclusive range
    /// overlaps any non-cancelled reservation for the package.
    pub async fn check_availability(&self, package: PackageId, span: DateSpan) -> Result<bool> {
        let url = format!(
            "{}/public/packages/{}/availability",
            self.base_url, package
        );
        info!(url = %url, start = %span.start(), end = %span.end(), "Checking availability");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("start", format_date(span.start())),
                ("end", format_date(span.end())),
            ])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body: AvailabilityResponse = decode(response).await?;

        debug!(available = body.available, "Availability check complete");
        Ok(body.available)
    }

    /// [`check_availability`](Self::check_availability) folded into the
    /// three-valued [`Availability`]; failures log a warning and surface as
    /// `Undetermined`.
    pub async fn availability(&self, package: PackageId, span: DateSpan) -> Availability {
        let result = self.check_availability(package, span).await;
        if let Err(error) = &result {
            warn!(error = %error, package = %package, "Availability check failed");
        }
        Availability::from_check(result)
    }

    /// Submit a booking. Validates the request first; server rejection
    /// messages pass through verbatim in the error.
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation> {
        request.validate()?;

        let url = format!("{}/customer/bookings", self.base_url);
        info!(url = %url, package = %request.package_id, "Submitting booking");

        let response = self
            .with_auth(self.client.post(&url))
            .json(request)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let confirmation: BookingConfirmation = decode(response).await?;

        info!(reference = %confirmation.reference(), "Booking created");
        Ok(confirmation)
    }
}

/// Decode a JSON body on success; on a non-2xx status, extract the backend's
/// `message` field so it can be shown to the user unchanged.
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await.map_err(ApiError::Decode)?);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => status
            .canonical_reason()
            .unwrap_or("unknown server error")
            .to_string(),
    };
    Err(ApiError::Server {
        status: status.as_u16(),
        message,
    }
    .into())
}
