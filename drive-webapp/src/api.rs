//! Calls to the drive backend.

use drive_types::{requests, responses};

use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    /// The backend answered with an error status.
    #[display("{_0}")]
    Rejected(String),
    #[display("network error: {_0}")]
    Network(String),
    #[display("unexpected response: {_0}")]
    Decode(String),
    #[display("the API is only reachable from the browser")]
    Unavailable,
}

impl std::error::Error for Error {}

/// `POST /login`, returning the issued token.
pub async fn login(
    settings: &Settings,
    request: &requests::Login,
) -> Result<responses::Login, Error> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let response = Request::post(&settings.endpoint("login"))
            .json(request)
            .map_err(|e| Error::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        if !response.ok() {
            let status = response.status();
            return Err(match response.json::<responses::ResponseError>().await {
                Ok(e) => Error::Rejected(e.detail),
                Err(_) => Error::Rejected(format!("login failed with status {status}")),
            });
        }
        response
            .json::<responses::Login>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (settings, request);
        Err(Error::Unavailable)
    }
}
