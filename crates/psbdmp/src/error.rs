/// Failure kinds surfaced by [`crate::client::DumpClient`].
///
/// The service reports its own errors inside the JSON body, so a call can
/// fail three distinct ways: the request never completed, the body was not
/// the expected envelope, or the envelope itself carried an error code.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote error: {0}")]
    Remote(String),
}
