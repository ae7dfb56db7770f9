//! Postal-code → location resolution against the postal directory.

use std::sync::Arc;

use super::ports::{HttpReply, HttpTransport};
use super::{
    ClassifiedError, DirectoryAnswer, LocationRecord, ProviderEndpoint, RequestContext, ZipCode,
};

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

/// Resolves canonical zipcodes into [`LocationRecord`]s.
///
/// Stateless apart from its shared transport; one instance serves all
/// concurrent requests.
#[derive(Clone)]
pub struct LocationResolver {
    transport: Arc<dyn HttpTransport>,
    directory: ProviderEndpoint,
}

impl LocationResolver {
    /// Create a resolver calling the directory rooted at `directory`.
    pub fn new(transport: Arc<dyn HttpTransport>, directory: ProviderEndpoint) -> Self {
        Self {
            transport,
            directory,
        }
    }

    /// Look up `zip` in the postal directory.
    ///
    /// # Errors
    /// - `400` with the transport error text when the call fails.
    /// - `404 can not find zipcode` for provider 404s and blank records.
    /// - `422 invalid zipcode` for the directory's error envelope.
    /// - `500` with the parse error when the body matches no known shape.
    /// - `400 error making request` for any other status.
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        zip: &ZipCode,
    ) -> Result<LocationRecord, ClassifiedError> {
        let url = self
            .directory
            .url_for(&["ws", zip.as_str(), "json", ""], &[]);
        let reply = self
            .transport
            .get(ctx, url)
            .await
            .map_err(|err| ClassifiedError::transport(None, err.to_string()))?;
        classify_reply(&reply)
    }
}

fn classify_reply(reply: &HttpReply) -> Result<LocationRecord, ClassifiedError> {
    match reply.status {
        STATUS_OK => match DirectoryAnswer::from_body(&reply.body) {
            DirectoryAnswer::Found(record) => Ok(record),
            DirectoryAnswer::Unknown => Err(ClassifiedError::zipcode_not_found()),
            DirectoryAnswer::ProviderError => Err(ClassifiedError::upstream_format()),
            DirectoryAnswer::Malformed(message) => Err(ClassifiedError::decode(message)),
        },
        STATUS_NOT_FOUND => Err(ClassifiedError::zipcode_not_found()),
        _ => Err(ClassifiedError::request_failed()),
    }
}
