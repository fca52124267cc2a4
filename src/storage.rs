// Operator construction for the storage backends callers hand to the
// transfer operations.
//
// An Operator is bound to a single bucket (or filesystem root), so it
// stands in for both the source bucket handle and the destination
// client+bucket pair. The operations borrow it and never own or cache it.

use opendal::{services, Operator};

use crate::error::Result;

/// Build an operator for an S3 bucket (or any S3-compatible endpoint).
///
/// Credentials may be omitted to fall back on the ambient credential chain
/// (environment, instance profile); no credential setup happens here.
pub fn s3_operator(
    bucket: &str,
    region: &str,
    endpoint: Option<&str>,
    access_key_id: Option<&str>,
    secret_access_key: Option<&str>,
) -> Result<Operator> {
    let mut builder = services::S3::default().bucket(bucket).region(region);

    if let Some(ep) = endpoint {
        builder = builder.endpoint(ep);
    }
    if let Some(key) = access_key_id {
        builder = builder.access_key_id(key);
    }
    if let Some(secret) = secret_access_key {
        builder = builder.secret_access_key(secret);
    }

    Ok(Operator::new(builder)?.finish())
}

/// Build an operator rooted at a local directory, for running the same
/// pipeline against local fixtures.
pub fn fs_operator(root: &str) -> Result<Operator> {
    let builder = services::Fs::default().root(root);
    Ok(Operator::new(builder)?.finish())
}
