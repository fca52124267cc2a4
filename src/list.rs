// Object enumeration with prefix/delimiter listing semantics.

use opendal::Operator;

use crate::error::{Result, TransferError};

/// List the keys of all objects under `prefix`.
///
/// `delimiter` selects the listing depth the way S3-style APIs do: the
/// empty string lists every object under the prefix, `"/"` lists only the
/// objects directly at that level. Pseudo-directory entries are dropped so
/// the result contains object keys only, in whatever order the backend
/// yields them (not guaranteed sorted). A prefix with no matching objects
/// yields an empty vec, not an error.
pub async fn list_keys(op: &Operator, delimiter: &str, prefix: &str) -> Result<Vec<String>> {
    let entries = match delimiter {
        "" => op.list_with(prefix).recursive(true).await?,
        "/" => op.list(prefix).await?,
        other => return Err(TransferError::UnsupportedDelimiter(other.to_string())),
    };

    let keys: Vec<String> = entries
        .into_iter()
        .filter(|entry| entry.metadata().mode().is_file())
        .map(|entry| entry.path().to_string())
        .collect();

    tracing::debug!("Listed {} object(s) under prefix '{}'", keys.len(), prefix);

    Ok(keys)
}
