// NDJSON object decode: get, gunzip, infer schema, assemble one batch.

use std::io::{Cursor, Read};
use std::sync::Arc;

use arrow::array::RecordBatch;
use arrow::compute::concat_batches;
use arrow::datatypes::Schema;
use arrow::json::reader::infer_json_schema_from_seekable;
use arrow::json::ReaderBuilder;
use flate2::read::GzDecoder;
use opendal::Operator;

use crate::error::Result;

/// Read one gzip-compressed NDJSON object into a RecordBatch.
///
/// Columns are inferred from the records themselves: the schema is the
/// union of the fields seen during inference, and records missing a field
/// decode to null. An object that decompresses to nothing yields an empty
/// batch with an empty schema.
///
/// Fails if the key does not exist, the body is not valid gzip, or the
/// decompressed stream is not valid line-delimited JSON.
pub async fn read_ndjson(op: &Operator, key: &str) -> Result<RecordBatch> {
    let body = op.read(key).await?.to_vec();

    let mut decoder = GzDecoder::new(body.as_slice());
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;

    if decompressed.is_empty() {
        tracing::debug!("Read 0 row(s) from '{}'", key);
        return Ok(RecordBatch::new_empty(Arc::new(Schema::empty())));
    }

    let mut cursor = Cursor::new(decompressed);
    let (schema, _) = infer_json_schema_from_seekable(&mut cursor, None)?;
    let schema = Arc::new(schema);

    let reader = ReaderBuilder::new(schema.clone()).build(cursor)?;
    let batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;

    let batch = if batches.is_empty() {
        RecordBatch::new_empty(schema)
    } else {
        concat_batches(&schema, &batches)?
    };

    tracing::debug!("Read {} row(s) from '{}'", batch.num_rows(), key);

    Ok(batch)
}
