// Parquet encode and upload.
//
// The batch is serialized to Parquet in memory, the whole file is gzipped,
// and the bytes go up in a single put. An existing object at the key is
// overwritten.

use std::io::Write;
use std::sync::OnceLock;

use arrow::array::RecordBatch;
use flate2::write::GzEncoder;
use flate2::Compression as GzipLevel;
use opendal::Operator;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::{EnabledStatistics, WriterProperties};
use parquet::format::KeyValue;

use crate::error::Result;

/// Get shared writer properties (cached)
///
/// Snappy-compressed pages with dictionary encoding and page statistics;
/// the crate version is embedded in the file metadata.
pub(crate) fn writer_properties() -> &'static WriterProperties {
    static PROPERTIES: OnceLock<WriterProperties> = OnceLock::new();
    PROPERTIES.get_or_init(|| {
        let metadata = vec![KeyValue {
            key: "ndjson2parquet.version".to_string(),
            value: Some(env!("CARGO_PKG_VERSION").to_string()),
        }];

        WriterProperties::builder()
            .set_dictionary_enabled(true)
            .set_statistics_enabled(EnabledStatistics::Page)
            .set_compression(Compression::SNAPPY)
            .set_key_value_metadata(Some(metadata))
            .build()
    })
}

/// Serialize a RecordBatch as gzip-compressed Parquet and upload it.
///
/// Only the batch's own columns are written; no synthetic row-index column
/// is added. The object at `key` is replaced if it already exists.
pub async fn write_parquet(batch: &RecordBatch, op: &Operator, key: &str) -> Result<()> {
    let mut parquet_bytes = Vec::new();
    {
        let mut writer = ArrowWriter::try_new(
            &mut parquet_bytes,
            batch.schema(),
            Some(writer_properties().clone()),
        )?;
        writer.write(batch)?;
        writer.close()?;
    }

    let mut encoder = GzEncoder::new(Vec::new(), GzipLevel::default());
    encoder.write_all(&parquet_bytes)?;
    let compressed = encoder.finish()?;

    op.write(key, compressed).await?;

    tracing::info!("Wrote {} row(s) to '{}'", batch.num_rows(), key);

    Ok(())
}
