// ndjson2parquet - bucket-to-bucket NDJSON to Parquet transfer helpers
//
// Three stateless operations over object storage:
// - list_keys: enumerate object keys under a prefix
// - read_ndjson: gzip-compressed NDJSON object -> Arrow RecordBatch
// - write_parquet: RecordBatch -> gzip-compressed Parquet object
//
// Each operation borrows an opendal Operator supplied by the caller and
// holds no state between calls. Composition (list -> read -> transform ->
// write) is the caller's job; nothing here retries or schedules.

mod error;
mod list;
mod read;
mod storage;
mod write;

pub use error::{Result, TransferError};
pub use list::list_keys;
pub use read::read_ndjson;
pub use storage::{fs_operator, s3_operator};
pub use write::write_parquet;

// Re-export the storage handle type so callers don't need a direct
// opendal dependency for the common path.
pub use opendal::Operator;
