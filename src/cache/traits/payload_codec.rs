use serde_json::Value;
use crate::cache::errors::CacheError;

/// Converts boundary payloads to and from the byte form the cache stores.
///
/// Compression is applied to the encoded bytes, so a codec only has to care
/// about representing the value, not about its size.
pub trait PayloadCodec: Send + Sync {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, CacheError>;
    fn decode(&self, data: &[u8]) -> Result<Value, CacheError>;
}
