use serde_json::Value;
use crate::cache::errors::CacheError;
use crate::cache::structs::json_codec::JsonCodec;
use crate::cache::traits::payload_codec::PayloadCodec;

impl PayloadCodec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(value).map_err(|e| CacheError::SerializationError(e.to_string()))
    }

    fn decode(&self, data: &[u8]) -> Result<Value, CacheError> {
        serde_json::from_slice(data).map_err(|e| CacheError::SerializationError(e.to_string()))
    }
}
