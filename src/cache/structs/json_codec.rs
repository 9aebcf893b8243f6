/// Default codec storing payloads as their JSON byte representation.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;
