pub mod validated_json;

pub use validated_json::{ValidatedJson, MAX_BODY_BYTES};
