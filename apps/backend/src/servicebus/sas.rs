//! Shared Access Signature tokens for the Service Bus REST API.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sha2::Sha256;

use super::QueueError;

type HmacSha256 = Hmac<Sha256>;

/// Unreserved characters stay literal; everything else is percent-encoded.
const SAS_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, SAS_ENCODE_SET).to_string()
}

/// Mint a SAS token for `resource_uri` valid until `expiry` (unix seconds).
///
/// Format: `SharedAccessSignature sr=<uri>&sig=<sig>&se=<expiry>&skn=<key_name>`
/// where `sig` is base64(HMAC-SHA256(key, "<encoded uri>\n<expiry>")).
pub fn generate_sas_token(
    resource_uri: &str,
    key_name: &str,
    key: &str,
    expiry: i64,
) -> Result<String, QueueError> {
    let encoded_uri = encode(resource_uri);
    let string_to_sign = format!("{encoded_uri}\n{expiry}");

    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| QueueError::InvalidRequest(format!("SAS key rejected: {e}")))?;
    mac.update(string_to_sign.as_bytes());
    let signature = BASE64.encode(mac.finalize().into_bytes());

    Ok(format!(
        "SharedAccessSignature sr={encoded_uri}&sig={}&se={expiry}&skn={}",
        encode(&signature),
        encode(key_name)
    ))
}
