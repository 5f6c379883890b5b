#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    fee_forwarder_test_support::logging::init();
}

/// Read a response body as UTF-8 text.
pub async fn body_text(resp: ServiceResponse<BoxBody>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("response body should be valid UTF-8")
}

pub mod proptest_prelude;
