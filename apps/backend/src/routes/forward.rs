use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::domain::InboundPayload;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::forwarder::{forward, ForwardOutcome};
use crate::middleware::RequestOutcome;
use crate::state::app_state::AppState;

pub const SEND_TO_TRANSACTION_QUEUE_PATH: &str = "/api/SendToTransactionQueue";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardResponse {
    pub result: &'static str,
    pub round_id: i64,
}

/// 200 with `{result, roundId}` when the round was queued, 400 plain text
/// when the gate rejected it. Queue failures surface as 500 via `AppError`.
async fn send_to_transaction_queue(
    payload: ValidatedJson<InboundPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let outcome = forward(&payload, &app_state.forwarder, app_state.transport.as_ref()).await?;

    Ok(match outcome {
        ForwardOutcome::Forwarded { round_id } => RequestOutcome::Forwarded { round_id }.attach(
            HttpResponse::Ok().json(ForwardResponse {
                result: "success",
                round_id,
            }),
        ),
        ForwardOutcome::Rejected(rejection) => RequestOutcome::Rejected {
            round_id: rejection.round_id(),
        }
        .attach(
            HttpResponse::BadRequest()
                .content_type(ContentType::plaintext())
                .body(rejection.to_string()),
        ),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SEND_TO_TRANSACTION_QUEUE_PATH)
            .route(web::get().to(send_to_transaction_queue))
            .route(web::post().to(send_to_transaction_queue)),
    );
}
