use crate::api::ApiError;
use axum::Json;
use flowgen_core::{CodeRequest, CodeResponse, PayloadResponse, Workflow};
use tracing::{debug, info};

// POST /generate-code
pub async fn generate_code(Json(request): Json<CodeRequest>) -> Result<Json<CodeResponse>, ApiError> {
    info!(
        language = %request.language,
        base_url = %request.effective_base_url(),
        nodes = request.workflow.nodes.len(),
        "Generating client code"
    );

    let response = flowgen_core::generate(&request)?;

    debug!(
        language = %request.language,
        fields = response.payload.len(),
        "Client code generated"
    );
    Ok(Json(response))
}

// POST /generate-payload
pub async fn generate_payload(Json(workflow): Json<Workflow>) -> Json<PayloadResponse> {
    let payload = flowgen_core::derive_payload(&workflow);
    debug!(
        nodes = workflow.nodes.len(),
        fields = payload.len(),
        "Payload derived"
    );
    Json(PayloadResponse { payload })
}
