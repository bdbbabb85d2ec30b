pub mod payload;
pub mod snippet;

pub use payload::derive_payload;
pub use snippet::{generate_code, render_snippet};

use crate::error::Result;
use crate::models::{CodeRequest, CodeResponse};

/// Derive the payload for a request's workflow and render it in the requested
/// language. Nothing is returned unless both steps succeed.
pub fn generate(request: &CodeRequest) -> Result<CodeResponse> {
    let payload = derive_payload(&request.workflow);
    let code = generate_code(&request.language, request.effective_base_url(), &payload)?;
    Ok(CodeResponse { code, payload })
}
