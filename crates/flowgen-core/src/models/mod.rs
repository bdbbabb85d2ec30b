pub mod language;
pub mod payload;
pub mod request;
pub mod workflow;

pub use language::{Language, LanguageInfo};
pub use payload::{PLACEHOLDER, Payload};
pub use request::{CodeRequest, CodeResponse, DEFAULT_BASE_URL, PayloadResponse};
pub use workflow::{Connection, Node, ToolParamItem, ToolParams, ToolToUse, Workflow};
