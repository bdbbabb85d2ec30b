use indexmap::IndexMap;

/// Stand-in value for every field the end user has to provide
pub const PLACEHOLDER: &str = "placeholder";

/// Field name to placeholder value, in workflow traversal order
pub type Payload = IndexMap<String, String>;
