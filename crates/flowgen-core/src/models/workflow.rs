use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Declarative workflow graph submitted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Workflow {
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Routing between nodes. Carried for input compatibility; payload
    /// derivation does not read it.
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Workflow {
    /// Iterate every parameter of every tool, in traversal order
    pub fn params(&self) -> impl Iterator<Item = &ToolParamItem> {
        self.nodes
            .iter()
            .flat_map(|node| node.tools_to_use.iter())
            .flat_map(|tool| tool.tool_params.items.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Node {
    #[serde(alias = "nodeId")]
    pub node_id: String,
    #[serde(default, alias = "toolsToUse")]
    pub tools_to_use: Vec<ToolToUse>,
}

/// A single tool invocation inside a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolToUse {
    #[serde(alias = "toolId")]
    #[ts(type = "number")]
    pub tool_id: i64,
    #[serde(alias = "toolName")]
    pub tool_name: String,
    #[serde(default, alias = "toolParams")]
    pub tool_params: ToolParams,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolParams {
    #[serde(default)]
    pub items: Vec<ToolParamItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToolParamItem {
    #[serde(alias = "fieldName")]
    pub field_name: String,
    /// Set when the end user, not the execution server, supplies the value
    #[serde(alias = "userDependent")]
    pub user_dependent: bool,
}

/// Directed edge between two nodes. Node ids are not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Connection {
    #[serde(alias = "fromNode")]
    pub from_node: String,
    #[serde(alias = "toNode")]
    pub to: String,
    #[serde(alias = "conditionalRouting")]
    pub conditional_routing: String,
}
