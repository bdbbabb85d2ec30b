//! Payload derivation: which fields does the end user have to send?

use crate::models::{PLACEHOLDER, Payload, Workflow};
use tracing::debug;

/// Collect every user-dependent parameter of the workflow into a placeholder
/// payload.
///
/// Nodes, tools and parameters are visited in the order given. Parameters the
/// execution server fills itself (`user_dependent == false`) are skipped. A
/// field name seen more than once keeps its first position; the value is the
/// same placeholder either way.
pub fn derive_payload(workflow: &Workflow) -> Payload {
    let mut payload = Payload::new();

    for param in workflow.params().filter(|p| p.user_dependent) {
        if payload
            .insert(param.field_name.clone(), PLACEHOLDER.to_string())
            .is_some()
        {
            debug!(field = %param.field_name, "Duplicate user-dependent field");
        }
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Connection, Node, ToolParamItem, ToolParams, ToolToUse};

    fn param(name: &str, user_dependent: bool) -> ToolParamItem {
        ToolParamItem {
            field_name: name.to_string(),
            user_dependent,
        }
    }

    fn tool(id: i64, params: Vec<ToolParamItem>) -> ToolToUse {
        ToolToUse {
            tool_id: id,
            tool_name: format!("tool-{}", id),
            tool_params: ToolParams { items: params },
        }
    }

    fn node(id: &str, tools: Vec<ToolToUse>) -> Node {
        Node {
            node_id: id.to_string(),
            tools_to_use: tools,
        }
    }

    #[test]
    fn test_empty_workflow_yields_empty_payload() {
        assert!(derive_payload(&Workflow::default()).is_empty());
    }

    #[test]
    fn test_empty_nodes_and_tools() {
        let workflow = Workflow {
            nodes: vec![node("n1", vec![]), node("n2", vec![tool(1, vec![])])],
            connections: vec![],
        };
        assert!(derive_payload(&workflow).is_empty());
    }

    #[test]
    fn test_only_user_dependent_fields_are_kept() {
        let workflow = Workflow {
            nodes: vec![node(
                "n1",
                vec![tool(
                    1,
                    vec![param("email", true), param("internalFlag", false)],
                )],
            )],
            connections: vec![],
        };

        let payload = derive_payload(&workflow);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("email").map(String::as_str), Some("placeholder"));
        assert!(!payload.contains_key("internalFlag"));
    }

    #[test]
    fn test_traversal_order_across_nodes() {
        let workflow = Workflow {
            nodes: vec![
                node(
                    "node1",
                    vec![tool(
                        1,
                        vec![
                            param("user_email", true),
                            param("user_name", true),
                            param("template_id", false),
                        ],
                    )],
                ),
                node(
                    "node2",
                    vec![tool(
                        2,
                        vec![
                            param("employee_name", true),
                            param("requested_days", true),
                            param("current_reason", false),
                        ],
                    )],
                ),
            ],
            connections: vec![Connection {
                from_node: "node1".to_string(),
                to: "node2".to_string(),
                conditional_routing: "success".to_string(),
            }],
        };

        let payload = derive_payload(&workflow);
        let keys: Vec<&str> = payload
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            vec!["user_email", "user_name", "employee_name", "requested_days"]
        );
    }

    #[test]
    fn test_duplicate_fields_collapse_to_one_entry() {
        let workflow = Workflow {
            nodes: vec![
                node("n1", vec![tool(1, vec![param("email", true)])]),
                node(
                    "n2",
                    vec![
                        tool(2, vec![param("name", true), param("email", true)]),
                        tool(3, vec![param("email", false)]),
                    ],
                ),
            ],
            connections: vec![],
        };

        let payload = derive_payload(&workflow);
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get_index(0).map(|(k, _)| k.as_str()), Some("email"));
        assert_eq!(payload["email"], PLACEHOLDER);
        assert_eq!(payload["name"], PLACEHOLDER);
    }

    #[test]
    fn test_connections_do_not_affect_payload() {
        let mut workflow = Workflow {
            nodes: vec![node("n1", vec![tool(1, vec![param("email", true)])])],
            connections: vec![],
        };
        let without = derive_payload(&workflow);

        workflow.connections.push(Connection {
            from_node: "n1".to_string(),
            to: "missing".to_string(),
            conditional_routing: "on_error".to_string(),
        });
        assert_eq!(derive_payload(&workflow), without);
    }
}
