use jsonschema::{validator_for, Validator};
use serde_json::{json, Value};

pub const TOOL_SEARCH_DOCS: &str = "search_primevue_docs";
pub const TOOL_GET_COMPONENT_API: &str = "get_component_api";
pub const TOOL_LIST_CATEGORIES: &str = "list_categories";

/// Input schema declared for `search_primevue_docs`.
pub fn search_docs_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "Text to look for in document titles, content, and tags"
            },
            "component": {
                "type": "string",
                "description": "Restrict the search to documents whose title contains this value"
            }
        },
        "required": ["query"]
    })
}

/// Input schema declared for `get_component_api`.
pub fn component_api_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "component": {
                "type": "string",
                "description": "Component name, e.g. \"button\" or \"datatable\""
            }
        },
        "required": ["component"]
    })
}

/// Input schema declared for `list_categories`.
pub fn list_categories_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": {
                "type": "string",
                "description": "Only list this category (case-insensitive exact match)"
            }
        }
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("cannot compile input schema for {tool}: {detail}")]
    Compile { tool: &'static str, detail: String },
}

/// Compiled argument validators for every registered tool.
///
/// The same schema values feed the `tools/list` declaration and the
/// runtime check before dispatch, so clients are validated against
/// exactly what was advertised.
pub struct ToolSchemas {
    search_docs: Validator,
    component_api: Validator,
    list_categories: Validator,
}

impl ToolSchemas {
    pub fn compile() -> Result<Self, SchemaError> {
        Ok(Self {
            search_docs: compile_one(TOOL_SEARCH_DOCS, &search_docs_schema())?,
            component_api: compile_one(TOOL_GET_COMPONENT_API, &component_api_schema())?,
            list_categories: compile_one(TOOL_LIST_CATEGORIES, &list_categories_schema())?,
        })
    }

    pub fn validate_search_docs(&self, args: &Value) -> Result<(), String> {
        check(&self.search_docs, args)
    }

    pub fn validate_component_api(&self, args: &Value) -> Result<(), String> {
        check(&self.component_api, args)
    }

    pub fn validate_list_categories(&self, args: &Value) -> Result<(), String> {
        check(&self.list_categories, args)
    }
}

fn compile_one(tool: &'static str, schema: &Value) -> Result<Validator, SchemaError> {
    validator_for(schema).map_err(|e| SchemaError::Compile {
        tool,
        detail: e.to_string(),
    })
}

/// First validation failure, rendered as a one-line detail for the caller.
fn check(validator: &Validator, args: &Value) -> Result<(), String> {
    validator.validate(args).map_err(|e| e.to_string())
}
