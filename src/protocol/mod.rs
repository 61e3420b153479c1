pub mod request;
pub mod response;

pub use request::{
    ComponentApiParams, InitializeParams, JsonRpcRequest, ListCategoriesParams, ReadResourceParams,
    RpcId, SearchDocsParams, ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ListResourcesResult, ReadResourceResult, Resource,
    ResourceContent, ToolResult, ToolResultContent,
};
