//! Endpoint paths, relative to the engine's base URL.

pub const DATA_ROOT: &str = "/workflow-api/data";
pub const RPC_ROOT: &str = "/workflow-api/rpc";
pub const DESIGNER: &str = "/workflow-api/designer";

pub const APPROVALS: &str = "processes/approvals";
pub const TIMERS: &str = "processes/timers";
pub const PARAMETERS: &str = "processes/parameters";
pub const TRANSITIONS: &str = "processes/transitions";
pub const PROCESSES: &str = "processes";
pub const GLOBAL_PARAMETERS: &str = "global-parameters";
pub const SCHEMES: &str = "schemes";

/// `/workflow-api/data/<entity>`
pub fn data(entity: &str) -> String {
    format!("{}/{}", DATA_ROOT, entity)
}

/// `/workflow-api/data/<entity>/<key>`, with the key percent-encoded.
pub fn data_item(entity: &str, key: &str) -> String {
    format!("{}/{}/{}", DATA_ROOT, entity, urlencoding::encode(key))
}

/// `/workflow-api/rpc/<name>`
pub fn rpc(name: &str) -> String {
    format!("{}/{}", RPC_ROOT, name)
}
