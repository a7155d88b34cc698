//! Wire models of the Workflow API.
//!
//! Field names follow the engine's camelCase JSON. Unknown fields are ignored
//! on read so newer engine versions stay readable; optional fields are left
//! out on write.

mod approval;
mod bulk;
mod collection;
mod command;
mod parameter;
mod process;
pub mod rpc;
mod scheme;
pub mod timestamp;
mod timer;

pub use approval::ApprovalModel;
pub use bulk::{BulkResponse, BulkTaskState};
pub use collection::{CollectionResponse, DeleteCollectionResponse};
pub use command::{CommandDefinition, CommandParameter};
pub use parameter::{GlobalParameterModel, ParameterModel};
pub use process::{
    InboxItemModel, ProcessInstanceModel, ProcessStatus, StateModel, TransitionHistoryModel,
};
pub use scheme::SchemeModel;
pub use timer::TimerModel;
