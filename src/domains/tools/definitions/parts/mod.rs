//! Part tools: one MCP tool per BOM command.

pub mod common;

mod add_sub_part;
mod copy;
mod count_descendants;
mod create;
mod delete;
mod get;
mod list;
mod show_subtree;
mod update;

pub use add_sub_part::{AddSubPartParams, AddSubPartTool};
pub use copy::{CopyPartParams, CopyPartTool};
pub use count_descendants::{CountDescendantsParams, CountDescendantsTool};
pub use create::{CreatePartParams, CreatePartTool};
pub use delete::{DeletePartParams, DeletePartTool};
pub use get::{GetPartParams, GetPartTool};
pub use list::{ListPartsParams, ListPartsTool};
pub use show_subtree::{ShowSubtreeParams, ShowSubtreeTool};
pub use update::{UpdatePartParams, UpdatePartTool};
