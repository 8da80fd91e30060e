//! Command-keyed request/response boundary to the backend
//!
//! The backend is driven by named commands carrying a JSON argument object.
//! Any transport that can answer such a request (an IPC bridge, an HTTP
//! endpoint, an in-process stub) implements [`Invoker`].

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Result, SnipError};
use crate::item::{AiSettingsInput, CreateItemInput, Item, UpdateItemInput};

use super::ItemSource;

/// A request the backend understands
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    CreateItem(CreateItemInput),
    UpdateItem(UpdateItemInput),
    DeleteItem { id: String },
    GetItem { id: String },
    ListItems,
    SearchItems { query: String },
    GetAllTags,
    GetAllFolders,
    GetSetting { key: String },
    SetSetting { key: String, value: String },
    GetAiSettings,
    SetAiSettings(AiSettingsInput),
    GetDataDir,
    SetDataDir { path: String },
}

impl BackendCommand {
    /// Command name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::CreateItem(_) => "create_item",
            BackendCommand::UpdateItem(_) => "update_item",
            BackendCommand::DeleteItem { .. } => "delete_item",
            BackendCommand::GetItem { .. } => "get_item",
            BackendCommand::ListItems => "list_items",
            BackendCommand::SearchItems { .. } => "search_items",
            BackendCommand::GetAllTags => "get_all_tags",
            BackendCommand::GetAllFolders => "get_all_folders",
            BackendCommand::GetSetting { .. } => "get_setting",
            BackendCommand::SetSetting { .. } => "set_setting",
            BackendCommand::GetAiSettings => "get_ai_settings",
            BackendCommand::SetAiSettings(_) => "set_ai_settings",
            BackendCommand::GetDataDir => "get_data_dir",
            BackendCommand::SetDataDir { .. } => "set_data_dir",
        }
    }

    /// Argument object sent with the command
    pub fn args(&self) -> Value {
        match self {
            BackendCommand::CreateItem(input) => json!({ "input": input }),
            BackendCommand::UpdateItem(input) => json!({ "input": input }),
            BackendCommand::SetAiSettings(input) => json!({ "input": input }),
            BackendCommand::DeleteItem { id } | BackendCommand::GetItem { id } => {
                json!({ "id": id })
            }
            BackendCommand::SearchItems { query } => json!({ "query": query }),
            BackendCommand::GetSetting { key } => json!({ "key": key }),
            BackendCommand::SetSetting { key, value } => json!({ "key": key, "value": value }),
            BackendCommand::SetDataDir { path } => json!({ "path": path }),
            BackendCommand::ListItems
            | BackendCommand::GetAllTags
            | BackendCommand::GetAllFolders
            | BackendCommand::GetAiSettings
            | BackendCommand::GetDataDir => json!({}),
        }
    }

    /// Whether the command changes the item collection
    ///
    /// Snapshot caches must be invalidated after a mutating command succeeds.
    pub fn mutates_items(&self) -> bool {
        matches!(
            self,
            BackendCommand::CreateItem(_)
                | BackendCommand::UpdateItem(_)
                | BackendCommand::DeleteItem { .. }
                | BackendCommand::SetDataDir { .. }
        )
    }
}

/// Transport that executes backend commands
#[async_trait]
pub trait Invoker: Send + Sync {
    async fn invoke(&self, command: BackendCommand) -> Result<Value>;
}

/// [`ItemSource`] backed by the `list_items` command of an [`Invoker`]
pub struct InvokeSource<I> {
    invoker: I,
}

impl<I: Invoker> InvokeSource<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }
}

#[async_trait]
impl<I: Invoker> ItemSource for InvokeSource<I> {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let command = BackendCommand::ListItems;
        let name = command.name();
        let value = self.invoker.invoke(command).await?;
        serde_json::from_value(value).map_err(|e| SnipError::backend(name, e))
    }
}
