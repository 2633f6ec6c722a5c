//! Commands emitted by tab views and the dispatcher that sends them.
//!
//! Views never call the API for mutations. They return commands; the app
//! shell handles the UI-local ones and forwards the rest to a
//! [`CommandDispatcher`].

use flume::{Receiver, Sender};
use log::{debug, info, warn};
use serde_json::{Map, Value};

use crate::api::{ApiClient, Method};
use crate::error::{ApiError, ApiResult};
use crate::order_status::OrderStatus;
use crate::resource::Resource;
use crate::row::{CellValue, Row, RowKey};
use crate::settings::PlatformSettings;

/// A modal a view asks the shell to open.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalRequest {
    Create(Resource),
    ConfirmDelete {
        resource: Resource,
        key: RowKey,
        label: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    OpenModal(ModalRequest),
    /// Show a row read-only.
    View { resource: Resource, row: Row },
    /// Open a row in the edit form.
    Edit { resource: Resource, row: Row },
    Create {
        resource: Resource,
        fields: Vec<(String, CellValue)>,
    },
    /// Submitted edit form.
    Update {
        resource: Resource,
        id: RowKey,
        fields: Vec<(String, CellValue)>,
    },
    Delete { resource: Resource, id: RowKey },
    Approve { id: RowKey },
    Reject { id: RowKey },
    ResetPassword { resource: Resource, id: RowKey },
    ChangeOrderStatus { id: RowKey, status: OrderStatus },
    SaveSettings(PlatformSettings),
    Refresh(Resource),
}

impl DashboardCommand {
    /// Commands the shell resolves without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::OpenModal(_) | Self::View { .. } | Self::Edit { .. } | Self::Refresh(_)
        )
    }
}

/// Receives mutations from the views.
pub trait CommandDispatcher {
    fn dispatch(&mut self, command: DashboardCommand);

    /// Resources whose mutation finished successfully since the last call.
    fn poll_completed(&mut self) -> Vec<Resource>;

    /// Whether a dispatched mutation has not answered yet.
    fn is_busy(&self) -> bool {
        false
    }
}

/// A command translated into one HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// List to refetch once the call succeeds.
    pub refresh: Resource,
    pub description: String,
}

fn form_body(fields: &[(String, CellValue)]) -> Value {
    let object: Map<String, Value> = fields
        .iter()
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect();
    Value::Object(object)
}

impl Mutation {
    /// `None` for UI-local commands.
    pub fn from_command(command: &DashboardCommand) -> ApiResult<Option<Self>> {
        let mutation = match command {
            DashboardCommand::OpenModal(_)
            | DashboardCommand::View { .. }
            | DashboardCommand::Edit { .. }
            | DashboardCommand::Refresh(_) => return Ok(None),
            DashboardCommand::Create { resource, fields } => Self {
                method: Method::Post,
                path: resource.path().to_owned(),
                body: Some(form_body(fields)),
                refresh: *resource,
                description: format!("Create {resource}"),
            },
            DashboardCommand::Update {
                resource,
                id,
                fields,
            } => Self {
                method: Method::Put,
                path: resource.item_path(id.as_str()),
                body: Some(form_body(fields)),
                refresh: *resource,
                description: format!("Update {resource} {id}"),
            },
            DashboardCommand::Delete { resource, id } => Self {
                method: Method::Delete,
                path: resource.item_path(id.as_str()),
                body: None,
                refresh: *resource,
                description: format!("Delete {resource} {id}"),
            },
            DashboardCommand::Approve { id } => Self {
                method: Method::Patch,
                path: format!("{}/approve", Resource::Restaurants.item_path(id.as_str())),
                body: None,
                refresh: Resource::Restaurants,
                description: format!("Approve restaurant {id}"),
            },
            DashboardCommand::Reject { id } => Self {
                method: Method::Patch,
                path: format!("{}/reject", Resource::Restaurants.item_path(id.as_str())),
                body: None,
                refresh: Resource::Restaurants,
                description: format!("Reject restaurant {id}"),
            },
            DashboardCommand::ResetPassword { resource, id } => Self {
                method: Method::Post,
                path: format!("{}/reset-password", resource.item_path(id.as_str())),
                body: None,
                refresh: *resource,
                description: format!("Reset password for {resource} {id}"),
            },
            DashboardCommand::ChangeOrderStatus { id, status } => Self {
                method: Method::Patch,
                path: format!("{}/status", Resource::Orders.item_path(id.as_str())),
                body: Some(serde_json::json!({ "status": status.as_str() })),
                refresh: Resource::Orders,
                description: format!("Set order {id} to {status}"),
            },
            DashboardCommand::SaveSettings(settings) => Self {
                method: Method::Put,
                path: Resource::Settings.path().to_owned(),
                body: Some(
                    serde_json::to_value(settings)
                        .map_err(|err| ApiError::Encode(err.to_string()))?,
                ),
                refresh: Resource::Settings,
                description: "Save platform settings".to_owned(),
            },
        };
        Ok(Some(mutation))
    }
}

type Outcome = (Mutation, ApiResult<Value>);

/// Sends each command as an HTTP mutation and logs how it went.
#[derive(Debug)]
pub struct ApiDispatcher {
    client: ApiClient,
    sender: Sender<Outcome>,
    receiver: Receiver<Outcome>,
    in_flight: usize,
}

impl ApiDispatcher {
    pub fn new(client: ApiClient) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            client,
            sender,
            receiver,
            in_flight: 0,
        }
    }
}

impl CommandDispatcher for ApiDispatcher {
    fn dispatch(&mut self, command: DashboardCommand) {
        let mutation = match Mutation::from_command(&command) {
            Ok(Some(mutation)) => mutation,
            Ok(None) => {
                debug!("Ignoring UI-local command {command:?}");
                return;
            }
            Err(err) => {
                warn!("Could not build request for {command:?}: {err}");
                return;
            }
        };

        info!("{}", mutation.description);
        self.in_flight += 1;
        let sender = self.sender.clone();
        let sent = mutation.clone();
        self.client.send(
            mutation.method,
            &mutation.path,
            mutation.body,
            move |result| {
                let _ = sender.send((sent, result));
            },
        );
    }

    fn poll_completed(&mut self) -> Vec<Resource> {
        let mut refresh = Vec::new();
        for (mutation, result) in self.receiver.try_iter() {
            self.in_flight = self.in_flight.saturating_sub(1);
            match result {
                Ok(_) => {
                    info!("{} succeeded", mutation.description);
                    if !refresh.contains(&mutation.refresh) {
                        refresh.push(mutation.refresh);
                    }
                }
                Err(err) => warn!("{} failed: {err}", mutation.description),
            }
        }
        refresh
    }

    fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
