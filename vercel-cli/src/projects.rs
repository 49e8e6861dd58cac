//! Project rows and the columns they are shown with.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use datatables::prelude::*;
use serde::Deserialize;
use vercel_lib::ApiClient;

use crate::error::CliError;

/// One entry of `GET /v9/projects`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub node_version: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}

impl TableRow for Project {
    fn value(&self, key: &str) -> Value {
        match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "framework" => self.framework.clone().into(),
            "nodeVersion" => self.node_version.clone().into(),
            "updatedAt" => self.updated_at.into(),
            _ => Value::Null,
        }
    }
}

pub async fn list_projects(
    client: &ApiClient,
    token: &str,
    team_id: Option<&str>,
    limit: usize,
) -> Result<Vec<Project>, CliError> {
    let path = projects_path(team_id, limit);
    let list: ProjectList = client.fetch(&path, token, None).await?;
    log::info!("Fetched {} projects", list.projects.len());
    Ok(list.projects)
}

pub fn columns() -> Vec<Column<Project>> {
    vec![
        Column::new("name", "Name"),
        Column::new("framework", "Framework").render(Arc::new(
            |value: &Value, _: &Project, _: usize| {
                Element::text(if value.is_null() {
                    "other".to_string()
                } else {
                    value.to_string()
                })
            },
        )),
        Column::new("nodeVersion", "Node"),
        Column::new("updatedAt", "Updated").render(Arc::new(
            |value: &Value, _: &Project, _: usize| {
                let text = match value {
                    Value::Int(ms) => relative_age(*ms, now_millis()),
                    _ => String::new(),
                };
                Element::text(text)
            },
        )),
    ]
}

/// Context menu entries for one project.
pub fn menu_items() -> RowMenuItems<Project> {
    Arc::new(|_: &Value, project: &Project, _: usize| {
        vec![
            Element::text(format!("Open {}", project.name)),
            Element::text("Copy ID").data("project-id", project.id.clone()),
            Element::text("Settings"),
        ]
    })
}

fn projects_path(team_id: Option<&str>, limit: usize) -> String {
    match team_id {
        Some(team_id) => format!(
            "v9/projects?limit={}&teamId={}",
            limit,
            urlencoding::encode(team_id)
        ),
        None => format!("v9/projects?limit={}", limit),
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Coarse age of a timestamp, e.g. `"3d ago"`.
pub fn relative_age(then_ms: i64, now_ms: i64) -> String {
    let secs = now_ms.saturating_sub(then_ms).max(0) / 1000;
    match secs {
        0..60 => "just now".to_string(),
        60..3600 => format!("{}m ago", secs / 60),
        3600..86_400 => format!("{}h ago", secs / 3600),
        _ => format!("{}d ago", secs / 86_400),
    }
}
