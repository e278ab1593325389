use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::project::models::Project;
use crate::domain::project::models::ProjectDraft;
use crate::domain::project::models::ProjectName;
use crate::domain::project::models::Schedule;
use crate::domain::validation::ValidationErrors;
use crate::domain::values::optional_text;

pub mod assign_employee;
pub mod create_project;
pub mod delete_project;
pub mod get_project;
pub mod list_projects;
pub mod unassign_employee;
pub mod update_project;

const DESCRIPTION_MAX_LENGTH: usize = 2000;

/// HTTP request body for creating or replacing a project (raw JSON)
///
/// Membership cannot be set here; unknown fields such as `employeeIds` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestBody {
    name: Option<String>,
    description: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl ProjectRequestBody {
    fn try_into_draft(self) -> Result<ProjectDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", ProjectName::new(self.name));
        let description = errors.check(
            "description",
            optional_text(self.description, DESCRIPTION_MAX_LENGTH),
        );
        let schedule = errors.check("endDate", Schedule::new(self.start_date, self.end_date));

        match (name, description, schedule) {
            (Some(name), Some(description), Some(schedule)) => Ok(ProjectDraft {
                name,
                description,
                schedule,
            }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employee_ids: Vec<String>,
}

impl From<&Project> for ProjectData {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name.as_str().to_string(),
            description: project.description.clone(),
            start_date: project.schedule.start_date(),
            end_date: project.schedule.end_date(),
            employee_ids: project.members.iter().map(|id| id.to_string()).collect(),
        }
    }
}
