use serde::Deserialize;
use serde::Serialize;

use crate::domain::department::models::Department;
use crate::domain::department::models::DepartmentDraft;
use crate::domain::department::models::DepartmentName;
use crate::domain::department::models::DepartmentSort;
use crate::domain::department::models::DepartmentSortField;
use crate::domain::paging::Page;
use crate::domain::paging::PageRequest;
use crate::domain::paging::SortDirection;
use crate::domain::validation::ValidationErrors;
use crate::domain::values::optional_text;

pub mod create_department;
pub mod delete_department;
pub mod get_department;
pub mod list_departments;
pub mod update_department;

const LOCATION_MAX_LENGTH: usize = 100;

/// HTTP request body for creating or replacing a department (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequestBody {
    name: Option<String>,
    location: Option<String>,
}

impl DepartmentRequestBody {
    fn try_into_draft(self) -> Result<DepartmentDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.check("name", DepartmentName::new(self.name));
        let location = errors.check("location", optional_text(self.location, LOCATION_MAX_LENGTH));

        match (name, location) {
            (Some(name), Some(location)) => Ok(DepartmentDraft { name, location }),
            _ => Err(errors),
        }
    }
}

/// Query string of the department listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDepartmentsQuery {
    page: Option<u32>,
    size: Option<u32>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
}

impl ListDepartmentsQuery {
    fn try_into_parts(self) -> Result<(PageRequest, DepartmentSort), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let request = errors.check(
            "size",
            PageRequest::new(
                self.page.unwrap_or(0),
                self.size.unwrap_or(PageRequest::DEFAULT_SIZE),
            ),
        );
        let field = match self.sort_by {
            Some(sort_by) => errors.check("sortBy", sort_by.parse::<DepartmentSortField>()),
            None => Some(DepartmentSortField::default()),
        };
        let direction = match self.sort_dir {
            Some(sort_dir) => errors.check("sortDir", sort_dir.parse::<SortDirection>()),
            None => Some(SortDirection::default()),
        };

        match (request, field, direction) {
            (Some(request), Some(field), Some(direction)) => {
                Ok((request, DepartmentSort { field, direction }))
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentData {
    pub id: String,
    pub name: String,
    pub location: Option<String>,
}

impl From<&Department> for DepartmentData {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id.to_string(),
            name: department.name.as_str().to_string(),
            location: department.location.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPageData {
    pub content: Vec<DepartmentData>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Department>> for DepartmentPageData {
    fn from(page: Page<Department>) -> Self {
        let total_pages = page.total_pages();
        Self {
            content: page.items.iter().map(DepartmentData::from).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages,
        }
    }
}
