use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::MutexGuard;

use async_trait::async_trait;
use company_service::department::errors::DepartmentError;
use company_service::department::models::Department;
use company_service::department::models::DepartmentId;
use company_service::department::models::DepartmentSort;
use company_service::department::models::DepartmentSortField;
use company_service::department::ports::DepartmentRepository;
use company_service::domain::paging::Page;
use company_service::domain::paging::PageRequest;
use company_service::domain::paging::SortDirection;
use company_service::domain::uniqueness::UniqueField;
use company_service::domain::uniqueness::UniquenessConflict;
use company_service::employee::errors::EmployeeError;
use company_service::employee::models::Employee;
use company_service::employee::models::EmployeeId;
use company_service::employee::ports::EmployeeRepository;
use company_service::identity::errors::IdentityError;
use company_service::identity::errors::NotificationError;
use company_service::identity::models::User;
use company_service::identity::ports::RegistrationNotifier;
use company_service::identity::ports::UserRepository;
use company_service::project::errors::ProjectError;
use company_service::project::models::Project;
use company_service::project::models::ProjectId;
use company_service::project::ports::ProjectRepository;

/// In-process stand-in for the Postgres repositories.
///
/// Mirrors the schema's unique keys and the cascade of join rows.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    users: Vec<User>,
    departments: BTreeMap<DepartmentId, Department>,
    employees: BTreeMap<EmployeeId, Employee>,
    projects: BTreeMap<ProjectId, Project>,
    assignments: BTreeSet<(ProjectId, EmployeeId)>,
}

impl State {
    fn employee_view(&self, employee: &Employee) -> Employee {
        let mut employee = employee.clone();
        employee.project_ids = self
            .assignments
            .iter()
            .filter(|(_, member)| *member == employee.id)
            .map(|(project, _)| *project)
            .collect();
        employee
    }

    fn project_view(&self, project: &Project) -> Project {
        let mut project = project.clone();
        project.members = self
            .assignments
            .iter()
            .filter(|(owner, _)| *owner == project.id)
            .map(|(_, member)| *member)
            .collect();
        project
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("memory store lock poisoned")
    }

    pub fn assignment_count(&self) -> usize {
        self.lock().assignments.len()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, user: User) -> Result<User, IdentityError> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.username == user.username) {
            return Err(UniquenessConflict::new(UniqueField::Username, user.username.as_str()).into());
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(UniquenessConflict::new(UniqueField::UserEmail, user.email.as_str()).into());
        }
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, IdentityError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, IdentityError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }
}

fn department_conflict(state: &State, department: &Department) -> Option<DepartmentError> {
    state
        .departments
        .values()
        .any(|d| d.id != department.id && d.name == department.name)
        .then(|| UniquenessConflict::new(UniqueField::DepartmentName, department.name.as_str()).into())
}

#[async_trait]
impl DepartmentRepository for MemoryStore {
    async fn create(&self, department: Department) -> Result<Department, DepartmentError> {
        let mut state = self.lock();
        if let Some(conflict) = department_conflict(&state, &department) {
            return Err(conflict);
        }
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn find_by_id(&self, id: &DepartmentId) -> Result<Option<Department>, DepartmentError> {
        Ok(self.lock().departments.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Department>, DepartmentError> {
        Ok(self
            .lock()
            .departments
            .values()
            .find(|d| d.name.as_str() == name)
            .cloned())
    }

    async fn list(
        &self,
        request: PageRequest,
        sort: DepartmentSort,
    ) -> Result<Page<Department>, DepartmentError> {
        let mut departments: Vec<Department> = self.lock().departments.values().cloned().collect();

        departments.sort_by(|a, b| {
            let ordering = match sort.field {
                DepartmentSortField::Id => a.id.cmp(&b.id),
                DepartmentSortField::Name => a.name.as_str().cmp(b.name.as_str()),
                DepartmentSortField::Location => a.location.cmp(&b.location),
            };
            match sort.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        let total = departments.len() as u64;
        let items = departments
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size() as usize)
            .collect();

        Ok(Page::new(items, request, total))
    }

    async fn update(&self, department: Department) -> Result<Department, DepartmentError> {
        let mut state = self.lock();
        if !state.departments.contains_key(&department.id) {
            return Err(DepartmentError::NotFound(department.id));
        }
        if let Some(conflict) = department_conflict(&state, &department) {
            return Err(conflict);
        }
        state.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn delete(&self, id: &DepartmentId) -> Result<(), DepartmentError> {
        self.lock()
            .departments
            .remove(id)
            .map(|_| ())
            .ok_or(DepartmentError::NotFound(*id))
    }
}

fn employee_conflict(state: &State, employee: &Employee) -> Option<EmployeeError> {
    state
        .employees
        .values()
        .any(|e| e.id != employee.id && e.email == employee.email)
        .then(|| UniquenessConflict::new(UniqueField::EmployeeEmail, employee.email.as_str()).into())
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut state = self.lock();
        if let Some(conflict) = employee_conflict(&state, &employee) {
            return Err(conflict);
        }
        state.employees.insert(employee.id, employee.clone());
        Ok(state.employee_view(&employee))
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        let state = self.lock();
        Ok(state.employees.get(id).map(|e| state.employee_view(e)))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, EmployeeError> {
        let state = self.lock();
        Ok(state
            .employees
            .values()
            .find(|e| e.email.as_str() == email)
            .map(|e| state.employee_view(e)))
    }

    async fn list_all(&self) -> Result<Vec<Employee>, EmployeeError> {
        let state = self.lock();
        let mut employees: Vec<Employee> =
            state.employees.values().map(|e| state.employee_view(e)).collect();
        employees.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str(), a.id)
                .cmp(&(b.last_name.as_str(), b.first_name.as_str(), b.id))
        });
        Ok(employees)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut state = self.lock();
        if !state.employees.contains_key(&employee.id) {
            return Err(EmployeeError::NotFound(employee.id));
        }
        if let Some(conflict) = employee_conflict(&state, &employee) {
            return Err(conflict);
        }
        state.employees.insert(employee.id, employee.clone());
        Ok(state.employee_view(&employee))
    }

    async fn delete(&self, id: &EmployeeId) -> Result<(), EmployeeError> {
        let mut state = self.lock();
        if state.employees.remove(id).is_none() {
            return Err(EmployeeError::NotFound(*id));
        }
        state.assignments.retain(|(_, member)| member != id);
        Ok(())
    }
}

fn project_conflict(state: &State, project: &Project) -> Option<ProjectError> {
    state
        .projects
        .values()
        .any(|p| p.id != project.id && p.name == project.name)
        .then(|| UniquenessConflict::new(UniqueField::ProjectName, project.name.as_str()).into())
}

#[async_trait]
impl ProjectRepository for MemoryStore {
    async fn create(&self, project: Project) -> Result<Project, ProjectError> {
        let mut state = self.lock();
        if let Some(conflict) = project_conflict(&state, &project) {
            return Err(conflict);
        }
        state.projects.insert(project.id, project.clone());
        Ok(state.project_view(&project))
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, ProjectError> {
        let state = self.lock();
        Ok(state.projects.get(id).map(|p| state.project_view(p)))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, ProjectError> {
        let state = self.lock();
        Ok(state
            .projects
            .values()
            .find(|p| p.name.as_str() == name)
            .map(|p| state.project_view(p)))
    }

    async fn list_all(&self) -> Result<Vec<Project>, ProjectError> {
        let state = self.lock();
        let mut projects: Vec<Project> =
            state.projects.values().map(|p| state.project_view(p)).collect();
        projects.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(projects)
    }

    async fn find_by_member(&self, employee_id: &EmployeeId) -> Result<Vec<Project>, ProjectError> {
        let state = self.lock();
        let mut projects: Vec<Project> = state
            .assignments
            .iter()
            .filter(|(_, member)| member == employee_id)
            .filter_map(|(project, _)| state.projects.get(project))
            .map(|p| state.project_view(p))
            .collect();
        projects.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(projects)
    }

    async fn update(&self, project: Project) -> Result<Project, ProjectError> {
        let mut state = self.lock();
        if !state.projects.contains_key(&project.id) {
            return Err(ProjectError::NotFound(project.id));
        }
        if let Some(conflict) = project_conflict(&state, &project) {
            return Err(conflict);
        }
        state.projects.insert(project.id, project.clone());
        Ok(state.project_view(&project))
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), ProjectError> {
        let mut state = self.lock();
        if state.projects.remove(id).is_none() {
            return Err(ProjectError::NotFound(*id));
        }
        state.assignments.retain(|(project, _)| project != id);
        Ok(())
    }

    async fn add_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError> {
        let mut state = self.lock();
        if !state.projects.contains_key(project_id) {
            return Err(ProjectError::NotFound(*project_id));
        }
        if !state.employees.contains_key(employee_id) {
            return Err(ProjectError::EmployeeNotFound(*employee_id));
        }
        state.assignments.insert((*project_id, *employee_id));
        Ok(())
    }

    async fn remove_member(
        &self,
        project_id: &ProjectId,
        employee_id: &EmployeeId,
    ) -> Result<(), ProjectError> {
        self.lock().assignments.remove(&(*project_id, *employee_id));
        Ok(())
    }
}

/// Notifier that records the usernames it was asked to confirm.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().expect("notifier lock poisoned").clone()
    }
}

#[async_trait]
impl RegistrationNotifier for RecordingNotifier {
    async fn registration_confirmed(&self, user: &User) -> Result<(), NotificationError> {
        self.sent
            .lock()
            .expect("notifier lock poisoned")
            .push(user.username.as_str().to_string());
        Ok(())
    }
}
