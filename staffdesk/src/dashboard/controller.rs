use std::sync::Arc;

use anyhow::Result;
use staff_auth::{Identity, SessionGuard};
use staff_core::{ServiceMethodKind, StaffError};
use staff_schema::FieldErrors;
use tracing::{error, info, warn};

use crate::services::employees::{Employee, EmployeeForm, EmployeePatch, EmployeeStatus, FormField};
use crate::services::EmployeeStore;

use super::busy::BusyFlag;
use super::notice::{Notice, NoticeLevel};
use super::screen::{FormMode, FormState, Screen};
use super::stats::DashboardStats;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stored; the form is closed.
    Saved(Employee),
    /// Validation failed; nothing was sent to the store.
    Invalid(FieldErrors),
    /// The record being edited no longer exists; the form is closed.
    NotFound,
    /// The store call failed; the form stays open.
    Failed,
    /// The busy flag was already held, so the store was not called.
    Busy,
    /// No form is open.
    NoForm,
}

/// List/add/edit/delete workflow over the employee store.
///
/// Only constructible with an authenticated session. Local rows are the
/// source of truth for what is shown; stats are derived from them.
pub struct Dashboard {
    store: EmployeeStore,
    guard: Arc<SessionGuard>,
    identity: Identity,
    employees: Vec<Employee>,
    screen: Screen,
    stats: DashboardStats,
    busy: BusyFlag,
    notices: Vec<Notice>,
}

impl Dashboard {
    /// Requires an authenticated session, then loads every record once.
    pub async fn open(store: EmployeeStore, guard: Arc<SessionGuard>) -> Result<Self> {
        let identity = guard.require_identity().await?;
        info!(username = %identity.username, "opening dashboard");

        let mut dashboard = Self {
            store,
            guard,
            identity,
            employees: Vec::new(),
            screen: Screen::List,
            stats: DashboardStats::default(),
            busy: BusyFlag::default(),
            notices: Vec::new(),
        };
        dashboard.refresh().await;
        Ok(dashboard)
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn stats(&self) -> &DashboardStats {
        &self.stats
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Shared handle to the busy flag.
    ///
    /// Observers read it to disable actions. Whoever enters it from outside
    /// (e.g. a front-end running its own store work) blocks the dashboard's
    /// store calls until their guard drops: `submit` answers `Busy` and the
    /// other actions answer `false`.
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Case-insensitive search over name, email, position and department.
    pub fn filter(&self, query: &str) -> Vec<&Employee> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.employees.iter().collect();
        }

        self.employees
            .iter()
            .filter(|e| {
                [
                    e.full_name().as_str(),
                    e.email.as_str(),
                    e.position.as_str(),
                    e.department.as_str(),
                    e.department.label(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Reload from the store. On failure the current rows are kept.
    pub async fn refresh(&mut self) -> bool {
        let Some(_busy) = self.busy.enter() else {
            return false;
        };

        match self.store.find_all().await {
            Ok(rows) => {
                info!(count = rows.len(), "loaded employees");
                self.employees = rows;
                self.rows_changed();
                true
            }
            Err(e) => {
                self.store_failed("Failed to load employees", e);
                false
            }
        }
    }

    fn allows(&mut self, method: ServiceMethodKind, action: &str) -> bool {
        if self.store.capabilities().allows(&method) {
            return true;
        }
        warn!(?method, "store does not allow method");
        self.notices
            .push(Notice::error(format!("{action} is not permitted")));
        false
    }

    pub fn start_add(&mut self) -> bool {
        if !self.screen.is_list() || !self.allows(ServiceMethodKind::Create, "Adding employees") {
            return false;
        }
        self.screen = Screen::Form(FormState::add());
        true
    }

    /// Open the form pre-filled from the local row with `id`.
    pub fn start_edit(&mut self, id: &str) -> bool {
        if !self.screen.is_list() || !self.allows(ServiceMethodKind::Update, "Editing employees") {
            return false;
        }
        let Some(employee) = self.employees.iter().find(|e| e.id == id) else {
            return false;
        };
        self.screen = Screen::Form(FormState::edit(employee));
        true
    }

    /// Discard the open form without touching the store.
    pub fn cancel_form(&mut self) {
        self.screen = Screen::List;
    }

    pub fn form(&self) -> Option<&FormState> {
        self.screen.form()
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        match &mut self.screen {
            Screen::Form(state) => Some(&mut state.form),
            Screen::List => None,
        }
    }

    /// Set one field from form text and clear that field's error.
    pub fn set_field(&mut self, field: FormField, value: &str) -> bool {
        let Screen::Form(state) = &mut self.screen else {
            return false;
        };
        state.form.set(field, value);
        state.errors.clear_field(field.key());
        true
    }

    /// Validate, then create or update depending on the form mode.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Screen::Form(state) = &mut self.screen else {
            return SubmitOutcome::NoForm;
        };

        let data = match state.form.clone().into_create_data() {
            Ok(data) => data,
            Err(errors) => {
                state.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };
        state.errors = FieldErrors::default();
        let mode = state.mode.clone();

        let Some(_busy) = self.busy.enter() else {
            return SubmitOutcome::Busy;
        };

        match mode {
            FormMode::Add => match self.store.create(data).await {
                Ok(created) => {
                    info!(id = %created.id, "employee added");
                    self.employees.push(created.clone());
                    self.rows_changed();
                    self.notices.push(Notice::success("Employee added successfully"));
                    self.screen = Screen::List;
                    SubmitOutcome::Saved(created)
                }
                Err(e) => {
                    self.store_failed("Failed to save employee", e);
                    SubmitOutcome::Failed
                }
            },
            FormMode::Edit { id } => match self.store.update(&id, EmployeePatch::from(data)).await {
                Ok(Some(updated)) => {
                    info!(%id, "employee updated");
                    self.replace_local(updated.clone());
                    self.notices.push(Notice::success("Employee updated successfully"));
                    self.screen = Screen::List;
                    SubmitOutcome::Saved(updated)
                }
                Ok(None) => {
                    warn!(%id, "employee vanished while being edited");
                    self.notices.push(Notice::error("Employee not found"));
                    self.screen = Screen::List;
                    SubmitOutcome::NotFound
                }
                Err(e) => {
                    self.store_failed("Failed to save employee", e);
                    SubmitOutcome::Failed
                }
            },
        }
    }

    /// Returns `true` only if the store removed the record.
    pub async fn delete(&mut self, id: &str) -> bool {
        if !self.allows(ServiceMethodKind::Remove, "Deleting employees") {
            return false;
        }
        let Some(_busy) = self.busy.enter() else {
            return false;
        };

        match self.store.remove(id).await {
            Ok(true) => {
                info!(%id, "employee deleted");
                self.employees.retain(|e| e.id != id);
                self.rows_changed();
                self.notices.push(Notice::success("Employee deleted successfully"));
                true
            }
            Ok(false) => {
                warn!(%id, "delete of unknown employee");
                self.notices.push(Notice::error("Employee not found"));
                false
            }
            Err(e) => {
                self.store_failed("Failed to delete employee", e);
                false
            }
        }
    }

    /// Explicit status transition for one record.
    pub async fn set_status(&mut self, id: &str, status: EmployeeStatus) -> bool {
        if !self.allows(ServiceMethodKind::Update, "Editing employees") {
            return false;
        }
        let Some(_busy) = self.busy.enter() else {
            return false;
        };

        match self.store.update(id, EmployeePatch::status(status)).await {
            Ok(Some(updated)) => {
                info!(%id, %status, "employee status changed");
                self.replace_local(updated);
                self.notices.push(Notice::success("Employee status updated"));
                true
            }
            Ok(None) => {
                self.notices.push(Notice::error("Employee not found"));
                false
            }
            Err(e) => {
                self.store_failed("Failed to update employee", e);
                false
            }
        }
    }

    /// End the session. The dashboard is gone afterwards; pending notices
    /// are handed back with a final "Logged Out" notice.
    ///
    /// The guard drops the identity even when the stored entry cannot be
    /// removed; that failure is appended as an error notice.
    pub async fn logout(mut self) -> Vec<Notice> {
        let removed = self.guard.logout().await;
        self.notices.push(Notice::titled(
            NoticeLevel::Success,
            "Logged Out",
            "You have been successfully logged out",
        ));
        if let Err(e) = removed {
            let failure = StaffError::normalize(e);
            error!(code = failure.code(), error = %failure, "failed to forget stored session");
            self.notices
                .push(Notice::failure("Failed to clear the remembered session", &failure));
        }
        self.notices
    }

    fn store_failed(&mut self, message: &str, err: anyhow::Error) {
        let failure = StaffError::normalize(err);
        error!(code = failure.code(), kind = failure.name(), error = %failure, "{message}");
        self.notices.push(Notice::failure(message, &failure));
    }

    fn replace_local(&mut self, employee: Employee) {
        match self.employees.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => *slot = employee,
            None => self.employees.push(employee),
        }
        self.rows_changed();
    }

    fn rows_changed(&mut self) {
        self.stats = DashboardStats::from_employees(&self.employees);
    }
}
