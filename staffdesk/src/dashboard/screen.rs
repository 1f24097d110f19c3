use staff_schema::FieldErrors;

use crate::services::employees::{Employee, EmployeeForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: String },
}

/// An open add/edit form with its current field errors.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub form: EmployeeForm,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn add() -> Self {
        Self {
            mode: FormMode::Add,
            form: EmployeeForm::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit {
                id: employee.id.clone(),
            },
            form: EmployeeForm::from(employee),
            errors: FieldErrors::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    List,
    Form(FormState),
}

impl Screen {
    pub fn is_list(&self) -> bool {
        matches!(self, Screen::List)
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Screen::Form(state) => Some(state),
            Screen::List => None,
        }
    }
}
