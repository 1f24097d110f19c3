use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use staff_schema::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    HR,
    Finance,
    Sales,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Engineering,
        Department::Marketing,
        Department::HR,
        Department::Finance,
        Department::Sales,
    ];

    /// Stored value, e.g. "HR".
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::HR => "HR",
            Department::Finance => "Finance",
            Department::Sales => "Sales",
        }
    }

    /// Display label, e.g. "Human Resources".
    pub fn label(&self) -> &'static str {
        match self {
            Department::HR => "Human Resources",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s) || d.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("unknown department: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
}

impl Employee {
    /// A new record: `status` starts as active.
    pub fn from_create(id: impl Into<String>, data: CreateEmployeeData) -> Self {
        Self {
            id: id.into(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            department: data.department,
            position: data.position,
            salary: data.salary,
            hire_date: data.hire_date,
            status: EmployeeStatus::Active,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge every provided field. `id` is never touched.
    pub fn apply(&mut self, patch: EmployeePatch) {
        let EmployeePatch {
            first_name,
            last_name,
            email,
            phone,
            department,
            position,
            salary,
            hire_date,
            status,
        } = patch;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = department {
            self.department = v;
        }
        if let Some(v) = position {
            self.position = v;
        }
        if let Some(v) = salary {
            self.salary = v;
        }
        if let Some(v) = hire_date {
            self.hire_date = v;
        }
        if let Some(v) = status {
            self.status = v;
        }
    }
}

/// Write-side shape for creating an employee: no id, no status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

/// Partial update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<Department>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
    pub status: Option<EmployeeStatus>,
}

impl EmployeePatch {
    pub fn salary(salary: f64) -> Self {
        Self {
            salary: Some(salary),
            ..Self::default()
        }
    }

    pub fn status(status: EmployeeStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<CreateEmployeeData> for EmployeePatch {
    fn from(data: CreateEmployeeData) -> Self {
        Self {
            first_name: Some(data.first_name),
            last_name: Some(data.last_name),
            email: Some(data.email),
            phone: Some(data.phone),
            department: Some(data.department),
            position: Some(data.position),
            salary: Some(data.salary),
            hire_date: Some(data.hire_date),
            status: None,
        }
    }
}

/// Form fields, keyed the way error maps and payloads name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    Salary,
    HireDate,
}

impl FormField {
    pub fn key(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Department => "department",
            FormField::Position => "position",
            FormField::Salary => "salary",
            FormField::HireDate => "hireDate",
        }
    }
}

pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The loose candidate record an add/edit form works on.
///
/// Blank by default: empty strings, no department, zero salary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Option<Department>,
    pub position: String,
    pub salary: f64,
    pub hire_date: String,
}

impl EmployeeForm {
    /// Salary as typed into a form: empty or non-numeric text becomes 0.
    pub fn set_salary_input(&mut self, input: &str) {
        self.salary = input.trim().parse::<f64>().unwrap_or(0.0);
    }

    /// Set one field from form text.
    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::FirstName => self.first_name = value.to_string(),
            FormField::LastName => self.last_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
            FormField::Department => self.department = value.parse().ok(),
            FormField::Position => self.position = value.to_string(),
            FormField::Salary => self.set_salary_input(value),
            FormField::HireDate => self.hire_date = value.to_string(),
        }
    }

    /// Validate and convert into the typed create shape.
    pub fn into_create_data(self) -> Result<CreateEmployeeData, FieldErrors> {
        let errors = super::employees_schema::validate_form(&self);
        if !errors.is_empty() {
            return Err(errors);
        }

        let hire_date = NaiveDate::parse_from_str(self.hire_date.trim(), HIRE_DATE_FORMAT);
        let (Some(department), Ok(hire_date)) = (self.department, hire_date) else {
            return Err(errors);
        };

        Ok(CreateEmployeeData {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department,
            position: self.position.trim().to_string(),
            salary: self.salary,
            hire_date,
        })
    }
}

impl From<&Employee> for EmployeeForm {
    fn from(e: &Employee) -> Self {
        Self {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            email: e.email.clone(),
            phone: e.phone.clone(),
            department: Some(e.department),
            position: e.position.clone(),
            salary: e.salary,
            hire_date: e.hire_date.format(HIRE_DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "7".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
            department: Department::Sales,
            position: "Rep".to_string(),
            salary: 50000.0,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn serializes_with_camel_case_and_display_values() {
        let v = serde_json::to_value(sample()).unwrap();
        assert_eq!(v["firstName"], "Ann");
        assert_eq!(v["hireDate"], "2024-01-01");
        assert_eq!(v["department"], "Sales");
        assert_eq!(v["status"], "active");
    }

    #[test]
    fn patch_merges_only_provided_fields() {
        let mut e = sample();
        e.apply(EmployeePatch::salary(61000.0));
        assert_eq!(e.salary, 61000.0);
        assert_eq!(e.first_name, "Ann");
        assert_eq!(e.status, EmployeeStatus::Active);

        e.apply(EmployeePatch::status(EmployeeStatus::Inactive));
        assert_eq!(e.status, EmployeeStatus::Inactive);
        assert_eq!(e.id, "7");
    }

    #[test]
    fn form_prefills_from_record_and_converts_back() {
        let e = sample();
        let form = EmployeeForm::from(&e);
        assert_eq!(form.hire_date, "2024-01-01");

        let data = form.into_create_data().unwrap();
        assert_eq!(Employee::from_create("7", data), e);
    }

    #[test]
    fn salary_input_falls_back_to_zero() {
        let mut form = EmployeeForm::default();
        form.set(FormField::Salary, "72000.5");
        assert_eq!(form.salary, 72000.5);
        form.set(FormField::Salary, "");
        assert_eq!(form.salary, 0.0);
        form.set(FormField::Salary, "lots");
        assert_eq!(form.salary, 0.0);
    }

    #[test]
    fn department_parses_values_and_labels() {
        assert_eq!("HR".parse::<Department>().unwrap(), Department::HR);
        assert_eq!("Human Resources".parse::<Department>().unwrap(), Department::HR);
        assert!("Legal".parse::<Department>().is_err());

        let mut form = EmployeeForm::default();
        form.set(FormField::Department, "");
        assert_eq!(form.department, None);
    }
}
