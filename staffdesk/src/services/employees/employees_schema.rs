use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use staff_schema::FieldErrors;
use validator::{Validate, ValidationError, ValidationErrors};

use super::employees_model::{EmployeeForm, FormField, HIRE_DATE_FORMAT};

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

fn err(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn required_text(errs: &mut ValidationErrors, field: FormField, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errs.add(field.key(), err("required", message));
    }
}

impl Validate for EmployeeForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::new();

        required_text(&mut errs, FormField::FirstName, &self.first_name, "First name is required");
        required_text(&mut errs, FormField::LastName, &self.last_name, "Last name is required");

        if self.email.trim().is_empty() {
            errs.add(FormField::Email.key(), err("required", "Email is required"));
        } else if !EMAIL_SHAPE.is_match(&self.email) {
            errs.add(FormField::Email.key(), err("email", "Email is invalid"));
        }

        required_text(&mut errs, FormField::Phone, &self.phone, "Phone is required");

        if self.department.is_none() {
            errs.add(FormField::Department.key(), err("required", "Department is required"));
        }

        required_text(&mut errs, FormField::Position, &self.position, "Position is required");

        if !self.salary.is_finite() || self.salary <= 0.0 {
            errs.add(FormField::Salary.key(), err("range", "Valid salary is required"));
        }

        let hire_date = self.hire_date.trim();
        if hire_date.is_empty() {
            errs.add(FormField::HireDate.key(), err("required", "Hire date is required"));
        } else if NaiveDate::parse_from_str(hire_date, HIRE_DATE_FORMAT).is_err() {
            errs.add(FormField::HireDate.key(), err("date", "Hire date is invalid"));
        }

        if errs.is_empty() {
            Ok(())
        } else {
            Err(errs)
        }
    }
}

/// Field → message for every rule the form breaks. Empty means valid.
pub fn validate_form(form: &EmployeeForm) -> FieldErrors {
    staff_schema::check(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::employees::employees_model::Department;

    fn valid_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone: "555".to_string(),
            department: Some(Department::Sales),
            position: "Rep".to_string(),
            salary: 50000.0,
            hire_date: "2024-01-01".to_string(),
        }
    }

    fn fields(errors: &FieldErrors) -> Vec<&str> {
        errors.fields().collect()
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(validate_form(&valid_form()).is_empty());
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let errors = validate_form(&EmployeeForm::default());
        assert_eq!(
            fields(&errors),
            vec![
                "department",
                "email",
                "firstName",
                "hireDate",
                "lastName",
                "phone",
                "position",
                "salary"
            ]
        );
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("department"), Some("Department is required"));
        assert_eq!(errors.get("salary"), Some("Valid salary is required"));
        assert_eq!(errors.get("hireDate"), Some("Hire date is required"));
    }

    #[test]
    fn whitespace_only_text_counts_as_missing() {
        let form = EmployeeForm {
            last_name: "   ".to_string(),
            position: "\t".to_string(),
            ..valid_form()
        };
        assert_eq!(fields(&validate_form(&form)), vec!["lastName", "position"]);
    }

    #[test]
    fn malformed_email_is_the_only_error() {
        for email in ["ann", "ann@x", "@x.com ", "ann x.com"] {
            let form = EmployeeForm {
                email: email.to_string(),
                ..valid_form()
            };
            let errors = validate_form(&form);
            assert_eq!(fields(&errors), vec!["email"], "email {email:?}");
            assert_eq!(errors.get("email"), Some("Email is invalid"));
        }
    }

    #[test]
    fn permissive_email_shapes_pass() {
        for email in ["a@b.c", "first.last+tag@sub.example.org"] {
            let form = EmployeeForm {
                email: email.to_string(),
                ..valid_form()
            };
            assert!(validate_form(&form).is_empty(), "email {email:?}");
        }
    }

    #[test]
    fn non_positive_salary_is_rejected() {
        for salary in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let form = EmployeeForm {
                salary,
                ..valid_form()
            };
            assert_eq!(fields(&validate_form(&form)), vec!["salary"], "salary {salary}");
        }
    }

    #[test]
    fn unparseable_hire_date_is_invalid() {
        let form = EmployeeForm {
            hire_date: "01/02/2024".to_string(),
            ..valid_form()
        };
        let errors = validate_form(&form);
        assert_eq!(errors.get("hireDate"), Some("Hire date is invalid"));
        assert_eq!(errors.len(), 1);
    }
}
