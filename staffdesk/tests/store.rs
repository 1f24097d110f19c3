use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use staff_core::errors::{ErrorKind, StaffError};
use staff_core::{RecordService, StaffConfig};
use staffdesk::services::adapters::MemoryAdapter;
use staffdesk::services::employees::employees_shared::demo_employees;
use staffdesk::services::employees::{
    CreateEmployeeData, Department, Employee, EmployeePatch, EmployeeStatus, EmployeesService,
};
use staffdesk::services::{configure, EmployeeStore};

fn seeded_store() -> EmployeeStore {
    Arc::new(EmployeesService::new(MemoryAdapter::with_records(demo_employees())))
}

fn ann_lee() -> CreateEmployeeData {
    CreateEmployeeData {
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        email: "ann@x.io".to_string(),
        phone: "1".to_string(),
        department: Department::Sales,
        position: "Rep".to_string(),
        salary: 50000.0,
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
    }
}

#[tokio::test]
async fn create_appends_an_active_record_with_a_fresh_id() {
    let store = seeded_store();
    let before: HashSet<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();

    let created = store.create(ann_lee()).await.unwrap();
    assert_eq!(created.status, EmployeeStatus::Active);
    assert!(!created.id.is_empty());
    assert!(!before.contains(&created.id));

    let all = store.find_all().await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.last(), Some(&created));
    assert_eq!(store.get(&created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn many_creates_never_reuse_an_id() {
    let store = seeded_store();
    let mut ids = HashSet::new();
    for _ in 0..50 {
        let created = store.create(ann_lee()).await.unwrap();
        assert!(ids.insert(created.id));
    }
    assert_eq!(store.find_all().await.unwrap().len(), 53);
}

#[tokio::test]
async fn salary_only_update_leaves_other_fields_alone() {
    let store = seeded_store();
    let before = store.get("1").await.unwrap().unwrap();

    let updated = store
        .update("1", EmployeePatch::salary(99000.0))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.salary, 99000.0);
    assert_eq!(
        updated,
        Employee {
            salary: 99000.0,
            ..before
        }
    );
    assert_eq!(store.get("1").await.unwrap(), Some(updated));
}

#[tokio::test]
async fn update_of_unknown_id_is_none_and_changes_nothing() {
    let store = seeded_store();
    let before = store.find_all().await.unwrap();

    let result = store.update("nope", EmployeePatch::salary(1.0)).await.unwrap();
    assert!(result.is_none());
    assert_eq!(store.find_all().await.unwrap(), before);
}

#[tokio::test]
async fn status_update_can_deactivate_and_reactivate() {
    let store = seeded_store();
    let inactive = store
        .update("1", EmployeePatch::status(EmployeeStatus::Inactive))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(inactive.status, EmployeeStatus::Inactive);

    let active = store
        .update("1", EmployeePatch::status(EmployeeStatus::Active))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.status, EmployeeStatus::Active);
}

#[tokio::test]
async fn remove_deletes_exactly_once() {
    let store = seeded_store();

    assert!(store.remove("2").await.unwrap());
    let remaining: Vec<String> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(remaining, vec!["1", "3"]);

    assert!(!store.remove("2").await.unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn deleting_an_unknown_id_is_false() {
    let store = seeded_store();
    assert!(!store.remove("zzz").await.unwrap());
    assert_eq!(store.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn stores_are_isolated_from_each_other() {
    let a = seeded_store();
    let b = seeded_store();
    assert!(a.remove("1").await.unwrap());
    assert_eq!(b.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn adapter_rejects_a_duplicate_id() {
    let adapter: Arc<dyn RecordService<Employee, Employee, EmployeePatch>> =
        Arc::new(MemoryAdapter::with_records(demo_employees()));

    let mut clash = demo_employees().remove(0);
    clash.first_name = "Other".to_string();

    let err = adapter.create(clash).await.unwrap_err();
    assert!(StaffError::is_kind(&err, ErrorKind::Conflict));
    assert_eq!(adapter.find_all().await.unwrap().len(), 3);
}

#[tokio::test]
async fn configure_honours_seed_flag() {
    let seeded = configure(&StaffConfig::new().snapshot());
    assert_eq!(seeded.find_all().await.unwrap().len(), 3);

    let mut cfg = StaffConfig::new();
    cfg.set("store.seed_demo", "false");
    let empty = configure(&cfg.snapshot());
    assert!(empty.find_all().await.unwrap().is_empty());
}
