use staff_core::errors::{ErrorKind, StaffError};
use staffdesk::config::config_from;
use staffdesk::StaffDesk;

fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut vars = vec![("STAFFDESK__AUTH__HASH_COST".to_string(), "4".to_string())];
    vars.extend(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
    vars
}

#[tokio::test]
async fn dashboard_is_gated_until_login() {
    let desk = StaffDesk::build(config_from(env(&[])).unwrap()).await.unwrap();

    let err = desk.dashboard().await.err().unwrap();
    assert!(StaffError::is_kind(&err, ErrorKind::NotAuthenticated));

    assert!(desk.session.login("admin", "admin123").await.unwrap());
    let dashboard = desk.dashboard().await.unwrap();
    assert_eq!(dashboard.employees().len(), 3);
}

#[tokio::test]
async fn file_backed_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let dir_path = dir.path().to_string_lossy().to_string();
    let vars = env(&[
        ("STAFFDESK__SESSION__STORAGE", "file"),
        ("STAFFDESK__SESSION__DIR", dir_path.as_str()),
    ]);

    let first = StaffDesk::build(config_from(vars.clone()).unwrap()).await.unwrap();
    assert!(first.session.login("admin", "admin123").await.unwrap());
    assert!(dir.path().join("employee_system_user.json").exists());

    let second = StaffDesk::build(config_from(vars.clone()).unwrap()).await.unwrap();
    assert!(second.session.is_authenticated().await);
    let dashboard = second.dashboard().await.unwrap();
    assert_eq!(dashboard.identity().role, "administrator");

    dashboard.logout().await;
    let third = StaffDesk::build(config_from(vars).unwrap()).await.unwrap();
    assert!(!third.session.is_authenticated().await);
}

#[tokio::test]
async fn garbage_session_file_does_not_stop_startup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("employee_system_user.json"),
        [0xff, 0xfe, 0x00, 0x9f],
    )
    .unwrap();
    let dir_path = dir.path().to_string_lossy().to_string();
    let vars = env(&[
        ("STAFFDESK__SESSION__STORAGE", "file"),
        ("STAFFDESK__SESSION__DIR", dir_path.as_str()),
    ]);

    let desk = StaffDesk::build(config_from(vars).unwrap()).await.unwrap();
    assert!(!desk.session.is_authenticated().await);
    assert!(desk.session.login("admin", "admin123").await.unwrap());
}

#[tokio::test]
async fn unseeded_store_starts_empty() {
    let desk = StaffDesk::build(config_from(env(&[("STAFFDESK__STORE__SEED_DEMO", "false")])).unwrap())
        .await
        .unwrap();
    assert!(desk.session.login("admin", "admin123").await.unwrap());

    let dashboard = desk.dashboard().await.unwrap();
    assert!(dashboard.employees().is_empty());
    assert_eq!(dashboard.stats().total, 0);
}
