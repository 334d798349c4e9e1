use brightboard_core::model::account::{ROLE_ADMIN, ROLE_USER};
use brightboard_core::{Account, AccountService, ConnectionProvider};

#[test]
fn create_and_get_roundtrip() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    let mut account = Account::new("Ana Reis", "ana@example.com", "s3cret", ROLE_USER);
    account.birth_date = Some("1999-04-17".to_string());
    account.phone = Some("31999998888".to_string());

    let created = service.create_account(account).unwrap();
    assert!(created.id > 0);
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);

    let loaded = service.get_account(created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.birth_date.as_deref(), Some("1999-04-17"));
    assert_eq!(loaded.gender, None);
}

#[test]
fn get_missing_account_returns_none() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    assert!(service.get_account(12345).is_none());
}

#[test]
fn create_with_blank_email_is_declined_without_insert() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    assert!(service
        .create_account(Account::new("No Email", "   ", "pw", ROLE_USER))
        .is_none());
    assert!(service.list_accounts().is_empty());
}

#[test]
fn list_sorts_by_name_ascending_and_omits_secret() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    for (name, email) in [
        ("Carla", "carla@example.com"),
        ("Alice", "alice@example.com"),
        ("Bruno", "bruno@example.com"),
    ] {
        service
            .create_account(Account::new(name, email, "pw", ROLE_USER))
            .unwrap();
    }

    let listed = service.list_accounts();
    let names: Vec<&str> = listed.iter().map(|account| account.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bruno", "Carla"]);
    assert!(listed.iter().all(|account| account.secret.is_none()));
}

#[test]
fn email_lookup_includes_secret() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    service
        .create_account(Account::new("Admin", "admin@example.com", "hunter2", ROLE_ADMIN))
        .unwrap();

    let found = service.get_account_by_email("admin@example.com").unwrap();
    assert_eq!(found.secret.as_deref(), Some("hunter2"));
    assert_eq!(found.role, ROLE_ADMIN);

    assert!(service.get_account_by_email("nobody@example.com").is_none());
}

#[test]
fn update_requires_positive_id() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    let mut unsaved = Account::new("Draft", "draft@example.com", "pw", ROLE_USER);
    assert!(!service.update_account(&mut unsaved));
}

#[test]
fn update_of_missing_id_returns_false_and_leaves_storage_unchanged() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    service
        .create_account(Account::new("Kept", "kept@example.com", "pw", ROLE_USER))
        .unwrap();

    let mut ghost = Account::new("Ghost", "ghost@example.com", "pw", ROLE_USER);
    ghost.id = 777;
    assert!(!service.update_account(&mut ghost));

    let listed = service.list_accounts();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Kept");
}

#[test]
fn update_overwrites_fields_and_refreshes_updated_at() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    let mut account = service
        .create_account(Account::new("Old Name", "old@example.com", "pw", ROLE_USER))
        .unwrap();
    let created_at = account.created_at;

    account.name = "New Name".to_string();
    account.role = ROLE_ADMIN.to_string();
    assert!(service.update_account(&mut account));
    assert!(account.updated_at >= created_at);

    let loaded = service.get_account(account.id).unwrap();
    assert_eq!(loaded.name, "New Name");
    assert_eq!(loaded.role, ROLE_ADMIN);
    assert_eq!(loaded.created_at, created_at);
}

#[test]
fn delete_twice_returns_true_then_false() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let service = AccountService::new(&provider);

    let created = service
        .create_account(Account::new("Gone Soon", "gone@example.com", "pw", ROLE_USER))
        .unwrap();

    assert!(service.delete_account(created.id));
    assert!(!service.delete_account(created.id));
    assert!(service.get_account(created.id).is_none());
}
