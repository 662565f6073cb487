use std::fs;
use std::io::Cursor;

use tempfile::TempDir;
use user_registry::commands::run_session;
use user_registry::validation::{
    Rejection, validate_age, validate_email, validate_full_name, validate_phone,
};
use user_registry::{RegistrationOutcome, Registrar, RegistryConfig, UserRecord, UserStore};

// Helper to build a store inside a fresh temporary directory
fn setup_store() -> (TempDir, UserStore) {
    let dir = tempfile::tempdir().unwrap();
    let config = RegistryConfig::with_store_path(dir.path().join("users.txt"));
    let store = UserStore::from_config(&config);
    (dir, store)
}

#[test]
fn test_documented_validation_examples() {
    assert!(validate_age("1").accepted);
    assert!(validate_age("150").accepted);
    for age in ["0", "151", "abc", ""] {
        assert!(!validate_age(age).accepted, "age {age:?}");
    }

    assert!(validate_phone("+79991234567").accepted);
    assert!(!validate_phone("+78991234567").accepted);
    assert!(!validate_phone("89991234567").accepted);

    assert!(validate_email("a@b.co").accepted);
    for email in ["a@.co", "a.b@c", "@b.co"] {
        assert!(!validate_email(email).accepted, "email {email:?}");
    }
}

#[test]
fn test_full_name_character_classes() {
    let accepted = ["Мария", "Ёжиков Фёдор", "Mary-Jane Watson", "a", "Ab-Вг Дё"];
    for name in accepted {
        let result = validate_full_name(name);
        assert!(result.accepted, "{name}");
        assert_eq!(result.reason, "");
    }

    let rejected = ["", " \t ", "R2D2", "Smith, John", "Иван!", "Ivan_Ivanov"];
    for name in rejected {
        let result = validate_full_name(name);
        assert!(!result.accepted, "{name:?}");
        assert!(!result.reason.is_empty());
    }
}

#[test]
fn test_rejection_reason_is_human_readable() {
    let result = validate_age("151");
    assert_eq!(result.rejection(), Some(Rejection::AgeOutOfRange));
    assert_eq!(result.reason, "Age must be between 1 and 150");
    assert_eq!(result.into_result(), Err(Rejection::AgeOutOfRange));
}

#[test]
fn test_save_list_round_trip() {
    let (_dir, store) = setup_store();
    let record = UserRecord::new("Петр Иванов", "45", "+79161234567", "petr@yandex.ru");
    store.save(&record).unwrap();

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].fields(),
        ["Петр Иванов", "+79161234567", "petr@yandex.ru", "45"]
    );
    assert_eq!(store.list_all().unwrap(), records);
}

#[test]
fn test_exists_after_save_with_case_varied_name() {
    let (_dir, store) = setup_store();
    store
        .save(&UserRecord::new("Olga Sidorova", "33", "+79161234567", "olga@mail.ru"))
        .unwrap();

    assert!(
        store
            .exists("OLGA SIDOROVA", "+79990000000", "someone@else.org")
            .unwrap()
    );
    assert!(
        !store
            .exists("Other Person", "+79990000000", "someone@else.org")
            .unwrap()
    );
}

#[test]
fn test_existing_file_with_foreign_lines() {
    let (_dir, store) = setup_store();
    fs::write(store.path(), "header\nA|+79990000001|a@b.co|20|note\n").unwrap();

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].age, "20");
    assert!(store.exists("a", "", "").unwrap());
}

#[test]
fn test_registration_flow() {
    let (_dir, store) = setup_store();
    let registrar = Registrar::new(store);

    let anna = UserRecord::new("Anna Karenina", "28", "+7 916 000 00 01", "anna@lit.ru");
    assert!(registrar.register(&anna).unwrap().is_registered());

    let same_email = UserRecord::new("Anna K", "29", "+79160000002", "ANNA@LIT.RU");
    assert_eq!(
        registrar.register(&same_email).unwrap(),
        RegistrationOutcome::Duplicate
    );

    let bad_email = UserRecord::new("Lev Tolstoy", "82", "+79160000003", "lev@lit_ru.com");
    assert!(matches!(
        registrar.register(&bad_email).unwrap(),
        RegistrationOutcome::Rejected(_)
    ));

    let users = registrar.users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].phone, "+79160000001");
}

#[test]
fn test_console_session() {
    let (_dir, store) = setup_store();
    let registrar = Registrar::new(store);

    let mut input = Cursor::new(
        "register\nMaria\n0\n+79160000001\nmaria@mail.ru\nregister\nMaria\n20\n+79160000001\nmaria@mail.ru\nlist\nquit\n"
            .as_bytes()
            .to_vec(),
    );
    let mut output = Vec::new();
    run_session(&registrar, "> ", &mut input, &mut output).unwrap();
    let transcript = String::from_utf8(output).unwrap();

    assert!(transcript.contains("Error: Invalid age: Age must be between 1 and 150"));
    assert!(transcript.contains("User Maria registered"));
    assert!(transcript.contains("1. Maria | +79160000001 | maria@mail.ru | 20"));
}
