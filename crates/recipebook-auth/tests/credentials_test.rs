use recipebook_auth::{is_valid_email, Authenticator};
use recipebook_core::AppConfig;

fn authenticator() -> Authenticator {
    let mut config = AppConfig::default();
    config.auth.argon2_memory_kb = 64;
    config.auth.argon2_iterations = 1;

    let mut auth = Authenticator::new(config.auth);
    auth.register("admin", "1234").expect("register admin");
    auth
}

#[test]
fn test_rejected_credentials() {
    let mut auth = authenticator();

    let cases = [
        ("", "1234"),
        ("admin", ""),
        ("", ""),
        ("admin", "123"),
        ("admin user", "1234"),
        ("a", "1234"),
        ("admin#123", "1234"),
        ("user", "1234"),
        ("guest", "guest"),
        ("user+test", "1234"),
        ("12345", "1234"),
        ("admin", "wrongpassword"),
    ];
    for (username, password) in cases {
        assert!(
            !auth.authenticate(username, password),
            "{username:?}/{password:?} should be rejected"
        );
    }

    let long_password = "a".repeat(100);
    assert!(!auth.authenticate("admin", &long_password));

    assert_eq!(auth.failed_attempts(), 13);
    assert!(!auth.is_authenticated());
}

#[test]
fn test_repeated_failures_do_not_lock_out() {
    let mut auth = authenticator();

    for attempt in 0..50 {
        assert!(
            !auth.authenticate("admin", "wrongpassword"),
            "attempt {attempt} should fail"
        );
    }
    assert_eq!(auth.failed_attempts(), 50);

    assert!(auth.authenticate("admin", "1234"));
    assert_eq!(auth.failed_attempts(), 0);
}

#[test]
fn test_special_characters_in_password() {
    let mut auth = authenticator();
    auth.register("editor", "P@ssw0rd!")
        .expect("register editor");

    assert!(auth.authenticate("editor", "P@ssw0rd!"));
    assert_eq!(auth.current_user(), Some("editor"));
}

#[test]
fn test_email_and_authentication_together() {
    let mut auth = authenticator();

    assert!(is_valid_email("user@example.com"));
    assert!(!is_valid_email("userexample.com"));
    assert!(auth.authenticate("admin", "1234"));
    assert!(!auth.authenticate("admin", "wrongpassword"));

    // A failed attempt does not end the existing session
    assert_eq!(auth.current_user(), Some("admin"));
}
