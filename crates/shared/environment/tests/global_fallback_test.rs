//! Process-wide instance fallback tests.
//!
//! Kept in its own test binary: `get()` installs the defaults for the whole process.

use environment::{EnvError, Environment};

#[test]
fn test_get_before_init_installs_development_defaults() {
    let fallback = environment::get();
    assert_eq!(fallback, &Environment::development());

    let err = environment::init(Environment::development()).unwrap_err();
    assert!(matches!(err, EnvError::AlreadyInitialized));
    assert!(std::ptr::eq(environment::get(), fallback));
}
