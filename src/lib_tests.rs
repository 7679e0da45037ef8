use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_ERROR);
    assert_ne!(EXIT_SUCCESS, EXIT_CANCELED);
    assert_ne!(EXIT_ERROR, EXIT_CANCELED);
}

#[test]
fn canceled_exit_code_follows_sigint_convention() {
    assert_eq!(EXIT_CANCELED, 128 + 2);
}
