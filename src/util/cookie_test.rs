use super::*;

#[test]
fn cookie_string_converts_days_to_max_age_seconds() {
    assert_eq!(
        cookie_string("refresh_token", "tok-1", 15),
        "refresh_token=tok-1; max-age=1296000; path=/"
    );
}

#[test]
fn cookie_string_one_day() {
    assert_eq!(cookie_string("a", "b", 1), "a=b; max-age=86400; path=/");
}

#[test]
fn expired_cookie_string_zeroes_max_age_and_value() {
    assert_eq!(expired_cookie_string("refresh_token"), "refresh_token=; max-age=0; path=/");
}
