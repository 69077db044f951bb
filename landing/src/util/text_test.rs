use super::*;

#[test]
fn defaults_are_the_built_in_copy() {
    let text = IndexText::default();
    assert_eq!(text.alert_empty_code(), "请输入暗号！");
    assert_eq!(text.btn_verifying(), "正在验证...");
    assert_eq!(text.alert_verify_failed(), "暗号错误");
    assert_eq!(text.alert_network_error(), "网络或服务器错误，请稍后再试");
    assert_eq!(text.submit_text(), "提交");
}

#[test]
fn overrides_replace_only_given_keys() {
    let text = IndexText::from_json(r#"{"submit_text":"Redeem","btn_verifying":"Checking..."}"#)
        .unwrap_or_default();
    assert_eq!(text.submit_text(), "Redeem");
    assert_eq!(text.btn_verifying(), "Checking...");
    assert_eq!(text.alert_verify_failed(), "暗号错误");
}

#[test]
fn unknown_keys_are_ignored() {
    let text = IndexText::from_json(r#"{"title":"Welcome","alert_empty_code":"Enter a code"}"#).unwrap_or_default();
    assert_eq!(text.alert_empty_code(), "Enter a code");
}

#[test]
fn null_and_empty_overrides_fall_back() {
    let text = IndexText::from_json(r#"{"submit_text":null,"alert_verify_failed":""}"#).unwrap_or_default();
    assert_eq!(text.submit_text(), "提交");
    assert_eq!(text.alert_verify_failed(), "暗号错误");
}

#[test]
fn empty_object_parses_to_defaults() {
    assert_eq!(IndexText::from_json("{}").ok(), Some(IndexText::default()));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(IndexText::from_json("[1, 2]").is_err());
    assert!(IndexText::from_json(r#"{"submit_text": 5}"#).is_err());
    assert!(IndexText::from_json("not json").is_err());
}
