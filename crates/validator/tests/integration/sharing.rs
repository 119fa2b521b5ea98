//! A configured rule set shared across threads.

use std::sync::Arc;
use std::thread;

use kotoba_validator::RuleSet;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn rule_set_is_send_and_sync() {
    assert_send_sync::<RuleSet>();
    assert_send_sync::<kotoba_validator::BoxedValidator>();
}

#[test]
fn shared_rule_set_gives_same_verdicts() {
    let rules = Arc::new(
        RuleSet::builder()
            .encoding("EUC-JP")
            .hash(|s: &str| format!("{}:{s}", s.len()))
            .build()
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                (
                    rules.max_length("ニホンゴ", 4),
                    rules.max_length_bytes(&[0xC6, 0xFC, 0xCB, 0xDC], 1),
                    rules.fields_equal("2:pw", "pw", true),
                    rules.katakana_only("ニホンゴ"),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (true, false, true, true));
    }
}
