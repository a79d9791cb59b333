use std::sync::Arc;
use std::thread;

use answerdoc_core::answer::AnswerSlot;

#[test]
fn starts_empty() {
    assert_eq!(AnswerSlot::new().get().as_str(), "");
}

#[test]
fn set_overwrites_previous_answer() {
    let slot = AnswerSlot::default();
    slot.set("first");
    slot.set("second".to_string());
    assert_eq!(slot.get().as_str(), "second");
}

#[test]
fn snapshot_is_unaffected_by_later_writes() {
    let slot = AnswerSlot::new();
    slot.set("old");
    let snapshot = slot.get();
    slot.set("new");
    assert_eq!(snapshot.as_str(), "old");
    assert_eq!(slot.get().as_str(), "new");
}

#[test]
fn concurrent_readers_see_whole_values() {
    let slot = Arc::new(AnswerSlot::new());
    let writer = {
        let slot = Arc::clone(&slot);
        thread::spawn(move || {
            for i in 0..200 {
                slot.set(format!("answer {i}"));
            }
        })
    };
    for _ in 0..200 {
        let seen = slot.get();
        assert!(seen.is_empty() || seen.starts_with("answer "));
    }
    writer.join().unwrap();
    assert_eq!(slot.get().as_str(), "answer 199");
}
