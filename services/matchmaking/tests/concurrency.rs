//! Cross-thread race tests for match creation and channel ordering.

use std::sync::Arc;
use std::thread;

use matchmaking::{LiveEvent, Matchmaker};
use tokio::sync::mpsc;
use types::ids::IdentityId;
use types::swipe::SwipeDecision;

/// Both sides swipe like at effectively the same instant, repeatedly. Every
/// round must end with both callers reporting the identical match id and
/// exactly one match per side.
#[test]
fn simultaneous_mutual_likes_create_exactly_one_match() {
    for _ in 0..100 {
        let engine = Arc::new(Matchmaker::new());
        let a = IdentityId::new();
        let b = IdentityId::new();

        let (tx_a, mut rx_a) = mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = mpsc::unbounded_channel();
        engine.connect(a, tx_a);
        engine.connect(b, tx_b);

        let engine_a = Arc::clone(&engine);
        let engine_b = Arc::clone(&engine);
        let handle_a =
            thread::spawn(move || engine_a.submit_swipe(a, b, SwipeDecision::Like, 1).unwrap());
        let handle_b =
            thread::spawn(move || engine_b.submit_swipe(b, a, SwipeDecision::Like, 1).unwrap());

        let outcome_a = handle_a.join().unwrap();
        let outcome_b = handle_b.join().unwrap();

        // At least one side must observe the match; a side that lost the
        // interleaving entirely (its like recorded before the other's) may
        // legitimately see no reciprocal like yet. But if both report a
        // match it must be the same one.
        let ids: Vec<_> = [outcome_a.match_id, outcome_b.match_id]
            .into_iter()
            .flatten()
            .collect();
        assert!(!ids.is_empty(), "at least one swipe must resolve the match");
        assert!(ids.iter().all(|id| *id == ids[0]));

        assert_eq!(engine.list_matches(a).len(), 1);
        assert_eq!(engine.list_matches(b).len(), 1);
        assert_eq!(engine.list_matches(a)[0].match_id, ids[0]);

        // Exactly one matched event per participant, never a duplicate
        assert!(matches!(rx_a.try_recv(), Ok(LiveEvent::Matched { .. })));
        assert!(rx_a.try_recv().is_err());
        assert!(matches!(rx_b.try_recv(), Ok(LiveEvent::Matched { .. })));
        assert!(rx_b.try_recv().is_err());
    }
}

/// When one side's swipe strictly precedes the other's, the second caller is
/// the one that observes the match.
#[test]
fn second_like_resolves_the_match() {
    let engine = Matchmaker::new();
    let a = IdentityId::new();
    let b = IdentityId::new();

    let first = engine.submit_swipe(a, b, SwipeDecision::Like, 1).unwrap();
    assert!(!first.matched);
    let second = engine.submit_swipe(b, a, SwipeDecision::Like, 2).unwrap();
    assert!(second.matched);
}

/// Two participants hammer the same channel concurrently. Sequences must come
/// out dense and strictly increasing, with history equal to assignment order.
#[test]
fn concurrent_senders_get_dense_ordered_sequences() {
    const PER_SIDE: u64 = 200;

    let engine = Arc::new(Matchmaker::new());
    let a = IdentityId::new();
    let b = IdentityId::new();

    engine.submit_swipe(a, b, SwipeDecision::Like, 1).unwrap();
    let match_id = engine
        .submit_swipe(b, a, SwipeDecision::Like, 2)
        .unwrap()
        .match_id
        .unwrap();

    let spawn_sender = |sender: IdentityId, label: &'static str| {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for i in 0..PER_SIDE {
                engine
                    .send_message(sender, match_id, format!("{label}-{i}"), i as i64)
                    .unwrap();
            }
        })
    };

    let handle_a = spawn_sender(a, "a");
    let handle_b = spawn_sender(b, "b");
    handle_a.join().unwrap();
    handle_b.join().unwrap();

    let history = engine.history(a, match_id).unwrap();
    assert_eq!(history.len(), (PER_SIDE * 2) as usize);
    for (index, msg) in history.iter().enumerate() {
        assert_eq!(msg.sequence, index as u64 + 1, "sequences must be dense");
    }

    // Each side's own messages appear in its send order
    for label in ["a", "b"] {
        let own: Vec<&str> = history
            .iter()
            .filter(|m| m.content.starts_with(label))
            .map(|m| m.content.as_str())
            .collect();
        let expected: Vec<String> = (0..PER_SIDE).map(|i| format!("{label}-{i}")).collect();
        assert_eq!(own, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }
}

/// Concurrent swipes across many disjoint pairs stay isolated: every pair
/// ends up with exactly one match.
#[test]
fn disjoint_pairs_do_not_interfere() {
    const PAIRS: usize = 32;

    let engine = Arc::new(Matchmaker::new());
    let pairs: Vec<(IdentityId, IdentityId)> = (0..PAIRS)
        .map(|_| (IdentityId::new(), IdentityId::new()))
        .collect();

    let handles: Vec<_> = pairs
        .iter()
        .copied()
        .flat_map(|(a, b)| {
            let left = Arc::clone(&engine);
            let right = Arc::clone(&engine);
            [
                thread::spawn(move || left.submit_swipe(a, b, SwipeDecision::Like, 1).unwrap()),
                thread::spawn(move || right.submit_swipe(b, a, SwipeDecision::Like, 1).unwrap()),
            ]
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for (a, b) in pairs {
        assert_eq!(engine.list_matches(a).len(), 1);
        assert_eq!(engine.list_matches(b).len(), 1);
        assert_eq!(engine.list_matches(a)[0].other_id, b);
    }
}
