// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SET_FORMAT_VERSION;
use crate::set::CanonicalSet;
use crate::tests::determinism_tests::Pcg32;

#[test]
fn test_add_remove_semantics() {
    let mut set = CanonicalSet::new();
    assert!(set.add(b"a"));
    assert!(!set.add(b"a"), "second add of the same element is a no-op");
    assert!(set.add(b"b"));
    assert_eq!(set.len(), 2);

    assert!(set.remove(b"a"));
    assert!(!set.remove(b"a"), "removing an absent element is a no-op");
    assert!(!set.contains(b"a"));
    assert!(set.contains(b"b"));
}

#[test]
fn test_empty_set_encodes_to_nothing() {
    assert!(CanonicalSet::new().encode().is_empty());
    assert_eq!(CanonicalSet::decode(&[]).unwrap(), CanonicalSet::new());

    let mut set = CanonicalSet::new();
    set.add(b"only");
    set.remove(b"only");
    assert!(set.encode().is_empty());
}

#[test]
fn test_encoding_layout() {
    let set: CanonicalSet = ["b", "a"].into_iter().collect();
    let bytes = set.encode();

    let mut expected = vec![SET_FORMAT_VERSION, 2, 0, 0, 0];
    expected.extend_from_slice(&[1, 0, 0, 0, b'a']);
    expected.extend_from_slice(&[1, 0, 0, 0, b'b']);
    assert_eq!(bytes, expected);
}

#[test]
fn test_encoding_is_byte_lexicographic() {
    let set: CanonicalSet = [&b"b"[..], b"ab", b"a", b"", b"\xff", b"B"].into_iter().collect();
    let order: Vec<&[u8]> = set.iter().collect();
    assert_eq!(order, vec![&b""[..], b"B", b"a", b"ab", b"b", b"\xff"]);
}

#[test]
fn test_encode_idempotent() {
    let set: CanonicalSet = ["hey", "", "zeta", "alpha", "\u{e9}"].into_iter().collect();
    let once = set.encode();
    let twice = CanonicalSet::decode(&once).unwrap().encode();
    assert_eq!(once, twice);
}

#[test]
fn test_encoding_independent_of_history() {
    let elements: Vec<Vec<u8>> = (0..40u32).map(|i| format!("e{}", i * 7 % 13).into_bytes()).collect();

    let reference: CanonicalSet = elements.iter().collect();
    let reference_bytes = reference.encode();

    let mut rng = Pcg32::new(7);
    for _ in 0..20 {
        let mut set = CanonicalSet::new();
        // Random interleaving of adds, spurious removes and re-adds.
        let mut shuffled = elements.clone();
        rng.shuffle(&mut shuffled);
        for e in &shuffled {
            set.add(e);
            if rng.next_u32() % 3 == 0 {
                set.remove(e);
                set.remove(b"never-added");
                set.add(e);
            }
        }
        assert_eq!(set.encode(), reference_bytes);
    }
}
