// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Replica agreement tests.
//!
//! These drive the engine the way the replication layer does: admit a batch
//! of pairwise non-conflicting operations, then let every replica apply the
//! admitted batch in its own order and compare the resulting proofs.

use accord_kernel::oplog::encode_log;
use accord_kernel::proof::replay_with_proof;
use accord_kernel::replay::ReplayState;
use accord_kernel::verify::state_hash;
use accord_kernel::{Key, Operation};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("accord_kernel=debug")
        .with_test_writer()
        .try_init();
}

fn candidates() -> Vec<Operation> {
    vec![
        Operation::add("balance", "10"),
        Operation::add("balance", "-2.5"),
        Operation::set("balance", "0"),
        Operation::mul("factor", "2"),
        Operation::mul("factor", "0.5"),
        Operation::sadd("members", "alice"),
        Operation::sadd("members", "bob"),
        Operation::srem("members", "carol"),
        Operation::srem("members", "alice"),
        Operation::set("motd", "hello"),
        Operation::set("motd", "hello"),
    ]
}

/// Greedy admission: keep an operation only if it commutes with everything
/// admitted so far.
fn admit(batch: &[Operation]) -> Vec<Operation> {
    let mut admitted: Vec<Operation> = Vec::new();
    for op in batch {
        if admitted.iter().all(|prior| prior.check_conflict(op).is_ok()) {
            admitted.push(op.clone());
        }
    }
    admitted
}

fn apply_all(ops: &[Operation]) -> ReplayState {
    let mut state = ReplayState::new();
    state.apply(&Operation::set("factor", "3")).unwrap();
    for op in ops {
        state.apply(op).unwrap();
    }
    state
}

#[test]
fn test_admission_drops_conflicting_operations() {
    init_tracing();
    let admitted = admit(&candidates());

    assert!(!admitted.contains(&Operation::set("balance", "0")));
    assert!(!admitted.contains(&Operation::srem("members", "alice")));
    assert_eq!(admitted.len(), candidates().len() - 2);
}

#[test]
fn test_replicas_agree_regardless_of_apply_order() {
    init_tracing();
    let admitted = admit(&candidates());

    let forward = apply_all(&admitted);
    let mut reversed_ops = admitted.clone();
    reversed_ops.reverse();
    let reversed = apply_all(&reversed_ops);

    assert_eq!(state_hash(&forward), state_hash(&reversed));
    assert_eq!(forward.get(&Key::from("balance")).unwrap().raw(), b"7.5");
    assert_eq!(forward.get(&Key::from("factor")).unwrap().raw(), b"3");
    assert_eq!(forward.get(&Key::from("motd")).unwrap().raw(), b"hello");
}

#[test]
fn test_same_log_same_proof() {
    init_tracing();
    let log = encode_log(&admit(&candidates())).unwrap();

    let replica_a = replay_with_proof(&log).unwrap();
    let replica_b = replay_with_proof(&log.clone()).unwrap();
    assert_eq!(replica_a, replica_b);
    assert!(replica_a.verify(&log).unwrap());
}
