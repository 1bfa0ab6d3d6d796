use gorpc::method_hash;
use gorpc_testsuite::{wide, Ping, Pong};

#[test]
fn digest_is_stable_across_calls() {
    // "Ping" + be32(8) + "Pong" + be32(8) through fnv1a-128
    assert_eq!(method_hash::<Ping, Pong>(), "a98b198746f2bb17efa66438eeae57db");
    assert_eq!(method_hash::<Ping, Pong>(), method_hash::<Ping, Pong>());
}

#[test]
fn primitive_pairs_hash_by_name_and_width() {
    // "u32" + be32(4) + "u64" + be32(8)
    assert_eq!(method_hash::<u32, u64>(), "785f1aee3457719bb76bd9a52c507c0a");
}

#[test]
fn size_change_alone_changes_the_digest() {
    // wide::Ping shares the unqualified name but is twice as wide
    assert_eq!(method_hash::<wide::Ping, Pong>(), "02008460aef21fe786e1b73f0ac26403");
    assert_ne!(method_hash::<wide::Ping, Pong>(), method_hash::<Ping, Pong>());
}

#[test]
fn direction_matters() {
    assert_ne!(method_hash::<Ping, Pong>(), method_hash::<Pong, Ping>());
}
