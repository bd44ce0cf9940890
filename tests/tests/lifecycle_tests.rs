//! Context lifecycle: keying, re-keying, key usage and teardown

use descsp_api::{AlgorithmId, BlockCipherAdapter, Error, ErrorCode, KeyUsage};
use descsp_symmetric::{DesAdapter, SingleDesAdapter, TripleDesAdapter};
use descsp_tests::{block, KeyContext, TestHost};

#[test]
fn test_fresh_context_only_accepts_init_or_destroy() {
    let mut adapter = DesAdapter::for_algorithm(AlgorithmId::Des);
    assert!(!adapter.is_initialized());

    let mut out = [0u8; 8];
    let err = adapter.encrypt_block(&[0u8; 8], &mut out, false).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotInitialized);

    // Destroying an unkeyed context is a no-op
    adapter.destroy();
    assert!(!adapter.is_initialized());
}

#[test]
fn test_destroyed_context_can_be_rekeyed() {
    let mut adapter = TestHost::keyed(
        TripleDesAdapter::new(),
        AlgorithmId::TripleDes3KeyEde,
        "0123456789ABCDEF23456789ABCDEF01456789ABCDEF0123",
        true,
    );
    adapter.destroy();
    assert!(!adapter.is_initialized());

    let ctx = KeyContext::from_hex(
        AlgorithmId::TripleDes3KeyEde,
        "133457799BBCDFF1133457799BBCDFF1133457799BBCDFF1",
    );
    adapter.init(&mut TestHost::new(), &ctx, true).unwrap();

    let mut buf = block("0123456789ABCDEF");
    adapter.encrypt_block_in_place(&mut buf, false).unwrap();
    assert_eq!(buf, block("85E813540F0AB405"));
}

#[test]
fn test_key_usage_follows_direction() {
    let ctx = KeyContext::from_hex(AlgorithmId::Des, "133457799BBCDFF1").only(KeyUsage::Decrypt);
    let mut host = TestHost::new();

    let mut adapter = SingleDesAdapter::new();
    assert_eq!(
        adapter.init(&mut host, &ctx, true),
        Err(Error::KeyUsageMismatch {
            usage: KeyUsage::Encrypt
        })
    );
    assert!(host.setups.is_empty());

    adapter.init(&mut host, &ctx, false).unwrap();
    assert_eq!(host.setups, vec![8]);
}

#[test]
fn test_missing_key_is_reported_by_host() {
    let ctx = KeyContext::from_hex(AlgorithmId::Des, "133457799BBCDFF1");
    let mut adapter = TripleDesAdapter::new();
    assert_eq!(
        adapter.init(&mut TestHost::new(), &ctx, true),
        Err(Error::KeyNotFound {
            algorithm: AlgorithmId::TripleDes3KeyEde
        })
    );
}

#[test]
fn test_rekey_switches_keys() {
    let first = KeyContext::from_hex(AlgorithmId::Des, "0000000000000000");
    let second = KeyContext::from_hex(AlgorithmId::Des, "0E329232EA6D0D73");
    let mut host = TestHost::new();
    let mut adapter = SingleDesAdapter::new();

    adapter.init(&mut host, &first, true).unwrap();
    let mut out = [0u8; 8];
    adapter.encrypt_block(&[0u8; 8], &mut out, false).unwrap();
    assert_eq!(out, block("8CA64DE9C1B123A7"));

    adapter.init(&mut host, &second, true).unwrap();
    adapter
        .encrypt_block(&block("8787878787878787"), &mut out, false)
        .unwrap();
    assert_eq!(out, [0u8; 8]);
    assert_eq!(host.setups, vec![8, 8]);
}

#[test]
fn test_error_messages_carry_no_key_bytes() {
    let ctx = KeyContext::from_hex(AlgorithmId::Des, "DEADBEEFCAFE01");
    let err = SingleDesAdapter::new()
        .init(&mut TestHost::new(), &ctx, true)
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("DES"));
    assert!(message.contains('7'));
    assert!(!message.to_uppercase().contains("DEADBEEF"));
}
