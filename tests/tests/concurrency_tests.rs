//! Concurrent initialisation of many contexts

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use descsp_algorithms::{DesMode, DesPrimitive, DesState};
use descsp_api::{AlgorithmId, BlockCipherAdapter};
use descsp_symmetric::{SingleDesAdapter, TripleDesAdapter};
use descsp_tests::vectors::{DES_VECTORS, TDES_VECTORS};
use descsp_tests::{block, InitTracker, KeyContext, TrackingDes, TestHost};

const THREADS: usize = 8;
const LINGER: Duration = Duration::from_millis(5);

#[test]
fn primitive_init_is_serialised_across_contexts() {
    let tracker = InitTracker::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let primitive = TrackingDes::new(&tracker, LINGER);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                if i % 2 == 0 {
                    let vector = &DES_VECTORS[0];
                    let ctx = KeyContext::from_hex(AlgorithmId::Des, vector.key);
                    let mut adapter = SingleDesAdapter::with_primitive(primitive);
                    adapter.init(&mut TestHost::new(), &ctx, true).unwrap();

                    let mut out = [0u8; 8];
                    adapter
                        .encrypt_block(&block(vector.plaintext), &mut out, false)
                        .unwrap();
                    assert_eq!(out, block(vector.ciphertext));
                } else {
                    let vector = &TDES_VECTORS[0];
                    let ctx = KeyContext::from_hex(AlgorithmId::TripleDes3KeyEde, vector.key);
                    let mut adapter = TripleDesAdapter::with_primitive(primitive);
                    adapter.init(&mut TestHost::new(), &ctx, true).unwrap();

                    let mut out = [0u8; 8];
                    adapter
                        .encrypt_block(&block(vector.plaintext), &mut out, false)
                        .unwrap();
                    assert_eq!(out, block(vector.ciphertext));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // four single-DES contexts, four triple-DES contexts of three states each
    assert_eq!(tracker.entries(), THREADS / 2 + 3 * THREADS / 2);
    assert_eq!(tracker.max_overlap(), 1);
}

#[test]
fn unguarded_init_does_overlap() {
    // Control: the tracker does detect overlap when the lock is bypassed
    let tracker = InitTracker::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let primitive = TrackingDes::new(&tracker, Duration::from_millis(50));
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let mut state = DesState::default();
                barrier.wait();
                primitive.init(&mut state, DesMode::Standard).unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(tracker.entries(), THREADS);
    assert!(tracker.max_overlap() > 1);
}

#[test]
fn keyed_contexts_are_used_from_many_threads() {
    let vector = TDES_VECTORS[0];
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(move || {
                let mut adapter = TestHost::keyed(
                    TripleDesAdapter::new(),
                    AlgorithmId::TripleDes3KeyEde,
                    vector.key,
                    true,
                );
                for _ in 0..100 {
                    let mut buf = block(vector.plaintext);
                    adapter.encrypt_block_in_place(&mut buf, false).unwrap();
                    assert_eq!(buf, block(vector.ciphertext));
                    adapter.decrypt_block_in_place(&mut buf, false).unwrap();
                    assert_eq!(buf, block(vector.plaintext));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn contexts_move_between_threads() {
    let mut adapter = TestHost::keyed(
        SingleDesAdapter::new(),
        AlgorithmId::Des,
        "133457799BBCDFF1",
        true,
    );
    let out = thread::spawn(move || {
        let mut out = [0u8; 8];
        adapter
            .encrypt_block(&block("0123456789ABCDEF"), &mut out, false)
            .unwrap();
        out
    })
    .join()
    .unwrap();
    assert_eq!(out, block("85E813540F0AB405"));
}
