//! Cross-implementation tests against the RustCrypto `des` crate

use arrayref::array_ref;
use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use des::{Des, TdesEde3};
use descsp_api::{AlgorithmId, BlockCipherAdapter};
use descsp_symmetric::{SingleDesAdapter, TripleDesAdapter};
use descsp_tests::{KeyContext, TestHost};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn keyed<A: BlockCipherAdapter>(mut adapter: A, algorithm: AlgorithmId, key: &[u8]) -> A {
    let ctx = KeyContext::new(algorithm, key);
    adapter.init(&mut TestHost::new(), &ctx, true).unwrap();
    adapter
}

fn reference_des(key: &[u8; 8], plain: &[u8; 8]) -> [u8; 8] {
    let cipher = Des::new_from_slice(key).unwrap();
    let mut block = GenericArray::clone_from_slice(plain);
    cipher.encrypt_block(&mut block);
    block.as_slice().try_into().unwrap()
}

fn reference_tdes(key: &[u8; 24], plain: &[u8; 8]) -> [u8; 8] {
    let cipher = TdesEde3::new_from_slice(key).unwrap();
    let mut block = GenericArray::clone_from_slice(plain);
    cipher.encrypt_block(&mut block);
    block.as_slice().try_into().unwrap()
}

proptest! {
    #[test]
    fn des_matches_reference(key in any::<[u8; 8]>(), plain in any::<[u8; 8]>()) {
        let mut adapter = keyed(SingleDesAdapter::new(), AlgorithmId::Des, &key);
        let mut out = [0u8; 8];
        adapter.encrypt_block(&plain, &mut out, false).unwrap();
        prop_assert_eq!(out, reference_des(&key, &plain));
    }

    #[test]
    fn tdes_matches_reference(key in any::<[u8; 24]>(), plain in any::<[u8; 8]>()) {
        let mut adapter = keyed(TripleDesAdapter::new(), AlgorithmId::TripleDes3KeyEde, &key);
        let mut out = [0u8; 8];
        adapter.encrypt_block(&plain, &mut out, false).unwrap();
        prop_assert_eq!(out, reference_tdes(&key, &plain));
    }
}

#[test]
fn tdes_decrypt_matches_reference() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x3DE5);
    for _ in 0..64 {
        let mut key = [0u8; 24];
        let mut block = [0u8; 8];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);

        let mut adapter = keyed(TripleDesAdapter::new(), AlgorithmId::TripleDes3KeyEde, &key);
        let mut ours = [0u8; 8];
        adapter.decrypt_block(&block, &mut ours, true).unwrap();

        let reference = TdesEde3::new_from_slice(&key).unwrap();
        let mut theirs = GenericArray::clone_from_slice(&block);
        reference.decrypt_block(&mut theirs);
        assert_eq!(&ours[..], theirs.as_slice());
    }
}

#[test]
fn tdes_is_composed_from_single_des() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xEDE);
    for _ in 0..64 {
        let mut key = [0u8; 24];
        let mut plain = [0u8; 8];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut plain);

        let k1 = array_ref![key, 0, 8];
        let k2 = array_ref![key, 8, 8];
        let k3 = array_ref![key, 16, 8];

        // E_K3(D_K2(E_K1(P))) with the reference cipher
        let mut block = GenericArray::clone_from_slice(&plain);
        Des::new_from_slice(k1).unwrap().encrypt_block(&mut block);
        Des::new_from_slice(k2).unwrap().decrypt_block(&mut block);
        Des::new_from_slice(k3).unwrap().encrypt_block(&mut block);

        let mut adapter = keyed(TripleDesAdapter::new(), AlgorithmId::TripleDes3KeyEde, &key);
        let mut out = [0u8; 8];
        adapter.encrypt_block(&plain, &mut out, false).unwrap();
        assert_eq!(&out[..], block.as_slice());
    }
}
