//! Properties of the expanded schedule that hold for every key length.

use std::thread;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{expand_key, CipherKey, Error, KeyLength, Params};

fn expand_bytes(key: &[u8]) -> Vec<u8> {
    CipherKey::new(key).unwrap().expand().as_bytes().to_vec()
}

fn random_key(rng: &mut ChaCha20Rng, length: KeyLength) -> Vec<u8> {
    let mut bytes = vec![0u8; length.bytes()];
    rng.fill_bytes(&mut bytes);
    bytes
}

#[test]
fn seed_words_equal_key() {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    for length in KeyLength::ALL {
        let key = random_key(&mut rng, length);
        let schedule = expand_key(&key, Params::new(length)).unwrap();
        assert_eq!(&schedule.as_bytes()[..key.len()], key.as_slice());
    }
}

#[test]
fn schedule_length_follows_round_count() {
    let expected = [
        (KeyLength::Aes128, 176),
        (KeyLength::Aes192, 208),
        (KeyLength::Aes256, 240),
    ];
    for (length, bytes) in expected {
        let params = Params::new(length);
        let key = vec![0xa5; length.bytes()];
        let schedule = CipherKey::new(&key).unwrap().expand();
        assert_eq!(schedule.len(), bytes);
        assert_eq!(schedule.len(), 4 * params.nb() * (params.nr() + 1));
        assert_eq!(schedule.words().count(), params.schedule_words());
    }
}

#[test]
fn expansion_is_deterministic() {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    for length in KeyLength::ALL {
        let key = random_key(&mut rng, length);
        let first = expand_key(&key, Params::new(length)).unwrap();
        let second = expand_key(&key, Params::new(length)).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}

#[test]
fn later_words_obey_recurrence() {
    // Words that take no transformation are the XOR of their two predecessors.
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    for length in KeyLength::ALL {
        let params = Params::new(length);
        let key = random_key(&mut rng, length);
        let schedule = expand_key(&key, params).unwrap();
        let nk = params.nk();
        for word in nk..params.schedule_words() {
            let plain = word % nk != 0 && !(nk > 6 && word % nk == 4);
            if plain {
                let prev = schedule.word(word - 1);
                let back = schedule.word(word - nk);
                let expected: Vec<u8> = prev
                    .iter()
                    .zip(back.iter())
                    .map(|(a, b)| a ^ b)
                    .collect();
                assert_eq!(schedule.word(word).to_vec(), expected, "word {word}");
            }
        }
    }
}

#[test]
fn concurrent_expansions_do_not_interfere() {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let keys: Vec<Vec<u8>> = (0..8)
        .map(|i| random_key(&mut rng, KeyLength::ALL[i % 3]))
        .collect();
    let sequential: Vec<Vec<u8>> = keys.iter().map(|k| expand_bytes(k)).collect();

    let handles: Vec<_> = keys
        .into_iter()
        .map(|k| thread::spawn(move || expand_bytes(&k)))
        .collect();
    let concurrent: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, concurrent);
}

#[test]
fn invalid_configuration_never_expands() {
    let key = [0u8; 16];
    let params = Params::from_bits(100);
    assert_eq!(params, Err(Error::UnsupportedKeyLength(100)));
    let expanded = params.and_then(|p| expand_key(&key, p));
    assert!(expanded.is_err());
}

#[test]
fn wrong_key_size_rejected_at_entry() {
    let params = Params::from_bits(192).unwrap();
    assert_eq!(
        expand_key(&[0u8; 16], params).unwrap_err(),
        Error::KeyLengthMismatch {
            expected: 24,
            actual: 16
        }
    );
}
