//! Known-Answer Tests
//!
//! Verifies the implementation against the canonical JSON test vectors:
//! original-Keccak digests (suffix 0x01, Keccak submission / Ethereum
//! vectors) and FIPS-202 SHAKE outputs (suffix 0x1F).

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    function: String,
    bits: usize,
    #[serde(default)]
    out_bits: Option<usize>,
    input: String,
    output: String,
}

#[derive(Deserialize)]
struct TestVectors {
    vectors: Vec<Vector>,
}

fn load_vectors() -> Vec<Vector> {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    let data: TestVectors = serde_json::from_reader(reader).expect("Failed to parse JSON");
    data.vectors
}

#[test]
fn test_known_answer_vectors() {
    for vector in load_vectors() {
        let input = vector.input.as_bytes();
        let hex_digest = match vector.function.as_str() {
            "hash" => keccak1600::hash_hex(input, vector.bits).unwrap(),
            "shake" => {
                keccak1600::shake_hex(input, vector.bits, vector.out_bits.unwrap()).unwrap()
            }
            other => panic!("unknown function in vector {}: {other}", vector.name),
        };

        assert_eq!(hex_digest, vector.output, "Vector mismatched: {}", vector.name);
    }
}

#[test]
fn test_raw_output_hex_encodes_to_hex_output() {
    for vector in load_vectors() {
        let input = vector.input.as_bytes();
        let raw = match vector.function.as_str() {
            "hash" => keccak1600::hash(input, vector.bits).unwrap(),
            "shake" => keccak1600::shake(input, vector.bits, vector.out_bits.unwrap()).unwrap(),
            other => panic!("unknown function in vector {}: {other}", vector.name),
        };

        assert_eq!(
            hex::encode(raw),
            vector.output,
            "Raw/hex mismatch: {}",
            vector.name
        );
    }
}

#[test]
fn test_verify_accepts_known_digests() {
    for vector in load_vectors() {
        if vector.function != "hash" {
            continue;
        }
        let input = vector.input.as_bytes();
        let digest = hex::decode(&vector.output).unwrap();

        assert!(
            keccak1600::verify(input, vector.bits, &digest).unwrap(),
            "verify rejected known digest: {}",
            vector.name
        );
        assert!(
            !keccak1600::verify(b"something else entirely", vector.bits, &digest).unwrap(),
            "verify accepted wrong input: {}",
            vector.name
        );
    }
}
