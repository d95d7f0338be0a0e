use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;

const KEY_HEX: &str = "000102030405060708090a0b0c0d0e0f";
const PLAIN: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
    0xff,
];
const CIPHER: [u8; 16] = [
    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
    0x5a,
];

fn rijndael() -> Command {
    Command::cargo_bin("rijndael").unwrap()
}

#[test]
fn test_cli_encrypt_known_answer() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    let output = dir.path().join("cipher.bin");
    fs::write(&input, PLAIN.repeat(3)).unwrap();

    rijndael()
        .arg("encrypt")
        .args(["--key-hex", KEY_HEX])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read(&output).unwrap(), CIPHER.repeat(3));
}

#[test]
fn test_cli_round_trip_wide_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.txt");
    let plaintext: Vec<u8> = (0..32 * 10).map(|i| (i * 7 % 256) as u8).collect();
    fs::write(&input, &plaintext).unwrap();
    let key = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

    rijndael()
        .arg("encrypt")
        .args(["--key-hex", key, "--block-words", "8", "--standard-expansion"])
        .arg("--input")
        .arg(&input)
        .assert()
        .success();
    let encrypted = dir.path().join("plain.txt.enc");
    assert_ne!(fs::read(&encrypted).unwrap(), plaintext);

    rijndael()
        .arg("decrypt")
        .args(["--key-hex", key, "--block-words", "8", "--standard-expansion"])
        .arg("--input")
        .arg(&encrypted)
        .assert()
        .success();
    let decrypted = dir.path().join("plain.txt.enc.dec");
    assert_eq!(fs::read(decrypted).unwrap(), plaintext);
}

#[test]
fn test_cli_verbose_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cipher.bin");
    let output = dir.path().join("plain.bin");
    fs::write(&input, CIPHER).unwrap();

    let assert = rijndael()
        .arg("decrypt")
        .args(["--key-hex", KEY_HEX, "-v"])
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.starts_with("decrypted 1 blocks (16 bytes, 10 rounds) -> "));
    assert_eq!(fs::read(&output).unwrap(), PLAIN);
}

#[test]
fn test_cli_rejects_partial_block() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.bin");
    fs::write(&input, [0u8; 20]).unwrap();

    let assert = rijndael()
        .arg("encrypt")
        .args(["--key-hex", KEY_HEX])
        .arg("--input")
        .arg(&input)
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("not a multiple of 16 bytes"));
    assert!(!dir.path().join("short.bin.enc").exists());
}

#[test]
fn test_cli_rejects_bad_key() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    fs::write(&input, PLAIN).unwrap();

    let assert = rijndael()
        .arg("encrypt")
        .args(["--key-hex", "000102030405060708090a0b0c0d0e"])
        .arg("--input")
        .arg(&input)
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("key length 15 bytes"));
}

#[test]
fn test_cli_demo_is_reproducible() {
    let run = || {
        let assert = rijndael()
            .args(["demo", "--seed", "7", "--block-words", "6", "--key-bytes", "24"])
            .assert()
            .success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    };
    let first = run();
    assert!(first.contains("rounds: 12"));
    assert!(first.contains("decrypted: "));
    assert_eq!(first, run());
}
