//! Encrypts a 192-bit block with a 256-bit key and decrypts it again.

use rijndael_core::{decrypt_block, encrypt_block, expand_key_with, KeyExpansion};

fn main() {
    let key: Vec<u8> = (0..32).collect();
    let schedule =
        expand_key_with(&key, 6, KeyExpansion::Standard).expect("32-byte key, 6-word block");

    let block = *b"twenty-four byte block!!";
    let ciphertext = encrypt_block(&block, &schedule).expect("block matches schedule");
    let plaintext = decrypt_block(&ciphertext, &schedule).expect("block matches schedule");
    assert_eq!(plaintext, block);

    println!("rounds: {}", schedule.rounds());
    println!("ciphertext: {:02x?}", ciphertext);
    println!("example succeeded; decryption restored the plaintext");
}
