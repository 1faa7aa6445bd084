//! Encrypts one block through the functional unit and checks it against the
//! reference cipher.

use saes64::Saes64;
use saes64_aes::{decrypt_block, encrypt_block, expand_key};

fn main() {
    let key = *b"sixteen byte key";
    let mut block = [0u8; 16];
    block.copy_from_slice(b"one block please");

    let unit = Saes64::new();
    let keys = expand_key(&unit, &key);

    let ciphertext = encrypt_block(&unit, &keys, &block);
    let expected = aes_prims::encrypt_block(&block, &aes_prims::expand_key(&key));
    assert_eq!(ciphertext, expected);

    let decrypted = decrypt_block(&unit, &keys, &ciphertext);
    assert_eq!(decrypted, block);

    println!("example succeeded; unit output matches the AES reference");
}
