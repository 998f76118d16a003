pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Splits a 32 byte seed into four big-endian words, e.g. for seeding hashers.
pub fn u64s_from_seed(seed: &[u8; 32]) -> [u64; 4] {
    let mut output = [0u64; 4];
    for (word, chunk) in output.iter_mut().zip(seed.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_be_bytes(bytes);
    }
    output
}
