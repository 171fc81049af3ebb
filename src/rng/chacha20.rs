//! ChaCha20 block function (RFC 8439), used as the expansion step of the
//! nonce generator.
//!
//! Only the keystream block is needed here; no stream-cipher or AEAD
//! interface is exposed.

/// `"expand 32-byte k"` as little-endian words.
const SIGMA: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Column and diagonal index sets of one double round.
const DOUBLE_ROUND: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

#[inline(always)]
fn quarter_round(s: &mut [u32; 16], [a, b, c, d]: [usize; 4]) {
    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(16);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(12);

    s[a] = s[a].wrapping_add(s[b]);
    s[d] = (s[d] ^ s[a]).rotate_left(8);

    s[c] = s[c].wrapping_add(s[d]);
    s[b] = (s[b] ^ s[c]).rotate_left(7);
}

/// Reads little-endian words from `bytes` into `words`.
fn load_le(words: &mut [u32], bytes: &[u8]) {
    for (w, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *w = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
}

/// Produces one 64-byte keystream block for `(key, counter, nonce)`.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut input = [0u32; 16];
    input[..4].copy_from_slice(&SIGMA);
    load_le(&mut input[4..12], key);
    input[12] = counter;
    load_le(&mut input[13..], nonce);

    let mut state = input;

    for _ in 0..10 {
        for idx in DOUBLE_ROUND {
            quarter_round(&mut state, idx);
        }
    }

    let mut out = [0u8; 64];

    for ((chunk, s), i) in out.chunks_exact_mut(4).zip(state).zip(input) {
        chunk.copy_from_slice(&s.wrapping_add(i).to_le_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::block;

    // RFC 8439, section 2.3.2.
    #[test]
    fn rfc8439_block_vector() {
        let mut key = [0u8; 32];
        for (i, k) in key.iter_mut().enumerate() {
            *k = i as u8;
        }
        let nonce = [0, 0, 0, 0x09, 0, 0, 0, 0x4a, 0, 0, 0, 0];

        let out = block(&key, 1, &nonce);

        assert_eq!(
            &out[..16],
            &[
                0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
                0x71, 0xc4
            ]
        );
    }
}
