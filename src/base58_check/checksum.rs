use crate::hashing::double_sha256;

pub const CHECKSUM_LENGTH: usize = 4;

/// First four bytes of `SHA-256(SHA-256(payload))`.
pub fn compute_checksum(payload: impl AsRef<[u8]>) -> [u8; CHECKSUM_LENGTH] {
    let hash = double_sha256(payload);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Exact byte-for-byte comparison against a freshly computed checksum.
pub fn verify_checksum(payload: impl AsRef<[u8]>, checksum: impl AsRef<[u8]>) -> bool {
    compute_checksum(payload)[..] == *checksum.as_ref()
}

#[cfg(test)]
mod tests {
    use crate::hex;

    const PAYLOAD: &str = "0062E907B15CBF27D5425399EBF6F0FB50EBB88F18";

    #[test]
    fn compute_checksum() {
        let payload = hex::decode(PAYLOAD).unwrap();
        assert_eq!(super::compute_checksum(&payload), [0xc2, 0x9b, 0x7d, 0x93]);
    }

    #[test]
    fn verify_checksum() {
        let payload = hex::decode(PAYLOAD).unwrap();
        assert!(super::verify_checksum(&payload, [0xc2, 0x9b, 0x7d, 0x93]));
        assert!(!super::verify_checksum(&payload, [0xc2, 0x9b, 0x7d, 0x94]));
        assert!(!super::verify_checksum(&payload, [0xc2, 0x9b, 0x7d]));
        assert!(!super::verify_checksum(&payload[1..], [0xc2, 0x9b, 0x7d, 0x93]));
    }
}
