use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Incremental `SHA-256(SHA-256(data))`.
pub struct Hasher {
    hasher: Sha256,
}

impl Hasher {
    #[inline(always)]
    pub fn new() -> Self {
        Self { hasher: Sha256::new() }
    }

    #[inline(always)]
    pub fn update(&mut self, buffer: impl AsRef<[u8]>) {
        self.hasher.update(buffer);
    }

    #[inline(always)]
    pub fn digest(self) -> [u8; 32] {
        sha256(self.hasher.finalize())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sha256(buffer: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(buffer.as_ref()).into()
}

pub fn double_sha256(buffer: impl AsRef<[u8]>) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(buffer);
    hasher.digest()
}

pub fn ripemd160(buffer: impl AsRef<[u8]>) -> [u8; 20] {
    Ripemd160::digest(buffer.as_ref()).into()
}

#[cfg(test)]
mod tests {
    use crate::hex;

    #[test]
    fn sha256() {
        assert_eq!(
            hex::encode(super::sha256(b"")),
            "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855"
        );
    }

    #[test]
    fn double_sha256() {
        assert_eq!(super::double_sha256(b"hello"), super::sha256(super::sha256(b"hello")));
        let mut hasher = super::Hasher::new();
        hasher.update(b"hel");
        hasher.update(b"lo");
        assert_eq!(hasher.digest(), super::double_sha256(b"hello"));
    }

    #[test]
    fn ripemd160() {
        assert_eq!(hex::encode(super::ripemd160(b"")), "9C1185A5C5E9FC54612808977EE8F548B2258D31");
    }
}
