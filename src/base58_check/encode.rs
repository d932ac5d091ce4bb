use super::compute_checksum;
use crate::base58::{self, Alphabet, ALPHABET};

pub struct Encoder<'a> {
    encoder: base58::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
        }
    }

    fn extend_payload(&self, payload: impl AsRef<[u8]>) -> Vec<u8> {
        let mut payload = payload.as_ref().to_vec();
        let checksum = compute_checksum(&payload);
        payload.extend_from_slice(&checksum);
        payload
    }

    /// Appends the checksum and renders `payload ‖ checksum` in base 58.
    pub fn encode(&self, payload: impl AsRef<[u8]>) -> String {
        self.encoder.encode_bytes(self.extend_payload(payload))
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(payload: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(payload)
}

#[cfg(test)]
mod tests {
    use crate::hex;

    #[test]
    fn encode() {
        let payload = hex::decode("0062E907B15CBF27D5425399EBF6F0FB50EBB88F18").unwrap();
        assert_eq!(super::encode(payload), "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
        assert_eq!(super::encode([0u8; 21]), "1111111111111111111114oLvT2");
    }
}
