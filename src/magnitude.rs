use crate::hex;

/// Unsigned integer of unbounded width.
///
/// Stored as little-endian base-256 limbs with no most significant zero limb, so zero is
/// the empty vector. Only the operations needed for radix conversion are provided:
/// multiply-and-add and divide by a small radix.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Magnitude {
    limbs: Vec<u8>,
}

impl Magnitude {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Big-endian bytes, leading zero bytes carry no weight.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        let mut limbs: Vec<u8> = bytes.as_ref().iter().rev().copied().collect();
        trim(&mut limbs);
        Self { limbs }
    }

    /// Minimal big-endian bytes, empty for zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.limbs.iter().rev().copied().collect()
    }

    /// `self = self * radix + digit`
    pub fn mul_add(&mut self, radix: usize, digit: usize) {
        let mut carry = digit;
        for limb in &mut self.limbs {
            carry += (*limb as usize) * radix;
            *limb = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            self.limbs.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    /// Divides in place and returns the remainder. `divisor` must be in `1..=256`.
    pub fn div_rem(&mut self, divisor: usize) -> usize {
        let mut remainder = 0;
        for limb in self.limbs.iter_mut().rev() {
            let value = (remainder << 8) | (*limb as usize);
            *limb = (value / divisor) as u8;
            remainder = value % divisor;
        }
        trim(&mut self.limbs);
        remainder
    }

    /// Most significant digit first.
    pub fn from_digits(digits: impl IntoIterator<Item = u8>, radix: usize) -> Self {
        let mut magnitude = Self::zero();
        for digit in digits {
            magnitude.mul_add(radix, digit as usize);
        }
        magnitude
    }

    /// Digits in `radix`, most significant first. Zero has no digits.
    pub fn into_digits(mut self, radix: usize) -> Vec<u8> {
        let mut digits = Vec::new();
        while !self.is_zero() {
            digits.push(self.div_rem(radix) as u8);
        }
        digits.reverse();
        digits
    }

    /// Reads big-endian base-16 digits. Any length is accepted, including odd and empty.
    pub fn from_hex(input: impl AsRef<[u8]>) -> Result<Self, hex::Error> {
        let mut magnitude = Self::zero();
        for (index, &character) in input.as_ref().iter().enumerate() {
            magnitude.mul_add(16, hex::value(character, index)? as usize);
        }
        Ok(magnitude)
    }

    /// Uppercase base-16 digits without leading zeros; zero renders as the empty string.
    pub fn to_hex(&self) -> String {
        self.clone()
            .into_digits(16)
            .into_iter()
            .map(|digit| char::from(hex::ALPHABET.encode(digit as usize)))
            .collect()
    }
}

fn trim(limbs: &mut Vec<u8>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::Magnitude;

    #[test]
    fn hex() {
        assert_eq!(Magnitude::from_hex("00FF"), Ok(Magnitude::from_bytes([0xff])));
        assert_eq!(Magnitude::from_hex("ff").map(|magnitude| magnitude.to_hex()), Ok("FF".to_string()));
        assert_eq!(Magnitude::from_hex("0001000").map(|magnitude| magnitude.to_hex()), Ok("1000".to_string()));
        assert_eq!(Magnitude::from_hex("").map(|magnitude| magnitude.is_zero()), Ok(true));
        assert_eq!(Magnitude::zero().to_hex(), "");
        assert!(Magnitude::from_hex("12x4").is_err());
    }

    #[test]
    fn wider_than_machine_word() {
        let hex = "0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF0123456789ABCDEF01";
        let magnitude = Magnitude::from_hex(hex).unwrap();
        assert_eq!(magnitude.to_hex(), &hex[1..]);
        assert_eq!(Magnitude::from_digits(magnitude.clone().into_digits(58), 58), magnitude);
    }

    #[test]
    fn div_rem() {
        let mut magnitude = Magnitude::from_bytes([0x01, 0x00]);
        assert_eq!(magnitude.div_rem(58), 256 % 58);
        assert_eq!(magnitude, Magnitude::from_bytes([4]));
        assert_eq!(magnitude.div_rem(58), 4);
        assert!(magnitude.is_zero());
    }

    #[test]
    fn bytes() {
        assert_eq!(Magnitude::from_bytes([0x00, 0x00, 0x12, 0x34]).to_bytes(), vec![0x12, 0x34]);
        assert_eq!(Magnitude::from_bytes([0x00]).to_bytes(), Vec::<u8>::new());
        assert_eq!(Magnitude::from_digits([2, 0], 58).to_bytes(), vec![116]);
    }
}
