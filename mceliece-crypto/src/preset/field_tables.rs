use lazy_static::lazy_static;

/// Primitive polynomial x⁴ + x + 1 defining GF(16).
pub const GF16_PRIMITIVE_POLY: u8 = 0b1_0011;
/// Number of non-zero elements of GF(16), i.e. the order of α.
pub const GF16_ORDER: usize = 15;

lazy_static! {
    /// `GF16_EXP[i] = α^i`, doubled in length so `log a + log b` never needs reducing.
    pub static ref GF16_EXP: [u8; 2 * GF16_ORDER] = {
        let mut table = [0u8; 2 * GF16_ORDER];
        let mut x = 1u8;
        for entry in table.iter_mut().take(GF16_ORDER) {
            *entry = x;
            x <<= 1;
            if x & 0b1_0000 != 0 {
                x ^= GF16_PRIMITIVE_POLY;
            }
        }
        for i in GF16_ORDER..2 * GF16_ORDER {
            table[i] = table[i - GF16_ORDER];
        }
        table
    };

    /// `GF16_LOG[α^i] = i`. Entry 0 is unused since log 0 is undefined.
    pub static ref GF16_LOG: [u8; 16] = {
        let mut table = [0u8; 16];
        for (i, &value) in GF16_EXP.iter().take(GF16_ORDER).enumerate() {
            table[value as usize] = i as u8;
        }
        table
    };
}
