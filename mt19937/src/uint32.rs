/*
 * module: uint32
 *
 * Unsigned 32-bit arithmetic as C `uint32_t` performs it, every result
 * truncated to the low 32 bits.
 */

// low 32 bits of the product a * b
#[inline]
pub fn uimul(a: u32, b: u32) -> u32 {
    a.wrapping_mul(b)
}

// s ^ (s >> 30), the word mixer shared by both seeding recurrences
#[inline]
pub fn mix(s: u32) -> u32 {
    s ^ (s >> 30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uimul_matches_u64_truncation() {
        let pairs = [
            (0_u32, 0_u32),
            (1, u32::MAX),
            (u32::MAX, u32::MAX),
            (1812433253, 0xdeadbeef),
            (1664525, 1566083941),
            (0x80000000, 2),
        ];
        for (a, b) in pairs {
            assert_eq!(uimul(a, b) as u64, (a as u64 * b as u64) & 0xffffffff, "{a} * {b}");
        }
    }

    #[test]
    fn uimul_overflow_wraps() {
        assert_eq!(uimul(u32::MAX, u32::MAX), 1);
        assert_eq!(uimul(0x80000000, 2), 0);
        assert_eq!(uimul(65536, 65536), 0);
    }

    #[test]
    fn mix_folds_top_two_bits() {
        assert_eq!(mix(0), 0);
        assert_eq!(mix(0xc0000000), 0xc0000003);
        assert_eq!(mix(1234), 1234);
    }
}
