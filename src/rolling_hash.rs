//! Rolling checksum over the last seven bytes, used to find trigger points.
//!
//! Three accumulators are combined into one value:
//! `h1` is the plain sum of the window, `h2` weights each byte by its age
//! and `h3` is a shift-xor of everything seen so far.
//! All arithmetic wraps at 32 bits.

pub const ROLLING_WINDOW: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    window: [u8; ROLLING_WINDOW],
    h1: u32,
    h2: u32,
    h3: u32,
    pos: u32,
}

impl RollingHash {
    pub fn new() -> Self {
        Self {
            window: [0; ROLLING_WINDOW],
            h1: 0,
            h2: 0,
            h3: 0,
            pos: 0,
        }
    }

    /// Push one byte into the window, evicting the oldest one.
    #[inline]
    pub fn update_byte(&mut self, c: u8) {
        let c = c as u32;
        let slot = (self.pos as usize) % ROLLING_WINDOW;

        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self.h2.wrapping_add((ROLLING_WINDOW as u32).wrapping_mul(c));
        self.h1 = self.h1.wrapping_add(c);
        self.h1 = self.h1.wrapping_sub(self.window[slot] as u32);
        self.window[slot] = c as u8;
        self.pos = self.pos.wrapping_add(1);
        self.h3 = (self.h3 << 5) ^ c;
    }

    pub fn update(&mut self, data: &[u8]) {
        for &c in data {
            self.update_byte(c);
        }
    }

    /// Current checksum. Cheap, and valid before the window has filled.
    #[inline]
    pub fn sum(&self) -> u32 {
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recompute h1/h2 directly from the last seven bytes.
    fn window_sums(data: &[u8]) -> (u32, u32) {
        let start = data.len().saturating_sub(ROLLING_WINDOW);
        let tail = &data[start..];
        let h1 = tail.iter().map(|&b| b as u32).sum();
        // Newest byte has weight 7, oldest surviving byte has weight 7 - len + 1.
        let h2 = tail
            .iter()
            .rev()
            .enumerate()
            .map(|(age, &b)| (ROLLING_WINDOW - age) as u32 * b as u32)
            .sum();
        (h1, h2)
    }

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(RollingHash::new().sum(), 0);
    }

    #[test]
    fn test_deterministic() {
        let data = b"Hello, World!";
        let mut h1 = RollingHash::new();
        h1.update(data);
        let mut h2 = RollingHash::new();
        h2.update(data);
        assert_eq!(h1.sum(), h2.sum());
    }

    #[test]
    fn test_h1_tracks_window_sum() {
        let data: Vec<u8> = (0..64u32).map(|i| (i * 37 % 251) as u8).collect();
        let mut rolling = RollingHash::new();
        for (i, &b) in data.iter().enumerate() {
            rolling.update_byte(b);
            let (h1, h2) = window_sums(&data[..=i]);
            assert_eq!(rolling.h1, h1, "h1 mismatch after {} bytes", i + 1);
            assert_eq!(rolling.h2, h2, "h2 mismatch after {} bytes", i + 1);
        }
    }

    #[test]
    fn test_sum_depends_only_on_recent_bytes_for_h1_h2() {
        // Two streams that end in the same seven bytes share h1 and h2;
        // only h3 remembers the distant past (and shifts it out after 7 bytes).
        let tail = b"ABCDEFG";
        let mut a = RollingHash::new();
        a.update(b"xxxxxxxxxxxxxxxxxxxx");
        a.update(tail);
        let mut b = RollingHash::new();
        b.update(b"yy");
        b.update(tail);
        assert_eq!(a.h1, b.h1);
        assert_eq!(a.h2, b.h2);
        assert_eq!(a.sum(), b.sum());
    }

    #[test]
    fn test_wrapping_does_not_panic() {
        let mut rolling = RollingHash::new();
        rolling.update(&[0xFF; 10_000]);
        let _ = rolling.sum();
    }
}
