use rand::RngCore;

/// Replays a fixed list of 32-bit draws, cycling once exhausted.
pub struct MockRng {
    draws: Vec<u32>,
    cursor: usize,
}

impl MockRng {
    pub fn new(draws: Vec<u32>) -> Self {
        assert!(!draws.is_empty(), "MockRng needs at least one draw");
        MockRng { draws, cursor: 0 }
    }

    /// Every draw is `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.draws[self.cursor];
        self.cursor = (self.cursor + 1) % self.draws.len();
        value
    }

    fn next_u64(&mut self) -> u64 {
        let low = self.next_u32() as u64;
        let high = self.next_u32() as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
