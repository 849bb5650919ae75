use rand::RngCore;

/// Emits the same word forever. `ConstRng(0)` makes every probability roll
/// pass and every range draw land at its low end; `ConstRng(u64::MAX)` fails
/// every probability roll. Handy for pinning one side of a stochastic branch.
pub(crate) struct ConstRng(pub u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        self.0 as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = self.0.to_le_bytes();
        for chunk in dest.chunks_mut(bytes.len()) {
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
