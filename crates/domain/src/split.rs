/// Partition of a sorted asset list into the primary run and the
/// companion run. The companion run starts one past the midpoint, so the
/// asset at position `primary_len` contributes no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfSplit {
    total: usize,
    primary_len: usize,
    companion_start: usize,
}

impl HalfSplit {
    pub fn of(total: usize) -> Self {
        let half = total / 2;
        Self {
            total,
            primary_len: half,
            companion_start: half + 1,
        }
    }

    pub fn primary_len(&self) -> usize {
        self.primary_len
    }

    pub fn companion_start(&self) -> usize {
        self.companion_start
    }

    pub fn companion_len(&self) -> usize {
        self.total.saturating_sub(self.companion_start)
    }

    pub fn expected_outputs(&self) -> usize {
        self.primary_len + self.companion_len()
    }
}
