use anchor_lang::prelude::*;
use solana_program::clock::Slot;

/// Slot at which a ledger snapshot was last written by its owning program
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct LastUpdate {
    /// Last slot when updated
    pub slot: u64,
}

impl LastUpdate {
    pub fn new(slot: Slot) -> Self {
        Self { slot }
    }

    /// Slots elapsed since the last update. Zero if the clock is behind the snapshot.
    pub fn slots_elapsed(&self, current_slot: Slot) -> u64 {
        current_slot.saturating_sub(self.slot)
    }

    /// A zero `max_age_slots` disables the check.
    pub fn is_stale(&self, current_slot: Slot, max_age_slots: u64) -> bool {
        max_age_slots != 0 && self.slots_elapsed(current_slot) > max_age_slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staleness_window() {
        let last_update = LastUpdate::new(100);
        assert!(!last_update.is_stale(150, 50));
        assert!(last_update.is_stale(151, 50));
        assert!(!last_update.is_stale(10_000, 0));
        assert!(!last_update.is_stale(90, 5));
    }
}
