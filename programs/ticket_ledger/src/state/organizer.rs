use anchor_lang::prelude::*;
use crate::utils::safe_add;

/// Per-organizer aggregate, created with the organizer's first event.
#[account]
#[derive(InitSpace, Default)]
pub struct Organizer {
    pub total_revenue: u64,         // 8 bytes - reserved for withdrawals
    pub pending_withdrawals: u64,   // 8 bytes - reserved for withdrawals
    pub events_organized: u64,      // 8 bytes
    pub bump: u8,                   // 1 byte
}

impl Organizer {
    pub fn record_event_created(&mut self) -> Result<()> {
        self.events_organized = safe_add(self.events_organized, 1)?;
        Ok(())
    }
}
