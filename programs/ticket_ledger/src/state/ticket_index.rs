use anchor_lang::prelude::*;
use crate::constants::MAX_TICKETS_PER_INDEX;
use crate::errors::TicketLedgerError;

/// Append-only list of ticket ids, kept per event and per owner.
#[account]
#[derive(InitSpace, Default)]
pub struct TicketIndex {
    #[max_len(100)]
    pub ticket_ids: Vec<u64>,       // 4 + 8 * 100 bytes
    pub bump: u8,                   // 1 byte
}

impl TicketIndex {
    pub const CAPACITY: usize = MAX_TICKETS_PER_INDEX;

    pub fn is_full(&self) -> bool {
        self.ticket_ids.len() >= Self::CAPACITY
    }

    pub fn require_room(&self) -> Result<()> {
        require!(!self.is_full(), TicketLedgerError::NotAuthorized);
        Ok(())
    }

    pub fn push(&mut self, ticket_id: u64) -> Result<()> {
        self.require_room()?;
        self.ticket_ids.push(ticket_id);
        Ok(())
    }
}
