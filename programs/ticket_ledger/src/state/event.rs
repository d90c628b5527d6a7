use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::utils::{safe_add, safe_sub};

#[account]
#[derive(InitSpace)]
pub struct Event {
    pub event_id: u64,              // 8 bytes
    #[max_len(100)]
    pub name: String,               // 4 + 100 bytes
    #[max_len(500)]
    pub description: String,        // 4 + 500 bytes
    #[max_len(100)]
    pub venue: String,              // 4 + 100 bytes
    #[max_len(50)]
    pub category: String,           // 4 + 50 bytes
    pub organizer: Pubkey,          // 32 bytes - receives sale proceeds
    pub date: u64,                  // 8 bytes - slot
    pub total_tickets: u64,         // 8 bytes - capacity
    pub tickets_sold: u64,          // 8 bytes - never decremented
    pub ticket_price: u64,          // 8 bytes - lamports
    pub refund_window: u64,         // 8 bytes - slots after purchase
    pub revenue: u64,               // 8 bytes - net of refunds
    pub is_active: bool,            // 1 byte
    pub bump: u8,                   // 1 byte
}

impl Event {
    pub fn is_organizer(&self, caller: &Pubkey) -> bool {
        self.organizer == *caller
    }

    pub fn tickets_remaining(&self) -> u64 {
        self.total_tickets.saturating_sub(self.tickets_sold)
    }

    pub fn check_purchasable(&self) -> Result<()> {
        require!(self.is_active, TicketLedgerError::EventExpired);
        require!(self.tickets_remaining() > 0, TicketLedgerError::SoldOut);
        Ok(())
    }

    /// Sale proceeds and refunds move through the organizer's own account.
    pub fn require_payee(&self, payee: &Pubkey) -> Result<()> {
        require_keys_eq!(*payee, self.organizer, TicketLedgerError::NotAuthorized);
        Ok(())
    }

    pub fn record_sale(&mut self, price: u64) -> Result<()> {
        let tickets_sold = safe_add(self.tickets_sold, 1)?;
        let revenue = safe_add(self.revenue, price)?;
        self.tickets_sold = tickets_sold;
        self.revenue = revenue;
        Ok(())
    }

    pub fn record_refund(&mut self, price: u64) -> Result<()> {
        self.revenue = safe_sub(self.revenue, price)?;
        Ok(())
    }
}
