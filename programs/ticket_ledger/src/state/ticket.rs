use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::state::Event;
use crate::utils::safe_sub;

#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub ticket_id: u64,             // 8 bytes - global, starts at 1
    pub event_id: u64,              // 8 bytes
    pub owner: Pubkey,              // 32 bytes
    pub purchase_price: u64,        // 8 bytes - price when bought
    pub purchase_date: u64,         // 8 bytes - slot
    pub is_used: bool,              // 1 byte
    pub is_refunded: bool,          // 1 byte
    pub seat_number: Option<u32>,   // 1 + 4 bytes - never assigned
    pub bump: u8,                   // 1 byte
}

impl Ticket {
    pub fn issue(ticket_id: u64, event: &Event, owner: Pubkey, current_slot: u64, bump: u8) -> Self {
        Self {
            ticket_id,
            event_id: event.event_id,
            owner,
            purchase_price: event.ticket_price,
            purchase_date: current_slot,
            is_used: false,
            is_refunded: false,
            seat_number: None,
            bump,
        }
    }

    /// Used and refunded are both terminal.
    pub fn is_settled(&self) -> bool {
        self.is_used || self.is_refunded
    }

    fn require_event(&self, event: &Event) -> Result<()> {
        require!(
            self.event_id == event.event_id,
            TicketLedgerError::EventNotFound
        );
        Ok(())
    }

    fn require_unsettled(&self) -> Result<()> {
        require!(!self.is_settled(), TicketLedgerError::TicketUsed);
        Ok(())
    }

    /// Marks the ticket used. Only the event's organizer may redeem.
    pub fn redeem(&mut self, event: &Event, caller: &Pubkey) -> Result<()> {
        self.require_event(event)?;
        require!(event.is_organizer(caller), TicketLedgerError::NotAuthorized);
        self.require_unsettled()?;

        self.is_used = true;
        Ok(())
    }

    pub fn check_refundable(&self, event: &Event, caller: &Pubkey, current_slot: u64) -> Result<()> {
        self.require_event(event)?;
        require_keys_eq!(*caller, self.owner, TicketLedgerError::NotAuthorized);
        self.require_unsettled()?;

        let elapsed = safe_sub(current_slot, self.purchase_date)?;
        require!(
            elapsed <= event.refund_window,
            TicketLedgerError::RefundWindowClosed
        );
        Ok(())
    }
}
