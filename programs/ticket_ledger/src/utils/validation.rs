use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::constants::*;
use crate::state::CreateEventParams;
use super::validate_text;

pub fn validate_event_text(params: &CreateEventParams) -> Result<()> {
    validate_text(&params.name, MAX_EVENT_NAME)?;
    validate_text(&params.description, MAX_DESCRIPTION)?;
    validate_text(&params.venue, MAX_VENUE_NAME)?;
    validate_text(&params.category, MAX_CATEGORY)?;
    Ok(())
}

pub fn validate_ticket_price(price: u64, min_ticket_price: u64) -> Result<()> {
    require!(
        price >= min_ticket_price,
        TicketLedgerError::InvalidPrice
    );
    Ok(())
}

// Reported as InvalidPrice; callers cannot tell the two apart.
pub fn validate_refund_window(window: u64, max_refund_window: u64) -> Result<()> {
    require!(
        window <= max_refund_window,
        TicketLedgerError::InvalidPrice
    );
    Ok(())
}

pub fn validate_event_date(date: u64, current_slot: u64) -> Result<()> {
    require!(
        date > current_slot,
        TicketLedgerError::EventExpired
    );
    Ok(())
}
