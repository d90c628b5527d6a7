use anchor_lang::prelude::*;
use crate::constants::TICKET_SEED;
use crate::errors::TicketLedgerError;
use crate::state::{Event, Ticket};

#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct ValidateTicket<'info> {
    pub validator: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: Option<Account<'info, Ticket>>,

    // Matched against ticket.event_id in the handler
    pub event: Option<Account<'info, Event>>,
}

pub fn validate_ticket(ctx: Context<ValidateTicket>, ticket_id: u64) -> Result<()> {
    let validator = ctx.accounts.validator.key();
    let accounts = &mut *ctx.accounts;

    let ticket = accounts
        .ticket
        .as_mut()
        .ok_or(TicketLedgerError::TicketNotFound)?;
    let event = accounts
        .event
        .as_ref()
        .ok_or(TicketLedgerError::EventNotFound)?;

    ticket.redeem(event, &validator)?;

    emit!(TicketValidated {
        ticket_id,
        event_id: event.event_id,
        validator,
        slot: Clock::get()?.slot,
    });

    msg!("Ticket {} validated and marked as USED", ticket_id);

    Ok(())
}

#[event]
pub struct TicketValidated {
    pub ticket_id: u64,
    pub event_id: u64,
    pub validator: Pubkey,
    pub slot: u64,
}
