use anchor_lang::prelude::*;
use crate::constants::TICKET_SEED;
use crate::errors::TicketLedgerError;
use crate::state::{Event, Ticket};
use crate::utils::transfer_lamports;

/// Refunds are initiated by the ticket owner and also need the event
/// organizer's signature.
#[derive(Accounts)]
#[instruction(ticket_id: u64)]
pub struct RefundTicket<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Pays the refund. The System Program only debits a signer, so a
    /// refund goes through only when the organizer co-signs it.
    #[account(mut)]
    pub organizer: Signer<'info>,

    #[account(
        mut,
        seeds = [TICKET_SEED, ticket_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: Option<Account<'info, Ticket>>,

    // Matched against ticket.event_id in the handler
    #[account(mut)]
    pub event: Option<Account<'info, Event>>,

    pub system_program: Program<'info, System>,
}

pub fn refund_ticket(ctx: Context<RefundTicket>, ticket_id: u64) -> Result<()> {
    let current_slot = Clock::get()?.slot;
    let accounts = &mut *ctx.accounts;
    let owner = accounts.owner.key();

    let ticket = accounts
        .ticket
        .as_mut()
        .ok_or(TicketLedgerError::TicketNotFound)?;
    let event = accounts
        .event
        .as_mut()
        .ok_or(TicketLedgerError::EventNotFound)?;

    ticket.check_refundable(event, &owner, current_slot)?;
    event.require_payee(&accounts.organizer.key())?;

    let amount = ticket.purchase_price;
    transfer_lamports(
        &accounts.system_program,
        accounts.organizer.to_account_info(),
        accounts.owner.to_account_info(),
        amount,
    )?;

    record_refund(ticket, event)?;

    emit!(TicketRefunded {
        ticket_id,
        event_id: event.event_id,
        owner,
        amount,
        slot: current_slot,
    });

    msg!("Ticket {} refunded {} lamports", ticket_id, amount);

    Ok(())
}

/// Reverses the ticket's revenue once the refund transfer has settled.
/// `tickets_sold` is left alone.
pub fn record_refund(ticket: &mut Ticket, event: &mut Event) -> Result<()> {
    event.record_refund(ticket.purchase_price)?;
    ticket.is_refunded = true;
    Ok(())
}

#[event]
pub struct TicketRefunded {
    pub ticket_id: u64,
    pub event_id: u64,
    pub owner: Pubkey,
    pub amount: u64,
    pub slot: u64,
}
