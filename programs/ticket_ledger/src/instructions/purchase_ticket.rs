use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::TicketLedgerError;
use crate::state::{Config, Event, Ticket, TicketIndex};
use crate::utils::{safe_add, transfer_lamports};

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct PurchaseTicket<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event: Option<Account<'info, Event>>,

    #[account(
        mut,
        seeds = [EVENT_TICKETS_SEED, event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event_tickets: Option<Account<'info, TicketIndex>>,

    /// CHECK: Receives the ticket price; must be the event's organizer
    #[account(mut)]
    pub organizer: UncheckedAccount<'info>,

    #[account(
        init,
        payer = buyer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, config.next_ticket_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + TicketIndex::INIT_SPACE,
        seeds = [USER_TICKETS_SEED, buyer.key().as_ref()],
        bump,
    )]
    pub user_tickets: Account<'info, TicketIndex>,

    pub system_program: Program<'info, System>,
}

pub fn purchase_ticket(ctx: Context<PurchaseTicket>, event_id: u64) -> Result<()> {
    let current_slot = Clock::get()?.slot;
    let ticket_bump = ctx.bumps.ticket;
    let user_tickets_bump = ctx.bumps.user_tickets;

    let accounts = &mut *ctx.accounts;
    let buyer = accounts.buyer.key();

    let event = accounts
        .event
        .as_mut()
        .ok_or(TicketLedgerError::EventNotFound)?;
    let event_tickets = accounts
        .event_tickets
        .as_mut()
        .ok_or(TicketLedgerError::EventNotFound)?;

    event.check_purchasable()?;
    event.require_payee(&accounts.organizer.key())?;

    transfer_lamports(
        &accounts.system_program,
        accounts.buyer.to_account_info(),
        accounts.organizer.to_account_info(),
        event.ticket_price,
    )?;

    accounts.user_tickets.bump = user_tickets_bump;
    let ticket = record_purchase(
        &mut accounts.config,
        event,
        event_tickets,
        &mut accounts.user_tickets,
        buyer,
        current_slot,
        ticket_bump,
    )?;

    let ticket_id = ticket.ticket_id;
    let price = ticket.purchase_price;
    accounts.ticket.set_inner(ticket);

    emit!(TicketPurchased {
        ticket_id,
        event_id,
        buyer,
        price,
        slot: current_slot,
    });

    msg!("Ticket {} for event {} sold to {}", ticket_id, event_id, buyer);

    Ok(())
}

/// Writes a sale whose payment has already settled. Index capacity is
/// checked before the first write.
pub fn record_purchase(
    config: &mut Config,
    event: &mut Event,
    event_tickets: &mut TicketIndex,
    user_tickets: &mut TicketIndex,
    buyer: Pubkey,
    current_slot: u64,
    bump: u8,
) -> Result<Ticket> {
    user_tickets.require_room()?;
    event_tickets.require_room()?;

    let ticket_id = config.next_ticket_id;
    let next_ticket_id = safe_add(ticket_id, 1)?;
    let ticket = Ticket::issue(ticket_id, event, buyer, current_slot, bump);

    event.record_sale(ticket.purchase_price)?;
    user_tickets.push(ticket_id)?;
    event_tickets.push(ticket_id)?;
    config.next_ticket_id = next_ticket_id;

    Ok(ticket)
}

#[event]
pub struct TicketPurchased {
    pub ticket_id: u64,
    pub event_id: u64,
    pub buyer: Pubkey,
    pub price: u64,
    pub slot: u64,
}
