use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{Config, CreateEventParams, Event, Organizer, TicketIndex};
use crate::utils::safe_add;
use crate::utils::validation::validate_event_text;

#[derive(Accounts)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub organizer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = organizer,
        space = 8 + Event::INIT_SPACE,
        seeds = [EVENT_SEED, config.next_event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event: Account<'info, Event>,

    #[account(
        init,
        payer = organizer,
        space = 8 + TicketIndex::INIT_SPACE,
        seeds = [EVENT_TICKETS_SEED, config.next_event_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub event_tickets: Account<'info, TicketIndex>,

    #[account(
        init_if_needed,
        payer = organizer,
        space = 8 + Organizer::INIT_SPACE,
        seeds = [ORGANIZER_SEED, organizer.key().as_ref()],
        bump,
    )]
    pub organizer_stats: Account<'info, Organizer>,

    pub system_program: Program<'info, System>,
}

pub fn create_event(ctx: Context<CreateEvent>, params: CreateEventParams) -> Result<()> {
    let current_slot = Clock::get()?.slot;
    let organizer = ctx.accounts.organizer.key();

    let event = open_event(
        &mut ctx.accounts.config,
        &mut ctx.accounts.organizer_stats,
        params,
        organizer,
        current_slot,
        ctx.bumps.event,
    )?;

    let event_id = event.event_id;
    let ticket_price = event.ticket_price;
    let total_tickets = event.total_tickets;
    ctx.accounts.event.set_inner(event);

    let event_tickets = &mut ctx.accounts.event_tickets;
    event_tickets.ticket_ids = Vec::new();
    event_tickets.bump = ctx.bumps.event_tickets;

    ctx.accounts.organizer_stats.bump = ctx.bumps.organizer_stats;

    emit!(EventCreated {
        event_id,
        organizer,
        ticket_price,
        total_tickets,
        slot: current_slot,
    });

    msg!("Event {} created by {}", event_id, organizer);

    Ok(())
}

/// Validates the new event against `config` and allocates its id. Nothing is
/// written unless every check passes.
pub fn open_event(
    config: &mut Config,
    organizer_stats: &mut Organizer,
    params: CreateEventParams,
    organizer: Pubkey,
    current_slot: u64,
    bump: u8,
) -> Result<Event> {
    validate_event_text(&params)?;
    config.validate_event_terms(
        params.ticket_price,
        params.refund_window,
        params.date,
        current_slot,
    )?;

    let event_id = config.next_event_id;
    let next_event_id = safe_add(event_id, 1)?;
    organizer_stats.record_event_created()?;
    config.next_event_id = next_event_id;

    Ok(Event {
        event_id,
        name: params.name,
        description: params.description,
        venue: params.venue,
        category: params.category,
        organizer,
        date: params.date,
        total_tickets: params.total_tickets,
        tickets_sold: 0,
        ticket_price: params.ticket_price,
        refund_window: params.refund_window,
        revenue: 0,
        is_active: true,
        bump,
    })
}

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub organizer: Pubkey,
    pub ticket_price: u64,
    pub total_tickets: u64,
    pub slot: u64,
}
