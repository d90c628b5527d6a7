//! Transition scenarios run against an in-memory copy of the program's
//! accounts. `Ledger` drives the same functions the instruction handlers
//! call, in the same order, and keeps lamport balances in a map that is only
//! committed when the whole transition succeeds.


use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use crate::errors::TicketLedgerError;
use crate::instructions::{open_event, record_purchase, record_refund};
use crate::state::*;

pub const OWNER_FEE_PERCENT: u64 = 5;
pub const MIN_PRICE: u64 = 1_000_000;
pub const MAX_WINDOW: u64 = 1_440;
pub const START_SLOT: u64 = 100;

pub fn assert_error<T>(result: Result<T>, expected: TicketLedgerError) {
    match result {
        Ok(_) => panic!("expected {}, got Ok", expected),
        Err(err) => assert_eq!(err, anchor_lang::error::Error::from(expected)),
    }
}

pub fn event_params(ticket_price: u64, total_tickets: u64, refund_window: u64) -> CreateEventParams {
    CreateEventParams {
        name: "Harbor Lights".to_string(),
        description: "Open-air concert on the pier".to_string(),
        venue: "Pier 4".to_string(),
        date: START_SLOT + 10_000,
        total_tickets,
        ticket_price,
        refund_window,
        category: "music".to_string(),
    }
}

fn transfer(
    balances: &mut BTreeMap<Pubkey, u64>,
    from: Pubkey,
    to: Pubkey,
    amount: u64,
) -> Result<()> {
    let available = balances.get(&from).copied().unwrap_or(0);
    require!(available >= amount, TicketLedgerError::InsufficientFunds);
    balances.insert(from, available - amount);
    *balances.entry(to).or_default() += amount;
    Ok(())
}

pub struct Ledger {
    pub config: Config,
    pub events: BTreeMap<u64, Event>,
    pub event_tickets: BTreeMap<u64, TicketIndex>,
    pub tickets: BTreeMap<u64, Ticket>,
    pub user_tickets: BTreeMap<Pubkey, TicketIndex>,
    pub organizers: BTreeMap<Pubkey, Organizer>,
    pub balances: BTreeMap<Pubkey, u64>,
    pub slot: u64,
}

impl Ledger {
    pub fn new(owner: Pubkey) -> Self {
        Self {
            config: Config::new(owner, OWNER_FEE_PERCENT, MIN_PRICE, MAX_WINDOW, 255),
            events: BTreeMap::new(),
            event_tickets: BTreeMap::new(),
            tickets: BTreeMap::new(),
            user_tickets: BTreeMap::new(),
            organizers: BTreeMap::new(),
            balances: BTreeMap::new(),
            slot: START_SLOT,
        }
    }

    pub fn fund(&mut self, account: Pubkey, lamports: u64) {
        *self.balances.entry(account).or_default() += lamports;
    }

    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn advance(&mut self, slots: u64) {
        self.slot += slots;
    }

    /// Serialized form of every record, for before/after comparisons.
    pub fn snapshot(&self) -> Vec<u8> {
        let mut bytes = self.config.try_to_vec().unwrap();
        for (id, event) in &self.events {
            bytes.extend(id.to_le_bytes());
            bytes.extend(event.try_to_vec().unwrap());
        }
        for (id, index) in &self.event_tickets {
            bytes.extend(id.to_le_bytes());
            bytes.extend(index.try_to_vec().unwrap());
        }
        for (id, ticket) in &self.tickets {
            bytes.extend(id.to_le_bytes());
            bytes.extend(ticket.try_to_vec().unwrap());
        }
        for (owner, index) in &self.user_tickets {
            bytes.extend(owner.to_bytes());
            bytes.extend(index.try_to_vec().unwrap());
        }
        for (organizer, stats) in &self.organizers {
            bytes.extend(organizer.to_bytes());
            bytes.extend(stats.try_to_vec().unwrap());
        }
        for (account, lamports) in &self.balances {
            bytes.extend(account.to_bytes());
            bytes.extend(lamports.to_le_bytes());
        }
        bytes
    }

    pub fn create_event(&mut self, organizer: Pubkey, params: CreateEventParams) -> Result<u64> {
        let mut stats = self.organizers.get(&organizer).cloned().unwrap_or_default();
        let event = open_event(&mut self.config, &mut stats, params, organizer, self.slot, 255)?;

        let event_id = event.event_id;
        self.events.insert(event_id, event);
        self.event_tickets.insert(event_id, TicketIndex::default());
        self.organizers.insert(organizer, stats);
        Ok(event_id)
    }

    pub fn purchase(&mut self, buyer: Pubkey, event_id: u64) -> Result<u64> {
        let organizer = self.organizer_of(event_id);
        self.purchase_paying(buyer, event_id, organizer)
    }

    /// Purchase with an explicit `organizer` account, as a client would pass it.
    pub fn purchase_paying(&mut self, buyer: Pubkey, event_id: u64, payee: Pubkey) -> Result<u64> {
        let event = self
            .events
            .get_mut(&event_id)
            .ok_or(TicketLedgerError::EventNotFound)?;
        let event_tickets = self
            .event_tickets
            .get_mut(&event_id)
            .ok_or(TicketLedgerError::EventNotFound)?;

        event.check_purchasable()?;
        event.require_payee(&payee)?;

        let mut balances = self.balances.clone();
        transfer(&mut balances, buyer, payee, event.ticket_price)?;

        let had_index = self.user_tickets.contains_key(&buyer);
        let user_tickets = self.user_tickets.entry(buyer).or_default();
        match record_purchase(
            &mut self.config,
            event,
            event_tickets,
            user_tickets,
            buyer,
            self.slot,
            255,
        ) {
            Ok(ticket) => {
                let ticket_id = ticket.ticket_id;
                self.tickets.insert(ticket_id, ticket);
                self.balances = balances;
                Ok(ticket_id)
            }
            Err(err) => {
                if !had_index {
                    self.user_tickets.remove(&buyer);
                }
                Err(err)
            }
        }
    }

    pub fn validate(&mut self, caller: Pubkey, ticket_id: u64) -> Result<()> {
        let ticket = self
            .tickets
            .get_mut(&ticket_id)
            .ok_or(TicketLedgerError::TicketNotFound)?;
        let event = self
            .events
            .get(&ticket.event_id)
            .ok_or(TicketLedgerError::EventNotFound)?;

        ticket.redeem(event, &caller)
    }

    pub fn refund(&mut self, caller: Pubkey, ticket_id: u64) -> Result<()> {
        let organizer = self
            .tickets
            .get(&ticket_id)
            .map(|ticket| self.organizer_of(ticket.event_id))
            .unwrap_or_default();
        self.refund_paid_by(caller, ticket_id, organizer)
    }

    /// Refund with an explicit co-signing `organizer` account.
    pub fn refund_paid_by(&mut self, caller: Pubkey, ticket_id: u64, payer: Pubkey) -> Result<()> {
        let ticket = self
            .tickets
            .get_mut(&ticket_id)
            .ok_or(TicketLedgerError::TicketNotFound)?;
        let event = self
            .events
            .get_mut(&ticket.event_id)
            .ok_or(TicketLedgerError::EventNotFound)?;

        ticket.check_refundable(event, &caller, self.slot)?;
        event.require_payee(&payer)?;

        let mut balances = self.balances.clone();
        transfer(&mut balances, payer, ticket.owner, ticket.purchase_price)?;

        record_refund(ticket, event)?;
        self.balances = balances;
        Ok(())
    }

    /// The event's organizer, or the default key for an unknown event.
    fn organizer_of(&self, event_id: u64) -> Pubkey {
        self.events
            .get(&event_id)
            .map(|event| event.organizer)
            .unwrap_or_default()
    }

    /// Net revenue recomputed from tickets, for conservation checks.
    pub fn unrefunded_total(&self, event_id: u64) -> u64 {
        self.tickets
            .values()
            .filter(|ticket| ticket.event_id == event_id && !ticket.is_refunded)
            .map(|ticket| ticket.purchase_price)
            .sum()
    }
}
