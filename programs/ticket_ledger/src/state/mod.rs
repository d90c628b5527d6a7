use anchor_lang::prelude::*;
pub mod config;
pub mod event;
pub mod ticket;
pub mod ticket_index;
pub mod organizer;


pub use config::*;
pub use event::*;
pub use ticket::*;
pub use ticket_index::*;
pub use organizer::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct CreateEventParams {
    pub name: String,
    pub description: String,
    pub venue: String,
    pub date: u64,
    pub total_tickets: u64,
    pub ticket_price: u64,
    pub refund_window: u64,
    pub category: String,
}
