// Text bounds, mirrored by the #[max_len] attributes on Event
pub const MAX_EVENT_NAME: usize = 100;
pub const MAX_DESCRIPTION: usize = 500;
pub const MAX_VENUE_NAME: usize = 100;
pub const MAX_CATEGORY: usize = 50;

// Hard ceiling on any ticket-id index, independent of event capacity
pub const MAX_TICKETS_PER_INDEX: usize = 100;

// Percent denominator for the platform fee
pub const FEE_DENOMINATOR: u64 = 100;

// Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const EVENT_SEED: &[u8] = b"event";
pub const EVENT_TICKETS_SEED: &[u8] = b"event_tickets";
pub const TICKET_SEED: &[u8] = b"ticket";
pub const USER_TICKETS_SEED: &[u8] = b"user_tickets";
pub const ORGANIZER_SEED: &[u8] = b"organizer";
