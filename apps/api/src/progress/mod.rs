// Progress — per-user accumulator of scores, counters and session history.

pub mod handlers;
pub mod store;
pub mod update;
