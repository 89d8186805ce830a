//! Background jobs run on a cron schedule alongside the gateway client.

pub mod ban_expiry;
