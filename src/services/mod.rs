// Service module exports

pub mod countdown;
pub mod notification;
pub mod palette;
pub mod settings;
