#![no_std]

pub mod proxy_batch_supply;
pub mod proxy_comet;
pub mod proxy_safe_repay;
