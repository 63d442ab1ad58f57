#![no_std]

/// Fixed point base for asset prices (1e18). A price expresses how many
/// base-asset raw units one whole collateral unit is worth, WAD scaled.
pub const WAD: u64 = 1_000_000_000_000_000_000;

pub const BPS: u64 = 10_000; // 100%

/// Buffer applied to a repayment before sizing the collateral release (105%).
/// Keeps the withdrawal away from the exact liquidation edge.
pub const SAFETY_MARGIN_BPS: u64 = 10_500;
