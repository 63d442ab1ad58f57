#![no_std]

pub static ERROR_ARITY_MISMATCH: &[u8] = b"Assets and amounts length mismatch.";

pub static ERROR_EMPTY_BATCH: &[u8] = b"Batch cannot be empty.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset identifier.";

pub static ERROR_INVALID_AMOUNT: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_PAYMENT_MISMATCH: &[u8] =
    b"Attached payments do not match the declared amounts.";

pub static ERROR_WRONG_REPAY_TOKEN: &[u8] = b"Payment token is not the base asset.";

pub static ERROR_EXCEEDS_BORROW_BALANCE: &[u8] = b"Repay amount exceeds borrow balance.";

pub static ERROR_INSUFFICIENT_COLLATERAL: &[u8] =
    b"Insufficient collateral for safe repayment.";

pub static ERROR_COMET_ZERO_ADDRESS: &[u8] = b"Comet address cannot be zero.";

pub static ERROR_PRICE_NOT_SET: &[u8] = b"No price available for this asset.";

pub static ERROR_REPAY_EXCEEDS_DEBT: &[u8] = b"Repayment exceeds recorded debt.";

pub static ERROR_WITHDRAW_EXCEEDS_COLLATERAL: &[u8] =
    b"Withdraw amount exceeds collateral balance.";

pub static ERROR_SUPPLY_CAP: &[u8] = b"Supply cap reached for this asset.";

pub static ERROR_SUPPLY_PAUSED: &[u8] = b"Supplying is paused.";

pub static ERROR_WITHDRAW_PAUSED: &[u8] = b"Withdrawing is paused.";
