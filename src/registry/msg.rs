//! Execute and query messages for the registry contract, plus fee constants.

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::SdkError;
use crate::shared::{price, AccAddress, IsccCode};
use crate::wallet::{Coin, Fee, MsgExecuteContract};

/// Payment denomination for all registry amounts and fees.
pub const UUSD: &str = "uusd";

/// Gas limit for both mint and license broadcasts.
pub const BROADCAST_GAS: u64 = 1_000_000;

/// Flat fee amount attached to a mint broadcast, in micro units.
pub const MINT_FEE_AMOUNT: &str = "200000";

/// Flat fee amount attached to a license broadcast, in micro units.
/// Larger than the mint fee: the license execution also moves the payment.
pub const LICENSE_FEE_AMOUNT: &str = "1000000";

/// Display units added to a requested license price to cover network fee
/// variance. The payment and the fee share one denomination, and an
/// underpaid license is rejected on chain, so the amount is padded
/// optimistically rather than computed exactly. Minor overpayment is the
/// accepted trade-off.
pub fn license_price_headroom() -> Decimal {
    Decimal::TWO
}

/// Tagged execute-message union understood by the registry contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Mint {
        token_id: String,
        iscc_code: IsccCode,
        tophash: String,
        owner: AccAddress,
        name: String,
        description: String,
        image: String,
        license_url: String,
        license_price: Coin,
    },
    License {
        token_id: String,
    },
}

/// Tagged query-message union understood by the registry contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetByIsccCode { iscc_code: String },
}

/// User-supplied inputs for a mint submission.
#[derive(Debug, Clone, PartialEq)]
pub struct MintSpec {
    pub iscc_code: IsccCode,
    pub tophash: String,
    pub name: String,
    pub description: String,
    /// Media URI, normally an IPFS gateway URL.
    pub image: String,
    pub license_url: String,
    /// License price in display units.
    pub price: Decimal,
}

/// Build the mint execute message and fee, generating a fresh token id.
///
/// Returns the token id alongside the message so the caller can hand it back
/// on success — the chain does not echo it.
pub fn build_mint(
    sender: &AccAddress,
    contract: &AccAddress,
    spec: &MintSpec,
) -> Result<(MsgExecuteContract, Fee, String), SdkError> {
    let token_id = Uuid::new_v4().to_string();
    let license_price = Coin::uusd(price::to_micro(spec.price)?);

    let execute_msg = serde_json::to_value(ExecuteMsg::Mint {
        token_id: token_id.clone(),
        iscc_code: spec.iscc_code.clone(),
        tophash: spec.tophash.clone(),
        owner: sender.clone(),
        name: spec.name.clone(),
        description: spec.description.clone(),
        image: spec.image.clone(),
        license_url: spec.license_url.clone(),
        license_price,
    })?;

    let msg = MsgExecuteContract {
        sender: sender.clone(),
        contract: contract.clone(),
        execute_msg,
        coins: vec![],
    };
    let fee = Fee::flat(BROADCAST_GAS, Coin::uusd(MINT_FEE_AMOUNT));

    Ok((msg, fee, token_id))
}

/// Build the license execute message and fee.
///
/// The padded payment is attached as coins on the message itself; the
/// contract forwards it to the token owner.
pub fn build_license(
    sender: &AccAddress,
    contract: &AccAddress,
    token_id: &str,
    price: Decimal,
) -> Result<(MsgExecuteContract, Fee), SdkError> {
    let padded = price + license_price_headroom();
    let payment = Coin::uusd(price::to_micro(padded)?);

    let execute_msg = serde_json::to_value(ExecuteMsg::License {
        token_id: token_id.to_string(),
    })?;

    let msg = MsgExecuteContract {
        sender: sender.clone(),
        contract: contract.clone(),
        execute_msg,
        coins: vec![payment],
    };
    let fee = Fee::flat(BROADCAST_GAS, Coin::uusd(LICENSE_FEE_AMOUNT));

    Ok((msg, fee))
}

/// Build the lookup query for a content sub-code.
pub fn build_resolve(content_id: &str) -> QueryMsg {
    QueryMsg::GetByIsccCode {
        iscc_code: content_id.to_string(),
    }
}
