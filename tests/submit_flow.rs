//! End-to-end submission flow tests over mock collaborators.
//!
//! No network: the wallet and chain node are scripted doubles, so these
//! tests pin down the outcome classification exactly.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;

use licium_sdk::prelude::*;

// ─── Mock collaborators ──────────────────────────────────────────────────────

struct MockWallet {
    address: AccAddress,
    response: Result<PostResponse, WalletError>,
    posts: AtomicU32,
    last_msgs: Mutex<Vec<MsgExecuteContract>>,
}

impl MockWallet {
    fn broadcasting(txhash: &str) -> Self {
        Self {
            address: AccAddress::from("terra1minter"),
            response: Ok(PostResponse {
                txhash: txhash.to_string(),
            }),
            posts: AtomicU32::new(0),
            last_msgs: Mutex::new(Vec::new()),
        }
    }

    fn failing(error: WalletError) -> Self {
        Self {
            address: AccAddress::from("terra1minter"),
            response: Err(error),
            posts: AtomicU32::new(0),
            last_msgs: Mutex::new(Vec::new()),
        }
    }
}

impl Wallet for MockWallet {
    fn address(&self) -> AccAddress {
        self.address.clone()
    }

    async fn post(
        &self,
        msgs: Vec<MsgExecuteContract>,
        _fee: Fee,
    ) -> Result<PostResponse, WalletError> {
        self.posts.fetch_add(1, Ordering::SeqCst);
        *self.last_msgs.lock().unwrap() = msgs;
        self.response.clone()
    }
}

struct MockNode {
    tx: Option<TxInfo>,
    lookups: AtomicU32,
    queries: AtomicU32,
}

impl MockNode {
    fn with_tx(code: u32, raw_log: &str) -> Self {
        Self {
            tx: Some(TxInfo {
                txhash: "HASH1".to_string(),
                code,
                raw_log: raw_log.to_string(),
            }),
            lookups: AtomicU32::new(0),
            queries: AtomicU32::new(0),
        }
    }

    fn never_indexing() -> Self {
        Self {
            tx: None,
            lookups: AtomicU32::new(0),
            queries: AtomicU32::new(0),
        }
    }

    fn untouched(&self) -> bool {
        self.lookups.load(Ordering::SeqCst) == 0 && self.queries.load(Ordering::SeqCst) == 0
    }
}

impl ChainNode for MockNode {
    async fn tx_info(&self, _txhash: &str) -> Result<Option<TxInfo>, ChainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.tx.clone())
    }

    async fn contract_query<Q, T>(
        &self,
        _contract: &AccAddress,
        _query: &Q,
    ) -> Result<Option<T>, ChainError>
    where
        Q: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn contract() -> AccAddress {
    AccAddress::from("terra1registry")
}

fn mint_spec() -> MintSpec {
    MintSpec {
        iscc_code: IsccCode::from("CCDFPFc87MhdT-CTHKoHHjhwrqqn-CDC4cyThebBU4-CR6vjW94bB5c9"),
        tophash: "1e6f3d2c".to_string(),
        name: "Sunset".to_string(),
        description: "A sunset over water".to_string(),
        image: "https://ipfs.infura.io/ipfs/Qm123".to_string(),
        license_url: "https://license.sourcecheck.org/social.html".to_string(),
        price: Decimal::new(15, 1), // 1.5
    }
}

fn fast_confirm() -> ConfirmConfig {
    ConfirmConfig {
        initial_delay: Duration::from_millis(1),
        max_attempts: 3,
        backoff_factor: 2.0,
        max_delay: Duration::from_millis(4),
    }
}

// ─── Mint flow ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn mint_without_wallet_is_a_silent_no_op() {
    let node = MockNode::with_tx(0, "");
    let outcome = submit_mint::<MockWallet, _>(
        None,
        &node,
        &contract(),
        &mint_spec(),
        &fast_confirm(),
    )
    .await;
    assert!(outcome.is_none());
    assert!(node.untouched());
}

#[tokio::test]
async fn mint_success_carries_hash_and_generated_token_id() {
    let wallet = MockWallet::broadcasting("HASH1");
    let node = MockNode::with_tx(0, "");

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
        .await
        .unwrap();

    let TxOutcome::Success { txhash, token_id } = outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(txhash, "HASH1");

    // The token id in the outcome is the one that went into the mint message.
    let msgs = wallet.last_msgs.lock().unwrap();
    assert_eq!(
        msgs[0].execute_msg["mint"]["token_id"],
        token_id.expect("mint success carries a token id").as_str()
    );
    assert_eq!(wallet.posts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn mint_with_nonzero_code_is_a_failure_with_the_chain_log() {
    let wallet = MockWallet::broadcasting("HASH1");
    let node = MockNode::with_tx(4, "token_id already claimed");

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
        .await
        .unwrap();

    assert!(!outcome.is_success());
    let message = outcome.failure_message().unwrap();
    assert!(message.contains("token_id already claimed"), "{message}");
}

#[tokio::test]
async fn mint_with_nonzero_code_and_empty_log_hints_duplicate_registration() {
    let wallet = MockWallet::broadcasting("HASH1");
    let node = MockNode::with_tx(4, "");

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
        .await
        .unwrap();

    let message = outcome.failure_message().unwrap();
    assert!(message.contains("already be registered"), "{message}");
}

#[tokio::test]
async fn mint_rejected_by_user_fails_with_exact_copy() {
    let wallet = MockWallet::failing(WalletError::UserDenied);
    let node = MockNode::with_tx(0, "");

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
        .await
        .unwrap();

    assert_eq!(outcome.failure_message(), Some("User Denied"));
    // Nothing was broadcast, so nothing is confirmed.
    assert_eq!(node.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn mint_wallet_taxonomy_strings_survive_the_flow() {
    let cases = [
        (
            WalletError::CreateTxFailed("bad fee".into()),
            "Create Tx Failed: bad fee",
        ),
        (WalletError::TxFailed("out of gas".into()), "Tx Failed: out of gas"),
        (WalletError::Timeout, "Timeout"),
        (
            WalletError::Unspecified("boom".into()),
            "Unspecified Error: boom",
        ),
    ];
    for (error, expected) in cases {
        let wallet = MockWallet::failing(error);
        let node = MockNode::with_tx(0, "");
        let outcome =
            submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
                .await
                .unwrap();
        assert_eq!(outcome.failure_message(), Some(expected));
    }
}

#[tokio::test]
async fn mint_never_indexed_fails_after_attempt_budget() {
    let wallet = MockWallet::broadcasting("HASH1");
    let node = MockNode::never_indexing();

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &mint_spec(), &fast_confirm())
        .await
        .unwrap();

    let message = outcome.failure_message().unwrap();
    assert!(message.starts_with("Unknown Error:"), "{message}");
    assert!(message.contains("not indexed"), "{message}");
    assert_eq!(node.lookups.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn mint_with_invalid_price_fails_before_the_wallet() {
    let wallet = MockWallet::broadcasting("HASH1");
    let node = MockNode::with_tx(0, "");
    let mut spec = mint_spec();
    spec.price = Decimal::new(-1, 0);

    let outcome = submit_mint(Some(&wallet), &node, &contract(), &spec, &fast_confirm())
        .await
        .unwrap();

    let message = outcome.failure_message().unwrap();
    assert!(message.starts_with("Create Tx Failed:"), "{message}");
    assert_eq!(wallet.posts.load(Ordering::SeqCst), 0);
}

// ─── License flow ────────────────────────────────────────────────────────────

#[tokio::test]
async fn license_without_wallet_is_a_silent_no_op() {
    let node = MockNode::with_tx(0, "");
    let outcome = submit_license::<MockWallet, _>(
        None,
        &node,
        &contract(),
        "t1",
        Decimal::from(10u32),
        &fast_confirm(),
    )
    .await;
    assert!(outcome.is_none());
    assert!(node.untouched());
}

#[tokio::test]
async fn license_success_has_no_token_id_and_pads_the_payment() {
    let wallet = MockWallet::broadcasting("HASH2");
    let node = MockNode::with_tx(0, "");

    let outcome = submit_license(
        Some(&wallet),
        &node,
        &contract(),
        "t1",
        Decimal::from(10u32),
        &fast_confirm(),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        TxOutcome::Success {
            txhash: "HASH2".to_string(),
            token_id: None,
        }
    );

    // Requested 10, padded to 12, scaled to micro units.
    let msgs = wallet.last_msgs.lock().unwrap();
    assert_eq!(msgs[0].coins[0].amount, "12000000");
    assert_eq!(msgs[0].coins[0].denom, "uusd");
}

#[tokio::test]
async fn license_rejection_uses_the_same_taxonomy() {
    let wallet = MockWallet::failing(WalletError::UserDenied);
    let node = MockNode::with_tx(0, "");

    let outcome = submit_license(
        Some(&wallet),
        &node,
        &contract(),
        "t1",
        Decimal::from(10u32),
        &fast_confirm(),
    )
    .await
    .unwrap();

    assert_eq!(outcome.failure_message(), Some("User Denied"));
}
