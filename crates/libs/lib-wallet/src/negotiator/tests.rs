use super::*;
use crate::provider::ProviderError;
use crate::session::{WalletSession, WalletStatus};
use crate::testing::{MockDetector, MockProvider, TokioTimer, ADDR};
use std::cell::RefCell;
use std::time::Duration;

fn negotiator_for(detector: Rc<MockDetector>, config: WalletConfig) -> Negotiator {
    Negotiator::new(detector, Rc::new(TokioTimer), SessionStore::new(), config)
}

fn setup(provider: MockProvider) -> (Negotiator, Rc<MockProvider>, Rc<MockDetector>) {
    let provider = Rc::new(provider);
    let detector = Rc::new(MockDetector::with(Rc::clone(&provider)));
    let negotiator = negotiator_for(Rc::clone(&detector), WalletConfig::default());
    (negotiator, provider, detector)
}

fn record_statuses(store: &SessionStore) -> Rc<RefCell<Vec<WalletStatus>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |s| sink.borrow_mut().push(s.status()));
    seen
}

// ========== Happy Path ==========

#[tokio::test]
async fn test_connect_success_sets_connected() {
    let (negotiator, provider, _) = setup(MockProvider::new());
    let seen = record_statuses(negotiator.store());

    let address = negotiator.connect().await.unwrap();

    assert_eq!(address, ADDR);
    assert_eq!(negotiator.store().current(), WalletSession::Connected { address: ADDR.to_string() });
    assert_eq!(*seen.borrow(), vec![WalletStatus::Connecting, WalletStatus::Connected]);
    assert_eq!(provider.request_calls(), 1);
    assert!(!negotiator.is_negotiating());
}

#[tokio::test]
async fn test_connect_when_connected_does_not_prompt_again() {
    let (negotiator, provider, _) = setup(MockProvider::new());
    negotiator.connect().await.unwrap();
    let generation = negotiator.store().generation();
    let seen = record_statuses(negotiator.store());

    let again = negotiator.connect().await.unwrap();

    assert_eq!(again, ADDR);
    assert_eq!(provider.request_calls(), 1);
    assert_eq!(negotiator.store().generation(), generation);
    assert!(seen.borrow().is_empty());
}

// ========== Provider Detection ==========

#[tokio::test]
async fn test_missing_provider_fails_without_suspending() {
    let negotiator = negotiator_for(Rc::new(MockDetector::absent()), WalletConfig::default());

    let result = negotiator.connect().now_or_never();

    assert_eq!(result, Some(Err(ConnectError::ProviderMissing)));
    assert_eq!(
        negotiator.store().current(),
        WalletSession::Failed { error: ConnectError::ProviderMissing }
    );
}

#[tokio::test]
async fn test_provider_without_request_method_fails_without_calling_it() {
    let (negotiator, provider, detector) = setup(MockProvider::new());
    detector.set_capability(ProviderCapability { present: true, supports_request_accounts: false });

    let result = negotiator.connect().now_or_never();

    assert!(matches!(result, Some(Err(ConnectError::RequestFailed(_)))));
    assert_eq!(provider.request_calls(), 0);
}

#[tokio::test]
async fn test_late_injected_provider_is_detected_on_retry() {
    let (negotiator, provider, detector) = setup(MockProvider::new());
    detector.set_capability(ProviderCapability::missing());
    assert_eq!(negotiator.connect().await, Err(ConnectError::ProviderMissing));

    detector.set_capability(ProviderCapability::full());
    assert_eq!(negotiator.connect().await, Ok(ADDR.to_string()));
    assert_eq!(provider.request_calls(), 1);
}

// ========== Coalescing ==========

#[tokio::test]
async fn test_concurrent_connects_share_one_request() {
    let (provider, release) = MockProvider::new().gated();
    let (negotiator, provider, _) = setup(provider);

    let (first, second, _) = futures::join!(negotiator.connect(), negotiator.connect(), async {
        assert!(negotiator.is_negotiating());
        release.send(()).unwrap();
    });

    assert_eq!(first, Ok(ADDR.to_string()));
    assert_eq!(second, Ok(ADDR.to_string()));
    assert_eq!(provider.request_calls(), 1);
}

#[tokio::test]
async fn test_concurrent_connects_share_failure() {
    let rejected = ProviderError::new(Some(4001), "User rejected the request.");
    let (provider, release) = MockProvider::new().reply(Err(rejected)).gated();
    let (negotiator, provider, _) = setup(provider);

    let (first, second, _) = futures::join!(negotiator.connect(), negotiator.connect(), async {
        release.send(()).unwrap();
    });

    assert_eq!(first, Err(ConnectError::UserRejected));
    assert_eq!(second, Err(ConnectError::UserRejected));
    assert_eq!(provider.request_calls(), 1);
}

// ========== Failure Classification ==========

#[tokio::test]
async fn test_user_rejection_then_retry_succeeds() {
    let rejected = ProviderError::new(Some(4001), "User rejected the request.");
    let (negotiator, provider, _) = setup(MockProvider::new().reply(Err(rejected)));

    assert_eq!(negotiator.connect().await, Err(ConnectError::UserRejected));
    assert_eq!(
        negotiator.store().current().last_error(),
        Some(&ConnectError::UserRejected)
    );

    let seen = record_statuses(negotiator.store());
    assert_eq!(negotiator.connect().await, Ok(ADDR.to_string()));
    assert_eq!(*seen.borrow(), vec![WalletStatus::Connecting, WalletStatus::Connected]);
    assert_eq!(provider.request_calls(), 2);
}

#[tokio::test]
async fn test_provider_error_is_request_failed() {
    let internal = ProviderError::new(Some(-32603), "Internal JSON-RPC error.");
    let (negotiator, _, _) = setup(MockProvider::new().reply(Err(internal)));

    let err = negotiator.connect().await.unwrap_err();

    assert_eq!(err, ConnectError::RequestFailed("Internal JSON-RPC error. (code -32603)".to_string()));
}

#[tokio::test]
async fn test_empty_account_list_is_locked() {
    let (negotiator, _, _) = setup(MockProvider::new().reply(Ok(vec![])));

    assert_eq!(negotiator.connect().await, Err(ConnectError::Locked));
}

#[tokio::test]
async fn test_malformed_address_is_request_failed() {
    let (negotiator, _, _) = setup(MockProvider::new().address("not-an-address"));

    let err = negotiator.connect().await.unwrap_err();

    assert!(matches!(err, ConnectError::RequestFailed(msg) if msg.contains("not-an-address")));
    assert_eq!(negotiator.store().current().status(), WalletStatus::Failed);
}

#[tokio::test]
async fn test_disallowed_chain_is_wrong_network() {
    let (negotiator, _, _) = setup(MockProvider::new().chain(137));

    assert_eq!(negotiator.connect().await, Err(ConnectError::WrongNetwork { chain_id: 137 }));
}

#[tokio::test]
async fn test_chain_check_skipped_when_no_chains_configured() {
    let provider = Rc::new(MockProvider::new().chain(137));
    let detector = Rc::new(MockDetector::with(Rc::clone(&provider)));
    let config = WalletConfig { allowed_chain_ids: vec![], ..WalletConfig::default() };
    let negotiator = negotiator_for(detector, config);

    assert_eq!(negotiator.connect().await, Ok(ADDR.to_string()));
}

#[tokio::test(start_paused = true)]
async fn test_unanswered_prompt_times_out() {
    let (negotiator, _, _) = setup(MockProvider::new().hanging());

    let result = negotiator.connect().await;

    assert_eq!(result, Err(ConnectError::Timeout(Duration::from_secs(30))));
    assert_eq!(
        negotiator.store().current().last_error(),
        Some(&ConnectError::Timeout(Duration::from_secs(30)))
    );
    assert!(!negotiator.is_negotiating());
}

// ========== Stale Results ==========

#[tokio::test]
async fn test_late_success_after_reset_is_discarded() {
    let (provider, release) = MockProvider::new().gated();
    let (negotiator, _, _) = setup(provider);
    let seen = record_statuses(negotiator.store());

    let (result, _) = futures::join!(negotiator.connect(), async {
        negotiator.reset_session();
        release.send(()).unwrap();
    });

    // The caller still learns what the wallet said
    assert_eq!(result, Ok(ADDR.to_string()));
    assert_eq!(negotiator.store().current(), WalletSession::Disconnected);
    assert_eq!(*seen.borrow(), vec![WalletStatus::Connecting, WalletStatus::Disconnected]);
}

#[tokio::test]
async fn test_late_failure_after_reset_is_discarded() {
    let rejected = ProviderError::new(Some(4001), "User rejected the request.");
    let (provider, release) = MockProvider::new().reply(Err(rejected)).gated();
    let (negotiator, _, _) = setup(provider);

    let (result, _) = futures::join!(negotiator.connect(), async {
        negotiator.reset_session();
        release.send(()).unwrap();
    });

    assert_eq!(result, Err(ConnectError::UserRejected));
    assert_eq!(negotiator.store().current(), WalletSession::Disconnected);
}

#[tokio::test]
async fn test_connect_after_reset_starts_fresh_negotiation() {
    let (provider, release) = MockProvider::new().gated();
    let (negotiator, provider, _) = setup(provider);

    let (stale, fresh) = futures::join!(negotiator.connect(), async {
        negotiator.reset_session();
        let fresh = negotiator.connect().await;
        release.send(()).unwrap();
        fresh
    });

    assert_eq!(stale, Ok(ADDR.to_string()));
    assert_eq!(fresh, Ok(ADDR.to_string()));
    assert_eq!(provider.request_calls(), 2);
    assert_eq!(negotiator.store().current(), WalletSession::Connected { address: ADDR.to_string() });
}

// ========== Disconnect ==========

#[tokio::test]
async fn test_disconnect_then_connect_prompts_again() {
    let (negotiator, provider, _) = setup(MockProvider::new());
    negotiator.connect().await.unwrap();

    negotiator.disconnect();
    assert_eq!(negotiator.store().current(), WalletSession::Disconnected);

    negotiator.connect().await.unwrap();
    assert_eq!(provider.request_calls(), 2);
}
