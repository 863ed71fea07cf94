use std::sync::atomic::Ordering;

use api_client::PubCashApi;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_double_toggle_restores_flag() {
    for original in [false, true] {
        let (api, stub) = common::stub_backend().await;
        stub.maintenance.store(original, Ordering::SeqCst);

        let start = api.maintenance().await.unwrap().maintenance_mode;
        assert_eq!(start, original);

        let once = api.set_maintenance(!start).await.unwrap().maintenance_mode;
        assert_eq!(once, !original);
        assert_eq!(stub.calls("put_maintenance"), 1);

        let twice = api.set_maintenance(!once).await.unwrap().maintenance_mode;
        assert_eq!(twice, original);
        assert_eq!(stub.calls("put_maintenance"), 2);

        assert_eq!(api.maintenance().await.unwrap().maintenance_mode, original);
    }
}

#[tokio::test]
async fn test_update_without_flag_reports_requested_value() {
    let (api, stub) = common::stub_backend().await;
    stub.legacy_update.store(true, Ordering::SeqCst);

    let status = api.set_maintenance(true).await.unwrap();
    assert!(status.maintenance_mode);
    assert!(stub.maintenance.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_reading_status_sends_no_update() {
    let (api, stub) = common::stub_backend().await;

    api.maintenance().await.unwrap();
    api.maintenance().await.unwrap();

    assert_eq!(stub.calls("get_maintenance"), 2);
    assert_eq!(stub.calls("put_maintenance"), 0);
}
