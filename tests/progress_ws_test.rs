//! Fan-out tests for the progress push: every socket of the saving user
//! gets the update, nobody else's does.

use tokio::sync::mpsc;

use vslkit::handlers::progress_ws::{new_connection_map, notify_progress};
use vslkit::vsl::progress::ProgressSummary;

#[tokio::test]
async fn notify_reaches_all_sockets_of_one_user() {
    let map = new_connection_map();
    let (tx_a, mut rx_a) = mpsc::unbounded_channel();
    let (tx_b, mut rx_b) = mpsc::unbounded_channel();
    let (tx_other, mut rx_other) = mpsc::unbounded_channel();
    {
        let mut writer = map.write().unwrap();
        writer.entry(1).or_default().push(tx_a);
        writer.entry(1).or_default().push(tx_b);
        writer.entry(2).or_default().push(tx_other);
    }

    notify_progress(&map, 1, 7, ProgressSummary::from_saved(3));

    let msg = rx_a.try_recv().expect("first socket got nothing");
    let update: serde_json::Value = serde_json::from_str(&msg).unwrap();
    assert_eq!(update["type"], "progress_update");
    assert_eq!(update["project_id"], 7);
    assert_eq!(update["saved_slides"], 3);
    assert_eq!(update["total_slides"], 30);
    assert_eq!(update["progress"], 10);

    assert_eq!(rx_b.try_recv().expect("second socket got nothing"), msg);
    assert!(rx_other.try_recv().is_err(), "other user's socket got the update");
}

#[tokio::test]
async fn notify_without_connections_is_a_no_op() {
    let map = new_connection_map();
    // No sockets registered for user 5
    notify_progress(&map, 5, 1, ProgressSummary::from_saved(1));
    assert!(map.read().unwrap().is_empty());
}

#[tokio::test]
async fn closed_sockets_do_not_block_the_rest() {
    let map = new_connection_map();
    let (tx_dead, rx_dead) = mpsc::unbounded_channel();
    let (tx_live, mut rx_live) = mpsc::unbounded_channel();
    drop(rx_dead);
    {
        let mut writer = map.write().unwrap();
        writer.entry(1).or_default().push(tx_dead);
        writer.entry(1).or_default().push(tx_live);
    }

    notify_progress(&map, 1, 3, ProgressSummary::from_saved(15));

    let msg = rx_live.try_recv().expect("live socket got nothing");
    let update: serde_json::Value = serde_json::from_str(&msg).unwrap();
    assert_eq!(update["progress"], 50);
}
