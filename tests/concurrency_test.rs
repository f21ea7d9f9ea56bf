use loms::config::SystemConfig;
use loms::lifecycle::LomsSystem;
use loms::model::{OrderId, OrderItem, OrderStatus, Sku, Stock, UserId};
use loms::stock_actor::StockError;

async fn start_with(stocks: Vec<Stock>) -> LomsSystem {
    let system = LomsSystem::start(SystemConfig::default());
    system.seed(stocks).await.expect("Failed to seed stock");
    system
}

/// Competing reservations on one SKU: exactly the available units are handed out.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reserves_never_oversell() {
    let system = start_with(vec![Stock::new(1, 10, 0)]).await;

    let handles: Vec<_> = (0..25)
        .map(|_| {
            let stocks = system.stock_client.clone();
            tokio::spawn(async move { stocks.reserve(Sku(1), 1).await })
        })
        .collect();

    let mut granted = 0;
    let mut refused = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(level) => {
                assert!(level.reserved <= level.total_count);
                granted += 1;
            }
            Err(StockError::InsufficientStock { .. }) => refused += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(granted, 10);
    assert_eq!(refused, 15);
    let level = system.stock_client.get(Sku(1)).await.unwrap();
    assert_eq!(level.reserved, 10);
    assert_eq!(level.available, 0);
}

/// Concurrent creates get distinct, gap-free ids and never reserve more than exists.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_orders_get_unique_ids() {
    let system = start_with(vec![Stock::new(1, 12, 0)]).await;

    let handles: Vec<_> = (0..40)
        .map(|user| {
            let service = system.service();
            tokio::spawn(async move {
                service
                    .create_order(UserId(user), vec![OrderItem::new(1, 1)])
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=40).map(OrderId).collect::<Vec<_>>());

    let service = system.service();
    let mut awaiting = 0;
    for id in ids {
        let order = service.order_info(id).await.unwrap().unwrap();
        match order.status {
            OrderStatus::AwaitingPayment => awaiting += 1,
            OrderStatus::Failed => {}
            other => panic!("order {id} in unexpected status {other}"),
        }
    }
    assert_eq!(awaiting, 12);
    assert_eq!(service.stocks_info(Sku(1)).await.unwrap(), 0);
}

/// Many pays of one order release its items once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_pays_release_once() {
    let system = start_with(vec![Stock::new(1, 10, 0)]).await;
    let service = system.service();

    let target = service
        .create_order(UserId(1), vec![OrderItem::new(1, 4)])
        .await
        .unwrap();
    let bystander = service
        .create_order(UserId(2), vec![OrderItem::new(1, 3)])
        .await
        .unwrap();
    assert_eq!(service.stocks_info(Sku(1)).await.unwrap(), 3);

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.pay_order(target).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(
        service.order_info(target).await.unwrap().unwrap().status,
        OrderStatus::Payed
    );
    // Only the bystander's 3 units remain held
    assert_eq!(service.stocks_info(Sku(1)).await.unwrap(), 7);
    assert_eq!(
        service.order_info(bystander).await.unwrap().unwrap().status,
        OrderStatus::AwaitingPayment
    );
}

/// Racing pay and cancel: one wins, the reservation is released once.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_pay_and_cancel_race_has_one_winner() {
    let system = start_with(vec![Stock::new(1, 10, 0)]).await;
    let service = system.service();

    let id = service
        .create_order(UserId(1), vec![OrderItem::new(1, 5)])
        .await
        .unwrap();
    service
        .create_order(UserId(2), vec![OrderItem::new(1, 5)])
        .await
        .unwrap();

    let pay = {
        let service = service.clone();
        tokio::spawn(async move { service.pay_order(id).await })
    };
    let cancel = {
        let service = service.clone();
        tokio::spawn(async move { service.cancel_order(id).await })
    };
    pay.await.unwrap().unwrap();
    cancel.await.unwrap().unwrap();

    let status = service.order_info(id).await.unwrap().unwrap().status;
    assert!(
        matches!(status, OrderStatus::Payed | OrderStatus::Cancelled),
        "got {status}"
    );
    assert_eq!(service.stocks_info(Sku(1)).await.unwrap(), 5);
}

/// Work on one SKU does not stop another from being served.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_independent_skus_under_load() {
    let stocks = (1..=4).map(|sku| Stock::new(sku, 50, 0)).collect();
    let system = start_with(stocks).await;

    let handles: Vec<_> = (0..200u32)
        .map(|i| {
            let stocks = system.stock_client.clone();
            let sku = Sku(i % 4 + 1);
            tokio::spawn(async move {
                stocks.reserve(sku, 1).await.unwrap();
                stocks.release(sku, 1).await.unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    for sku in 1..=4 {
        let level = system.stock_client.get(Sku(sku)).await.unwrap();
        assert_eq!(level.reserved, 0);
        assert_eq!(level.available, 50);
    }
}
