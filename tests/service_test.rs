use chrono::Utc;
use loms::clients::{OrderClient, StockClient};
use loms::model::{Order, OrderEvent, OrderId, OrderItem, OrderStatus, Sku, Stock, UserId};
use loms::order_actor::{OrderAction, Transition};
use loms::service::{LomsError, ReservationPolicy, ReservationService};
use loms::stock_actor::StockAction;
use resource_actor::mock::{create_mock_client, MockClient};
use resource_actor::{FrameworkError, ResourceRequest};

fn order(id: u64, status: OrderStatus, items: Vec<OrderItem>) -> Order {
    let now = Utc::now();
    Order {
        id: OrderId(id),
        user_id: UserId(1),
        status,
        items,
        created_at: now,
        updated_at: now,
    }
}

/// Service logic against scripted stores.
///
/// The stock store is a `MockClient`; the order store is driven step by step so the test
/// can inspect the order the service decided to write.
#[tokio::test]
async fn test_create_order_writes_awaiting_payment_after_reserving() {
    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock.expect_get(Sku(1)).return_ok(Some(Stock::new(1, 5, 0)));
    stock_mock
        .expect_action_with(Sku(1), StockAction::Reserve(3))
        .return_ok(Stock::new(1, 5, 3));

    let (order_inner, mut order_requests) = create_mock_client::<Order>(10);
    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_inner),
        ReservationPolicy::default(),
    );

    let task = tokio::spawn(async move {
        service
            .create_order(UserId(1), vec![OrderItem::new(1, 3)])
            .await
    });

    match order_requests.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => {
            assert_eq!(params.status, OrderStatus::AwaitingPayment);
            assert_eq!(params.user_id, UserId(1));
            assert_eq!(params.items, vec![OrderItem::new(1, 3)]);
            respond_to.send(Ok(OrderId(12))).unwrap();
        }
        _ => panic!("Expected Create request"),
    }

    assert_eq!(task.await.unwrap().unwrap(), OrderId(12));
    stock_mock.verify();
}

#[tokio::test]
async fn test_missing_sku_releases_earlier_items_then_writes_failed() {
    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock.expect_get(Sku(1)).return_ok(Some(Stock::new(1, 5, 0)));
    stock_mock
        .expect_action_with(Sku(1), StockAction::Reserve(2))
        .return_ok(Stock::new(1, 5, 2));
    stock_mock.expect_get(Sku(2)).return_ok(None);
    // rollback of item 1
    stock_mock
        .expect_action_with(Sku(1), StockAction::Release(2))
        .return_ok(Stock::new(1, 5, 0));

    let (order_inner, mut order_requests) = create_mock_client::<Order>(10);
    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_inner),
        ReservationPolicy::default(),
    );

    let task = tokio::spawn(async move {
        service
            .create_order(UserId(1), vec![OrderItem::new(1, 2), OrderItem::new(2, 1)])
            .await
    });

    match order_requests.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => {
            assert_eq!(params.status, OrderStatus::Failed);
            respond_to.send(Ok(OrderId(1))).unwrap();
        }
        _ => panic!("Expected Create request"),
    }

    assert_eq!(task.await.unwrap().unwrap(), OrderId(1));
    stock_mock.verify();
}

#[tokio::test]
async fn test_dead_stock_store_is_unavailable() {
    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock
        .expect_get(Sku(1))
        .return_err(FrameworkError::ActorClosed);
    let order_mock = MockClient::<Order>::new();

    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_mock.client()),
        ReservationPolicy::default(),
    );

    let err = service
        .create_order(UserId(1), vec![OrderItem::new(1, 1)])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        LomsError::Unavailable {
            store: "stock",
            reason: "Actor closed".into()
        }
    );
    stock_mock.verify();
    order_mock.verify();
}

#[tokio::test]
async fn test_stocks_info_distinguishes_unknown_sku_from_dead_store() {
    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock.expect_get(Sku(5)).return_ok(None);
    stock_mock
        .expect_get(Sku(5))
        .return_err(FrameworkError::ActorDropped);

    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(MockClient::<Order>::new().client()),
        ReservationPolicy::default(),
    );

    assert_eq!(service.stocks_info(Sku(5)).await.unwrap(), 0);
    assert!(matches!(
        service.stocks_info(Sku(5)).await,
        Err(LomsError::Unavailable { store: "stock", .. })
    ));
    stock_mock.verify();
}

#[tokio::test]
async fn test_pay_releases_every_line() {
    let items = vec![OrderItem::new(1, 2), OrderItem::new(1, 1), OrderItem::new(3, 4)];

    let mut order_mock = MockClient::<Order>::new();
    order_mock
        .expect_action_with(OrderId(9), OrderAction::Transition(OrderEvent::Pay))
        .return_ok(Transition::Applied(order(9, OrderStatus::Payed, items)));

    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock
        .expect_action_with(Sku(1), StockAction::Release(2))
        .return_ok(Stock::new(1, 10, 1));
    stock_mock
        .expect_action_with(Sku(1), StockAction::Release(1))
        .return_ok(Stock::new(1, 10, 0));
    stock_mock
        .expect_action_with(Sku(3), StockAction::Release(4))
        .return_ok(Stock::new(3, 10, 0));

    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_mock.client()),
        ReservationPolicy::default(),
    );

    service.pay_order(OrderId(9)).await.unwrap();
    order_mock.verify();
    stock_mock.verify();
}

#[tokio::test]
async fn test_ignored_cancel_touches_no_stock() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock
        .expect_action_with(OrderId(4), OrderAction::Transition(OrderEvent::Cancel))
        .return_ok(Transition::Ignored(OrderStatus::Payed));
    order_mock
        .expect_action(OrderId(5))
        .return_err(FrameworkError::NotFound("5".into()));
    let stock_mock = MockClient::<Stock>::new();

    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_mock.client()),
        ReservationPolicy::default(),
    );

    service.cancel_order(OrderId(4)).await.unwrap();
    service.cancel_order(OrderId(5)).await.unwrap();
    order_mock.verify();
    stock_mock.verify();
}

#[tokio::test]
async fn test_release_failure_during_pay_is_reported() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock
        .expect_action_with(OrderId(2), OrderAction::Transition(OrderEvent::Pay))
        .return_ok(Transition::Applied(order(
            2,
            OrderStatus::Payed,
            vec![OrderItem::new(1, 1), OrderItem::new(2, 1)],
        )));
    let mut stock_mock = MockClient::<Stock>::new();
    stock_mock
        .expect_action_with(Sku(1), StockAction::Release(1))
        .return_err(FrameworkError::ActorDropped);

    let service = ReservationService::new(
        StockClient::new(stock_mock.client()),
        OrderClient::new(order_mock.client()),
        ReservationPolicy::default(),
    );

    // The order is already payed; the release of SKU 2 is never attempted.
    let err = service.pay_order(OrderId(2)).await.unwrap_err();
    assert!(matches!(err, LomsError::Unavailable { store: "stock", .. }));
    order_mock.verify();
    stock_mock.verify();
}
