//! Integration tests for the full move flow: service → engine → store.

use fourstack::prelude::*;

fn pid(id: u64) -> PlayerId {
    PlayerId(id)
}

fn col(index: u8) -> ColumnIndex {
    ColumnIndex::new(index).unwrap()
}

fn seats() -> Vec<PlayerSeat> {
    vec![
        PlayerSeat::new(pid(1), "red", PlayerStatus::HasTurn),
        PlayerSeat::new(pid(2), "yellow", PlayerStatus::WaitingTurn),
    ]
}

async fn new_service() -> (MoveService<MemoryStore>, GameId) {
    let service = MoveService::new(MemoryStore::new());
    let game_id = service.create_game(seats()).await.unwrap();
    (service, game_id)
}

// -------------------------------------------------------------------------
// create_game
// -------------------------------------------------------------------------

#[tokio::test]
async fn test_create_game_stores_seven_empty_columns() {
    let (service, game_id) = new_service().await;

    let fetched = service.store().fetch(game_id).await.unwrap();

    assert_eq!(fetched.version, 0);
    assert_eq!(fetched.record.status, GameStatus::Active);
    for column in fetched.record.state.columns() {
        assert!(column.is_empty());
    }
}

#[tokio::test]
async fn test_create_game_rejects_single_seat() {
    let service = MoveService::new(MemoryStore::new());

    let result = service
        .create_game(vec![PlayerSeat::new(pid(1), "red", PlayerStatus::HasTurn)])
        .await;

    assert!(matches!(result, Err(FourstackError::Protocol(_))));
}

#[tokio::test]
async fn test_create_game_rejects_two_turn_holders() {
    let service = MoveService::new(MemoryStore::new());

    let result = service
        .create_game(vec![
            PlayerSeat::new(pid(1), "red", PlayerStatus::HasTurn),
            PlayerSeat::new(pid(2), "yellow", PlayerStatus::HasTurn),
        ])
        .await;

    assert!(matches!(result, Err(FourstackError::Protocol(_))));
}

// -------------------------------------------------------------------------
// handle_move: happy path
// -------------------------------------------------------------------------

#[tokio::test]
async fn test_alternating_game_fourth_in_row_wins() {
    // Player 1 lays columns 0..3 along the bottom row; player 2 stacks
    // column 0. Player 1's fourth move must come back as the win event.
    let (service, game_id) = new_service().await;

    for (player, column) in [(1u64, 0u8), (2, 0), (1, 1), (2, 0), (1, 2), (2, 0)]
    {
        let outcome = service
            .handle_move(game_id, pid(player), MoveRequest { row: column })
            .await
            .unwrap();
        assert_eq!(outcome, MoveOutcome::turn_passed(col(column)));
    }

    let outcome = service
        .handle_move(game_id, pid(1), MoveRequest { row: 3 })
        .await
        .unwrap();

    assert_eq!(outcome, MoveOutcome::win(col(3), pid(1)));

    let fetched = service.store().fetch(game_id).await.unwrap();
    assert_eq!(fetched.record.status, GameStatus::Over);
    assert_eq!(fetched.record.players[0].status, PlayerStatus::Winner);
    assert_eq!(fetched.record.players[1].status, PlayerStatus::Loser);
    assert_eq!(fetched.version, 7, "one commit per accepted move");
}

#[tokio::test]
async fn test_event_feed_records_outcomes_in_order() {
    let (service, game_id) = new_service().await;

    service
        .handle_move(game_id, pid(1), MoveRequest { row: 4 })
        .await
        .unwrap();
    service
        .handle_move(game_id, pid(2), MoveRequest { row: 5 })
        .await
        .unwrap();

    let events = service.store().events(game_id).await.unwrap();
    assert_eq!(
        events,
        vec![
            MoveOutcome::turn_passed(col(4)),
            MoveOutcome::turn_passed(col(5)),
        ]
    );
}

// -------------------------------------------------------------------------
// handle_move: rule violations surface as 403 replies, state untouched
// -------------------------------------------------------------------------

#[tokio::test]
async fn test_out_of_turn_move_is_403_and_uncommitted() {
    let (service, game_id) = new_service().await;

    let err = service
        .handle_move(game_id, pid(2), MoveRequest { row: 3 })
        .await
        .unwrap_err();

    let reply = err.reply().expect("rule violations carry a reply");
    assert_eq!(reply.code, 403);
    assert_eq!(reply.data, "Not this player's turn");

    let fetched = service.store().fetch(game_id).await.unwrap();
    assert_eq!(fetched.version, 0, "nothing committed");
    assert_eq!(fetched.record.state.token_count(), 0);
}

#[tokio::test]
async fn test_full_column_move_is_403_and_uncommitted() {
    let (service, game_id) = new_service().await;

    // Six legal alternating drops fill column 2.
    for player in [1u64, 2, 1, 2, 1, 2] {
        service
            .handle_move(game_id, pid(player), MoveRequest { row: 2 })
            .await
            .unwrap();
    }
    let before = service.store().fetch(game_id).await.unwrap();

    let err = service
        .handle_move(game_id, pid(1), MoveRequest { row: 2 })
        .await
        .unwrap_err();

    let reply = err.reply().unwrap();
    assert_eq!(reply.code, 403);
    assert_eq!(reply.data, "The column 2 is full");

    let after = service.store().fetch(game_id).await.unwrap();
    assert_eq!(after, before, "rejected move commits nothing");
}

// -------------------------------------------------------------------------
// handle_move: contract and infrastructure failures are not 403s
// -------------------------------------------------------------------------

#[tokio::test]
async fn test_out_of_range_row_is_protocol_error() {
    let (service, game_id) = new_service().await;

    let err = service
        .handle_move(game_id, pid(1), MoveRequest { row: 7 })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FourstackError::Protocol(ProtocolError::ColumnOutOfRange(7))
    ));
    assert!(err.reply().is_none());
}

#[tokio::test]
async fn test_unknown_game_is_store_error() {
    let service = MoveService::new(MemoryStore::new());

    let err = service
        .handle_move(GameId(404), pid(1), MoveRequest { row: 0 })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FourstackError::Store(StoreError::NotFound(GameId(404)))
    ));
}

#[tokio::test]
async fn test_caller_outside_game_is_snapshot_error() {
    let (service, game_id) = new_service().await;

    let err = service
        .handle_move(game_id, pid(99), MoveRequest { row: 0 })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FourstackError::Snapshot(SnapshotError::UnknownPlayer(PlayerId(99)))
    ));
    assert!(err.reply().is_none(), "not masked as a rule violation");
}

#[tokio::test]
async fn test_stale_commit_after_service_move_conflicts() {
    // A second writer holding the pre-move version must be rejected by the
    // store once the service has committed.
    let (service, game_id) = new_service().await;
    let stale = service.store().fetch(game_id).await.unwrap();

    service
        .handle_move(game_id, pid(1), MoveRequest { row: 0 })
        .await
        .unwrap();

    let result = service
        .store()
        .commit(
            game_id,
            stale.version,
            stale.record.clone(),
            MoveOutcome::turn_passed(col(0)),
        )
        .await;

    assert_eq!(
        result,
        Err(StoreError::VersionConflict {
            game_id,
            expected: 0,
            actual: 1,
        })
    );
}
