use std::sync::Arc;

use hashbrown::HashSet;

use dfs_lineup::{
    contest::player_pool::{ContestPlayer, ContestResultPlayer},
    error::{ContestPlayerError, PlayerError},
    player::Player,
    types::{Position, PositionSet},
};

fn point_guard() -> PositionSet {
    [Position::PointGuard].into_iter().collect()
}

#[test]
fn blank_player_fields_are_rejected() {
    assert_eq!(Player::new("", "Jae"), Err(PlayerError::BlankId));
    assert_eq!(Player::new("1", ""), Err(PlayerError::BlankName));
    assert_eq!(Player::new("", ""), Err(PlayerError::BlankId));
}

#[test]
fn valid_player_keeps_its_fields() {
    let player = Player::new("1", "jae").unwrap();
    assert_eq!(player.id(), "1");
    assert_eq!(player.name(), "jae");
    assert_eq!(player.to_string(), "jae");
}

#[test]
fn player_identity_ignores_name() {
    let a = Player::new("5", "some guard").unwrap();
    let b = Player::new("5", "some forward").unwrap();
    let c = Player::new("6", "some guard").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<Player> = [a, b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn contest_player_rejects_blank_game_and_empty_positions() {
    let player = Arc::new(Player::new("1", "jae").unwrap());

    assert_eq!(
        ContestPlayer::new(player.clone(), point_guard(), "", 0),
        Err(ContestPlayerError::BlankGameId)
    );
    assert_eq!(
        ContestPlayer::new(player.clone(), PositionSet::new(), "1", 0),
        Err(ContestPlayerError::EmptyPositionSet)
    );
    assert_eq!(
        ContestPlayer::new(player, PositionSet::new(), "", 0),
        Err(ContestPlayerError::BlankGameId)
    );
}

#[test]
fn contest_player_shares_the_core_player() {
    let player = Arc::new(Player::new("1", "jae").unwrap());
    let entry = ContestPlayer::new(player.clone(), point_guard(), "foo", 0).unwrap();

    assert!(Arc::ptr_eq(entry.shared_player(), &player));
    assert_eq!(entry.game_id(), "foo");
    assert_eq!(entry.salary(), 0);
    assert_eq!(entry.positions(), &point_guard());
}

#[test]
fn deserializing_an_invalid_contest_player_fails() {
    let blank_name = r#"{"player":{"id":"1","name":""},"positions":["POINT GUARD"],"game_id":"g1","salary":100}"#;
    assert!(serde_json::from_str::<ContestPlayer>(blank_name).is_err());

    let no_positions = r#"{"player":{"id":"1","name":"jae"},"positions":[],"game_id":"g1","salary":100}"#;
    assert!(serde_json::from_str::<ContestPlayer>(no_positions).is_err());

    let ok = r#"{"player":{"id":"1","name":"jae"},"positions":["POINT GUARD","SHOOTING GUARD"],"game_id":"g1","salary":100}"#;
    let entry: ContestPlayer = serde_json::from_str(ok).unwrap();
    assert_eq!(entry.positions().len(), 2);
}

#[test]
fn result_player_carries_points() {
    let entry = ContestPlayer::from_parts("1", "jae", point_guard(), "g1", 5_000).unwrap();
    let result = ContestResultPlayer::new(entry.clone(), 42.5);

    assert_eq!(result.contest_player, entry);
    assert_eq!(result.points, 42.5);
}
