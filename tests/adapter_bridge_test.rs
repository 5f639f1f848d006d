use std::io::{Read, Write};
use std::net::TcpStream;
use std::thread;
use std::time::{Duration, Instant};

use tui_snake::adapter::{BotBridge, BotStateMessage, BridgeConfig, BridgeState, BOT_STATE_MSG_LEN};
use tui_snake::core::{GameConfig, GameSession};
use tui_snake::types::{Direction, BOT_MAGIC};

const DEADLINE: Duration = Duration::from_secs(2);

fn listening_bridge() -> BotBridge {
    let bridge = BotBridge::new(&BridgeConfig::enabled(0)).unwrap();
    assert_eq!(bridge.state(), BridgeState::Listening);
    bridge
}

fn connect(bridge: &BotBridge) -> TcpStream {
    let client = TcpStream::connect(bridge.local_addr().unwrap()).unwrap();
    client.set_read_timeout(Some(DEADLINE)).unwrap();
    client
}

/// Poll until `done` holds or the deadline passes.
fn poll_until(bridge: &mut BotBridge, mut done: impl FnMut(&mut BotBridge) -> bool) -> bool {
    let start = Instant::now();
    while start.elapsed() < DEADLINE {
        if done(bridge) {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    false
}

fn accept(bridge: &mut BotBridge) {
    assert!(
        poll_until(bridge, |b| {
            b.poll_accept();
            b.is_connected()
        }),
        "client was never accepted"
    );
}

fn read_state(client: &mut TcpStream) -> BotStateMessage {
    let mut buf = [0u8; BOT_STATE_MSG_LEN];
    client.read_exact(&mut buf).unwrap();
    BotStateMessage::decode(&buf).unwrap()
}

#[test]
fn test_client_receives_state_after_tick() {
    let mut bridge = listening_bridge();
    let mut client = connect(&bridge);
    accept(&mut bridge);

    let mut game = GameSession::new(GameConfig::default()).unwrap();
    game.tick();
    bridge.send_state(&game.bot_view());
    assert_eq!(bridge.messages_sent(), 1);

    let msg = read_state(&mut client);
    assert_eq!(msg.magic, BOT_MAGIC);
    assert_eq!(msg.head(), game.sim().head());
    assert_eq!(msg.apple(), game.apple());
}

#[test]
fn test_direction_byte_reaches_session() {
    let mut bridge = listening_bridge();
    let mut client = connect(&bridge);
    accept(&mut bridge);

    let mut game = GameSession::new(GameConfig::default()).unwrap();
    client.write_all(&[Direction::Up.to_wire()]).unwrap();

    assert!(poll_until(&mut bridge, |b| b.drain_dirs(|d| game.queue_dir(d)) > 0));
    assert_eq!(game.sim().queued_turns(), &[Direction::Up]);

    game.tick();
    assert_eq!(game.sim().direction(), Direction::Up);
}

#[test]
fn test_invalid_byte_is_ignored() {
    let mut bridge = listening_bridge();
    let mut client = connect(&bridge);
    accept(&mut bridge);

    client.write_all(&[7, 200, Direction::Left.to_wire()]).unwrap();

    let mut got = Vec::new();
    assert!(poll_until(&mut bridge, |b| {
        b.drain_dirs(|d| got.push(d));
        !got.is_empty()
    }));
    assert_eq!(got, vec![Direction::Left]);
    assert_eq!(bridge.state(), BridgeState::Connected);
}

#[test]
fn test_only_invalid_bytes_keep_connection() {
    let mut bridge = listening_bridge();
    let mut client = connect(&bridge);
    accept(&mut bridge);

    client.write_all(&[7]).unwrap();
    thread::sleep(Duration::from_millis(50));

    for _ in 0..5 {
        assert_eq!(bridge.try_recv_dir(), None);
    }
    assert_eq!(bridge.state(), BridgeState::Connected);
}

#[test]
fn test_disconnect_returns_to_listening() {
    let mut bridge = listening_bridge();
    let client = connect(&bridge);
    accept(&mut bridge);
    let port = bridge.port();

    drop(client);
    assert!(poll_until(&mut bridge, |b| {
        b.try_recv_dir();
        b.state() == BridgeState::Listening
    }));
    assert_eq!(bridge.port(), port);

    // A new client can take over.
    let _again = connect(&bridge);
    accept(&mut bridge);
}

#[test]
fn test_second_client_waits_for_first() {
    let mut bridge = listening_bridge();
    let first = connect(&bridge);
    accept(&mut bridge);
    assert_eq!(bridge.peer_addr(), Some(first.local_addr().unwrap()));

    let mut second = connect(&bridge);
    for _ in 0..20 {
        bridge.poll_accept();
    }
    assert_eq!(bridge.peer_addr(), Some(first.local_addr().unwrap()));

    drop(first);
    assert!(poll_until(&mut bridge, |b| {
        b.try_recv_dir();
        b.state() == BridgeState::Listening
    }));

    accept(&mut bridge);
    assert_eq!(bridge.peer_addr(), Some(second.local_addr().unwrap()));

    let game = GameSession::new(GameConfig::default()).unwrap();
    bridge.send_state(&game.bot_view());
    assert_eq!(read_state(&mut second).score, 0);
}

#[test]
fn test_no_client_means_no_transport_action() {
    let mut bridge = listening_bridge();
    let game = GameSession::new(GameConfig::default()).unwrap();

    let start = Instant::now();
    for _ in 0..1000 {
        bridge.poll_accept();
        assert_eq!(bridge.try_recv_dir(), None);
        bridge.send_state(&game.bot_view());
    }
    assert!(start.elapsed() < DEADLINE);
    assert_eq!(bridge.messages_sent(), 0);
    assert_eq!(bridge.state(), BridgeState::Listening);
}

#[test]
fn test_slow_client_never_stalls_sender() {
    let mut bridge = listening_bridge();
    // Connected but never reads: the socket buffers eventually fill up.
    let _client = connect(&bridge);
    accept(&mut bridge);

    let game = GameSession::new(GameConfig::default()).unwrap();
    let calls: u64 = 200_000;
    let start = Instant::now();
    for _ in 0..calls {
        bridge.send_state(&game.bot_view());
    }

    assert!(start.elapsed() < Duration::from_secs(10));
    assert_eq!(bridge.state(), BridgeState::Connected);
    assert!(bridge.messages_sent() > 0);
    assert!(bridge.messages_sent() < calls);
}

#[test]
fn test_wire_log_records_sent_states() {
    let path = std::env::temp_dir().join(format!("snake-bridge-wire-{}.jsonl", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut cfg = BridgeConfig::enabled(0);
    cfg.log_path = Some(path.to_string_lossy().into_owned());
    let mut bridge = BotBridge::new(&cfg).unwrap();
    let mut client = connect(&bridge);
    accept(&mut bridge);

    let mut game = GameSession::new(GameConfig::default()).unwrap();
    for _ in 0..3 {
        game.tick();
        bridge.send_state(&game.bot_view());
        read_state(&mut client);
    }
    bridge.shutdown();

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["seq"], 3);
    assert_eq!(records[2]["head_x"], game.sim().head().x);
    let _ = std::fs::remove_file(&path);
}
