use tui_snake::adapter::{
    BotStateMessage, DecodeError, BOT_STATE_MSG_LEN, FLAG_GAME_OVER, FLAG_YOU_WIN,
};
use tui_snake::core::{GameConfig, GameSession};
use tui_snake::types::{Position, BOT_MAGIC, BOT_PROTOCOL_VERSION};

#[test]
fn test_magic_leads_the_wire_bytes() {
    let (head, apple) = (Position::new(10, 7), Position::new(3, 4));
    let msg = BotStateMessage::new(20, 15, head, apple, 1, 0, false, false);
    let bytes = msg.encode();
    assert_eq!(bytes.len(), BOT_STATE_MSG_LEN);
    assert_eq!(&bytes[0..4], b"SNKB");
    assert_eq!(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]), BOT_MAGIC);
    assert_eq!(u16::from_be_bytes([bytes[4], bytes[5]]), BOT_PROTOCOL_VERSION);
}

#[test]
fn test_fields_are_big_endian_at_fixed_offsets() {
    let (head, apple) = (Position::new(-1, 258), Position::new(3, 4));
    let msg = BotStateMessage::new(20, 15, head, apple, 7, 65536, true, true);
    let bytes = msg.encode();

    assert_eq!(&bytes[6..8], &(FLAG_GAME_OVER | FLAG_YOU_WIN).to_be_bytes());
    assert_eq!(&bytes[8..12], &20i32.to_be_bytes());
    assert_eq!(&bytes[12..16], &15i32.to_be_bytes());
    assert_eq!(&bytes[16..20], &[0xff, 0xff, 0xff, 0xff]);
    assert_eq!(&bytes[20..24], &[0, 0, 1, 2]);
    assert_eq!(&bytes[32..36], &7i32.to_be_bytes());
    assert_eq!(&bytes[36..40], &[0, 1, 0, 0]);
}

#[test]
fn test_decode_recovers_every_field() {
    let (head, apple) = (Position::new(8, 0), Position::new(1, 3));
    let msg = BotStateMessage::new(9, 4, head, apple, 12, 11, true, false);
    let back = BotStateMessage::decode(&msg.encode()).unwrap();
    assert_eq!(back, msg);
    assert!(back.game_over());
    assert!(!back.you_win());
    assert_eq!(back.head(), Position::new(8, 0));
    assert_eq!(back.apple(), Position::new(1, 3));
}

#[test]
fn test_decode_rejects_bad_input() {
    let (head, apple) = (Position::new(0, 0), Position::new(1, 1));
    let msg = BotStateMessage::new(5, 5, head, apple, 1, 0, false, false);
    let mut bytes = msg.encode();

    assert_eq!(BotStateMessage::decode(&bytes[..39]), Err(DecodeError::Length(39)));

    bytes[0] = 0;
    assert!(matches!(BotStateMessage::decode(&bytes), Err(DecodeError::Magic(_))));
}

#[test]
fn test_message_mirrors_session_view() {
    let mut game = GameSession::new(GameConfig::default()).unwrap();
    game.tick();
    let view = game.bot_view();
    let msg = BotStateMessage::from(&view);

    assert_eq!(msg.magic, BOT_MAGIC);
    assert_eq!(msg.grid_w, 20);
    assert_eq!(msg.grid_h, 15);
    assert_eq!(msg.head(), game.sim().head());
    assert_eq!(msg.apple(), game.apple());
    assert_eq!(msg.snake_len, game.sim().len() as i32);
    assert_eq!(msg.score, game.score() as i32);
    assert_eq!(msg.flags, 0);
}
