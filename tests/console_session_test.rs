//! End-to-end tests driving a console session with scripted input.

use std::io::Cursor;
use strictly_console::{
    BANNER, Cell, Console, DRAW_MESSAGE, FAREWELL, GameSession, Mark, REPLAY_PROMPT, ROW_PROMPT,
    Seat, SessionState,
};

type ScriptedSession = GameSession<Cursor<Vec<u8>>, Vec<u8>>;

fn session(input: &str) -> ScriptedSession {
    GameSession::new(Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
    ))
}

fn transcript(session: &ScriptedSession) -> String {
    String::from_utf8_lossy(session.console().output()).into_owned()
}

fn play(input: &str) -> String {
    let mut session = session(input);
    session.run().expect("Scripted session completes");
    transcript(&session)
}

/// Steps until the session reaches a state matching `done`.
fn step_until(session: &mut ScriptedSession, done: impl Fn(SessionState) -> bool) {
    while !done(session.step().expect("Scripted input suffices")) {}
}

// X takes the top row: (0,0) X, (1,0) O, (0,1) X, (1,1) O, (0,2) X
const X_WINS_TOP_ROW: &str = "0 0\n1 0\n0 1\n1 1\n0 2\n";

// Nine moves, no line: X O X / X O O / O X X
const DRAWN_ROUND: &str = "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n";

#[test]
fn test_win_is_announced_with_board_then_replay_prompt() {
    let out = play(&format!("{X_WINS_TOP_ROW}n\n"));

    assert_eq!(out.matches("Player X wins!").count(), 1);
    assert!(!out.contains("Player O wins!"));
    assert!(!out.contains(DRAW_MESSAGE));

    let win = out.find("Player X wins!").unwrap();
    let final_row = win + out[win..].find("| X | X | X |").unwrap();
    let replay = win + out[win..].find(REPLAY_PROMPT).unwrap();
    assert!(final_row < replay);
    assert!(out[win..].contains("| O | O |   |"));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let out = play(&format!("{DRAWN_ROUND}n\n"));

    assert_eq!(out.matches(DRAW_MESSAGE).count(), 1);
    assert!(!out.contains("wins!"));
    assert!(out.contains("| O | X | X |"));
}

#[test]
fn test_non_number_is_rejected_once_then_accepted() {
    // X opens in the center, then completes the middle column.
    let out = play("abc\n1\n1\n0 0\n0 1\n2 0\n2 1\nn\n");

    assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 1);
    assert!(out.contains("Player X placed at (1,1)"));
}

#[test]
fn test_out_of_range_is_rejected_until_valid() {
    let mut session = session("5\n-1\n0\n0\n");
    assert_eq!(session.step().unwrap(), SessionState::AwaitingMove);

    let out = transcript(&session);
    assert_eq!(
        out.matches("Please enter a number between 0 and 2.").count(),
        2
    );
    assert_eq!(out.matches(ROW_PROMPT).count(), 3);
    assert!(out.contains("Player X placed at (0,0)"));
}

#[test]
fn test_invalid_replay_answer_then_uppercase_yes_starts_new_round() {
    let mut session = session(&format!("{X_WINS_TOP_ROW}invalid\nY\n"));
    step_until(&mut session, |s| s == SessionState::PromptReplay);
    assert_eq!(session.round(), 1);

    assert_eq!(session.step().unwrap(), SessionState::AwaitingMove);
    assert_eq!(session.round(), 2);

    let out = transcript(&session);
    assert_eq!(out.matches("Invalid input. Please enter 'y' or 'n': ").count(), 1);
}

#[test]
fn test_turn_toggles_only_after_successful_move() {
    let mut session = session("1 1\n1 1\nabc\n0\n0\n");
    assert_eq!(session.current_seat(), Seat::First);

    // X plays the center.
    session.step().unwrap();
    assert_eq!(session.current_seat(), Seat::Second);

    // O aims at the occupied center.
    session.step().unwrap();
    assert_eq!(session.current_seat(), Seat::Second);
    assert_eq!(session.board().get(1, 1), Cell::Occupied(Mark::X));

    // O recovers from a bad token and plays a corner.
    session.step().unwrap();
    assert_eq!(session.current_seat(), Seat::First);
    assert_eq!(session.board().get(0, 0), Cell::Occupied(Mark::O));

    let out = transcript(&session);
    assert_eq!(
        out.matches("Cell (1,1) is already occupied. Please choose an empty cell.")
            .count(),
        1
    );
    assert_eq!(out.matches("Player O, enter your move:").count(), 2);
    assert_eq!(out.matches("It's now Player O's turn.").count(), 1);
    assert_eq!(out.matches("It's now Player X's turn.").count(), 1);
}

#[test]
fn test_replay_resets_board_and_turn_after_second_player_wins() {
    // O completes the middle row on the sixth move.
    let mut session = session("0 0\n1 0\n0 1\n1 1\n2 2\n1 2\ny\n");
    step_until(&mut session, |s| matches!(s, SessionState::RoundWon(_)));
    assert_eq!(*session.state(), SessionState::RoundWon(Mark::O));
    assert_eq!(session.current_seat(), Seat::Second);

    step_until(&mut session, |s| s == SessionState::AwaitingMove);
    assert_eq!(session.round(), 2);
    assert_eq!(session.current_seat(), Seat::First);
    assert_eq!(session.current_player().mark(), Mark::X);
    assert!(session.board().cells().all(|c| c == Cell::Empty));
}

#[test]
fn test_two_rounds_then_decline() {
    let out = play(&format!("{X_WINS_TOP_ROW}y\n{DRAWN_ROUND}N\n"));

    assert_eq!(out.matches(BANNER).count(), 1);
    assert_eq!(out.matches("Player X wins!").count(), 1);
    assert_eq!(out.matches(DRAW_MESSAGE).count(), 1);
    assert_eq!(out.matches(REPLAY_PROMPT).count(), 2);
    assert!(out.trim_end().ends_with(FAREWELL));
}

#[test]
fn test_session_releases_console_on_decline() {
    let mut session = session(&format!("{X_WINS_TOP_ROW}n\n"));
    session.run().unwrap();

    assert_eq!(*session.state(), SessionState::SessionEnded);
    assert!(session.console().is_closed());
    assert_eq!(transcript(&session).matches(FAREWELL).count(), 1);
}

#[test]
fn test_input_ending_mid_round_is_an_error() {
    let mut session = session("0 0\n1\n");
    let err = session.run().unwrap_err();
    assert!(err.message.contains("Input ended"));
    assert!(!transcript(&session).contains(FAREWELL));
}

#[test]
fn test_undecodable_bytes_are_rejected_as_non_numbers() {
    let mut input = b"\xff\n".to_vec();
    input.extend_from_slice(X_WINS_TOP_ROW.as_bytes());
    input.extend_from_slice(b"n\n");

    let mut session = GameSession::new(Console::new(Cursor::new(input), Vec::new()));
    session.run().expect("Undecodable input is recovered by re-prompting");

    let out = transcript(&session);
    assert_eq!(out.matches("Invalid input. Please enter a number.").count(), 1);
    assert_eq!(out.matches("Player X wins!").count(), 1);
    assert!(out.trim_end().ends_with(FAREWELL));
}
