//! Line-oriented validation session.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use moveguard_core::{Move, MoveKind, MoveValidator, Position, Rejection};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::ProtoError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Append the rejection code to `illegal` replies.
    pub reasons: bool,
    /// Refuse positions with a wrong king count or pawns on a back rank.
    pub strict: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reasons: true,
            strict: false,
        }
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A validation session: the live position plus its configuration.
///
/// Reads one command per line and writes replies to the output stream.
/// Logs go through `tracing`, never to the reply stream.
#[derive(Debug, Default)]
pub struct Session {
    validator: MoveValidator,
    config: SessionConfig,
}

impl Session {
    /// Create a session on the starting position.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            validator: MoveValidator::default(),
            config,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn position(&self) -> &Position {
        self.validator.position()
    }

    /// Process stdin until `quit` or end of input, replying on stdout.
    pub fn run_stdio(&mut self) -> Result<(), ProtoError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Process `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ProtoError> {
        for line in input.lines() {
            if self.handle_line(&line?, &mut output)? == Flow::Quit {
                break;
            }
        }
        info!("moveguard shutting down");
        Ok(())
    }

    /// Handle one input line.
    ///
    /// Command errors are answered with an `error` reply and do not end the
    /// session; only output failures are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow, ProtoError> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Flow::Continue);
        }
        debug!(cmd = %trimmed, "received command");

        match parse_command(trimmed).and_then(|cmd| self.execute(cmd, out)) {
            Ok(flow) => Ok(flow),
            Err(e @ ProtoError::Io { .. }) => Err(e),
            Err(e) => {
                warn!(error = %e, "command error");
                writeln!(out, "error {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, ProtoError> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame => self.validator.update(Position::starting_position()),
            Command::Position(position) => self.handle_position(position)?,
            Command::Check(mv) => {
                let verdict = self.validator.check(&mv);
                self.reply_verdict(verdict, out)?;
            }
            Command::Play(mv) => self.handle_play(&mv, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Display => {
                let position = self.validator.position();
                writeln!(out, "{}", position.pretty())?;
                writeln!(out, "Fen: {position}")?;
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(_) => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_position(&mut self, position: Position) -> Result<(), ProtoError> {
        if self.config.strict {
            position.validate()?;
        }
        self.validator.update(position);
        Ok(())
    }

    fn handle_play<W: Write>(&mut self, text: &str, out: &mut W) -> Result<(), ProtoError> {
        let verdict = self.validator.check(text);
        if verdict.is_ok()
            && let Ok(mv) = Move::parse(text)
        {
            let next = self.validator.position().make_move(mv);
            self.validator.update(next);
        }
        self.reply_verdict(verdict, out)
    }

    fn handle_setoption(&mut self, option: SessionOption) {
        match option {
            SessionOption::Reasons(on) => self.config.reasons = on,
            SessionOption::Strict(on) => self.config.strict = on,
        }
        debug!(config = ?self.config, "session option changed");
    }

    fn reply_verdict<W: Write>(
        &self,
        verdict: Result<MoveKind, Rejection>,
        out: &mut W,
    ) -> Result<(), ProtoError> {
        match verdict {
            Ok(kind) => writeln!(out, "legal {kind}")?,
            Err(reason) if self.config.reasons => writeln!(out, "illegal {}", reason.code())?,
            Err(_) => writeln!(out, "illegal")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use moveguard_core::Color;

    use super::*;

    /// Feed `script` to a fresh session and return its replies.
    fn replies(session: &mut Session, script: &str) -> Vec<String> {
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn isready_and_check() {
        let mut session = Session::default();
        let out = replies(&mut session, "isready\ncheck e2e4\ncheck e7e5\n");
        assert_eq!(out, ["readyok", "legal normal", "illegal wrong-turn"]);
    }

    #[test]
    fn check_does_not_advance() {
        let mut session = Session::default();
        replies(&mut session, "check e2e4\n");
        assert_eq!(*session.position(), Position::starting_position());
    }

    #[test]
    fn play_advances_on_legal_move_only() {
        let mut session = Session::default();
        let out = replies(&mut session, "play e2e5\nplay e2e4\nplay e7e5\ncheck g1f3\n");
        assert_eq!(
            out,
            ["illegal invalid-geometry", "legal normal", "legal normal", "legal normal"]
        );
    }

    #[test]
    fn reasons_option_hides_codes() {
        let mut session = Session::default();
        let out = replies(&mut session, "setoption name Reasons value false\ncheck a1a8\n");
        assert_eq!(out, ["illegal"]);
        assert!(!session.config().reasons);
    }

    #[test]
    fn castling_and_promotion_kinds() {
        let mut session = Session::default();
        let script = "position fen r3k2r/3P4/8/8/8/8/8/R3K2R w KQkq - 0 1\n\
                      check e1g1\ncheck e1c1\ncheck d7d8\ncheck d7d8n\n";
        let out = replies(&mut session, script);
        assert_eq!(
            out,
            [
                "legal castling kingside",
                "legal castling queenside",
                "illegal promotion-mismatch",
                "legal promotion n",
            ]
        );
    }

    #[test]
    fn strict_mode_rejects_kingless_position() {
        let mut session = Session::default();
        let out = replies(
            &mut session,
            "position fen 8/8/8/8/8/8/4P3/4K3 w - - 0 1\n\
             setoption name Strict value true\n\
             position fen 8/8/8/8/8/8/4P3/4K3 w - - 0 1\n",
        );
        assert_eq!(out.len(), 1);
        assert!(out[0].starts_with("error rejected position"), "{}", out[0]);
        // The lenient load above is still live.
        assert_eq!(session.position().king_squares(Color::Black).count(), 0);
    }

    #[test]
    fn errors_do_not_end_session() {
        let mut session = Session::default();
        let out = replies(&mut session, "position fen nonsense\nfoo bar\nisready\n");
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with("error invalid FEN"));
        assert_eq!(out[1], "readyok");
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = Session::default();
        let out = replies(&mut session, "quit\nisready\n");
        assert!(out.is_empty());
    }

    #[test]
    fn newgame_resets() {
        let mut session = Session::default();
        let out = replies(&mut session, "play e2e4\nnewgame\ncheck e2e4\n");
        assert_eq!(out, ["legal normal", "legal normal"]);
    }

    #[test]
    fn display_prints_board_and_fen() {
        let mut session = Session::default();
        let out = replies(&mut session, "d\n");
        assert!(out.iter().any(|l| l.starts_with("8 ")));
        assert_eq!(
            out.last().map(String::as_str),
            Some("Fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
        );
    }
}
