//! Go Text Protocol (GTP) front end.
//!
//! GTP is a text-based protocol for communicating with Go-playing programs.
//! This module implements GTP version 2, allowing the engine to be used
//! with graphical Go interfaces like Sabaki, GoGui, or Lizzie.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return GTP protocol version (2)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the program
//! - `boardsize <size>` - Set board size (only 9 is supported)
//! - `clear_board` - Start a fresh game, keeping the configured komi
//! - `komi <value>` - Set komi
//! - `play <color> <vertex>` - Play a move (or "pass")
//! - `genmove <color>` - Search for a move and play it; may answer "resign"
//! - `final_score` - Report the score as B+n, W+n, or 0
//! - `showboard` - Render the current board
//!
//! All search diagnostics go to stderr so stdout stays protocol-clean.

use std::io::{self, BufRead, Write};

use crate::board::{Color, parse_coord};
use crate::constants::{DEFAULT_DEPTH, RESIGN_THRESHOLD, SIZE};
use crate::heuristic::{Heuristic, PositionalHeuristic};
use crate::search::Searcher;
use crate::state::{GameState, Move};

/// The list of known GTP commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "final_score",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// GTP engine state.
pub struct GtpEngine {
    /// Current game
    game: GameState,
    /// Search depth for generated moves
    depth: usize,
    /// Evaluator used for search and the resignation check
    heuristic: PositionalHeuristic,
}

impl Default for GtpEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GtpEngine {
    /// Create a new GTP engine with default settings.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create a new GTP engine searching to the given depth.
    pub fn with_depth(depth: usize) -> Self {
        Self {
            game: GameState::new(),
            depth,
            heuristic: PositionalHeuristic::default(),
        }
    }

    /// Run the GTP command loop, reading from stdin and writing to stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            if parts.is_empty() {
                continue;
            }

            let command = parts[0].to_lowercase();
            let args = &parts[1..];

            let (success, message) = self.execute(&command, args);

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(stdout, "{prefix}{id_str} {message}")?;
            writeln!(stdout)?;
            stdout.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    /// Execute a GTP command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "sente".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let known = KNOWN_COMMANDS.contains(&args[0].to_lowercase().as_str());
                (true, if known { "true" } else { "false" }.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<usize>() {
                    Ok(size) if size == SIZE => (true, String::new()),
                    Ok(size) => (
                        false,
                        format!("unacceptable size, only {SIZE} is supported (got {size})"),
                    ),
                    Err(_) => (false, "invalid size".to_string()),
                }
            }

            "clear_board" => {
                self.game = GameState::with_komi(self.game.komi);
                (true, String::new())
            }

            "komi" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                match args[0].parse::<f64>() {
                    Ok(komi) => {
                        self.game.komi = komi;
                        (true, String::new())
                    }
                    Err(_) => (false, "invalid komi".to_string()),
                }
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.game.current_player {
                    return (false, format!("it is not {color}'s turn"));
                }

                let vertex = args[1];
                if vertex.eq_ignore_ascii_case("pass") {
                    self.game = self.game.apply_move(Move::Pass);
                    return (true, String::new());
                }
                let Some(coord) = parse_coord(vertex) else {
                    return (false, "invalid vertex".to_string());
                };
                match self.game.check_move(coord) {
                    Ok(()) => {
                        self.game = self.game.apply_move(Move::Play(coord));
                        (true, String::new())
                    }
                    Err(err) => (false, format!("illegal move: {err}")),
                }
            }

            "genmove" => {
                if args.is_empty() {
                    return (false, "missing argument".to_string());
                }
                let Some(color) = parse_color(args[0]) else {
                    return (false, "invalid color".to_string());
                };
                if color != self.game.current_player {
                    return (false, format!("it is not {color}'s turn"));
                }
                if self.game.is_game_over {
                    return (true, "pass".to_string());
                }

                let searcher = Searcher::new(self.heuristic, self.depth, color);
                let mv = searcher.best_move(&self.game);
                let next = self.game.apply_move(mv);

                // Evaluations are White-positive; flip for a Black engine.
                let outlook = match color {
                    Color::White => self.heuristic.evaluate(&next),
                    Color::Black => -self.heuristic.evaluate(&next),
                };
                eprintln!("genmove {color}: {mv} (outlook {outlook:+.1})");

                if outlook < -RESIGN_THRESHOLD {
                    self.game = self.game.resign(color.opponent());
                    return (true, "resign".to_string());
                }

                self.game = next;
                (true, mv.to_string())
            }

            "final_score" => (true, self.game.format_result()),

            "showboard" => (true, format!("\n{}", self.game.grid)),

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

/// Parse a GTP color argument.
fn parse_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "b" | "black" => Some(Color::Black),
        "w" | "white" => Some(Color::White),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = GtpEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = GtpEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "sente");
    }

    #[test]
    fn test_protocol_version() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("protocol_version", &[]);
        assert!(success);
        assert_eq!(response, "2");
    }

    #[test]
    fn test_known_command() {
        let mut engine = GtpEngine::new();

        let (success, response) = engine.execute("known_command", &["final_score"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["unknown_cmd"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_boardsize() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("boardsize", &[&SIZE.to_string()]);
        assert!(success);

        let (success, _) = engine.execute("boardsize", &["19"]);
        assert!(!success);
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("play", &["black", "D4"]);
        assert!(success);
        assert_eq!(engine.game.grid.stone_count(Color::Black), 1);

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game.grid.stone_count(Color::Black), 0);
    }

    #[test]
    fn test_play_reports_illegal_moves() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("play", &["b", "E5"]);
        assert!(success);

        let (success, response) = engine.execute("play", &["w", "E5"]);
        assert!(!success);
        assert_eq!(response, "illegal move: point is not empty");

        let (success, response) = engine.execute("play", &["w", "Z99"]);
        assert!(!success);
        assert_eq!(response, "invalid vertex");
    }

    #[test]
    fn test_play_rejects_out_of_turn() {
        let mut engine = GtpEngine::new();

        let (success, response) = engine.execute("play", &["white", "E5"]);
        assert!(!success);
        assert_eq!(response, "it is not white's turn");
    }

    #[test]
    fn test_clear_board_keeps_komi() {
        let mut engine = GtpEngine::new();

        let (success, _) = engine.execute("komi", &["0.5"]);
        assert!(success);
        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(engine.game.komi, 0.5);
    }

    #[test]
    fn test_final_score_fresh_game() {
        let mut engine = GtpEngine::new();
        let (success, response) = engine.execute("final_score", &[]);
        assert!(success);
        assert_eq!(response, "W+7.5");
    }

    #[test]
    fn test_genmove_plays_for_side_to_move() {
        let mut engine = GtpEngine::with_depth(1);

        let (success, response) = engine.execute("genmove", &["b"]);
        assert!(success);
        assert!(!response.is_empty());
        assert_eq!(engine.game.grid.stone_count(Color::Black), 1);
        assert_eq!(engine.game.current_player, Color::White);

        let (success, response) = engine.execute("genmove", &["b"]);
        assert!(!success);
        assert_eq!(response, "it is not black's turn");
    }

    #[test]
    fn test_showboard_renders_grid() {
        let mut engine = GtpEngine::new();
        let (success, _) = engine.execute("play", &["b", "A9"]);
        assert!(success);

        let (success, response) = engine.execute("showboard", &[]);
        assert!(success);
        assert!(response.contains('X'));
    }
}
