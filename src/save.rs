//! Plain-text move history files.
//!
//! One line per move: `playerName,row,col,value,timestamp`. No header and
//! no escaping, so a name may itself contain commas; the reader splits
//! the four trailing fields off from the right. Names with line breaks
//! are refused before anything is written.

use crate::games::fifteen::{Digit, Mark, Move, Position};
use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Save file error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Save error: {} at {}:{}", message, file, line)]
pub struct SaveError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SaveError {
    /// Creates a new save error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for SaveError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Formats a move as one save-file line (without the newline).
pub fn format_move(mov: &Move) -> String {
    format!(
        "{},{},{},{},{}",
        mov.player(),
        mov.position().row(),
        mov.position().col(),
        mov.value(),
        mov.timestamp().to_rfc3339()
    )
}

/// Parses one save-file line. The line carries no mark, so the caller
/// supplies it.
#[instrument]
pub fn parse_line(line: &str, mark: Mark) -> Result<Move, SaveError> {
    let mut fields = line.rsplitn(5, ',');
    let (Some(timestamp), Some(value), Some(col), Some(row), Some(player)) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(SaveError::new(format!("Expected 5 fields in '{}'", line)));
    };

    let number = |field: &str, what: &str| {
        field
            .trim()
            .parse::<u8>()
            .map_err(|e| SaveError::new(format!("Bad {} '{}': {}", what, field, e)))
    };

    let row = number(row, "row")?;
    let col = number(col, "column")?;
    let position = Position::new(usize::from(row), usize::from(col))
        .ok_or_else(|| SaveError::new(format!("Cell ({}, {}) is off the grid", row, col)))?;
    let value = Digit::new(number(value, "value")?).map_err(|e| SaveError::new(e.to_string()))?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp.trim())
        .map_err(|e| SaveError::new(format!("Bad timestamp '{}': {}", timestamp, e)))?
        .with_timezone(&Utc);

    Ok(Move::at(player, mark, position, value, timestamp))
}

/// Writes the moves to `path`, replacing any existing file.
#[instrument(skip(path, moves), fields(path = %path.as_ref().display(), count = moves.len()))]
pub fn write_history(path: impl AsRef<Path>, moves: &[Move]) -> Result<(), SaveError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(SaveError::new("No file path given"));
    }
    if path.is_dir() {
        return Err(SaveError::new(format!("{} is a directory", path.display())));
    }
    if let Some(mov) = moves.iter().find(|m| m.player().contains(['\n', '\r'])) {
        return Err(SaveError::new(format!(
            "Player name {:?} contains a line break",
            mov.player()
        )));
    }

    let file = fs::File::create(path).map_err(|e| {
        SaveError::new(format!("Cannot create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    for mov in moves {
        writeln!(writer, "{}", format_move(mov))?;
    }
    writer.flush()?;

    info!("Move history saved");
    Ok(())
}

/// Reads a save file. Marks alternate starting with `first_mover`.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_history(path: impl AsRef<Path>, first_mover: Mark) -> Result<Vec<Move>, SaveError> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        SaveError::new(format!("Cannot read {}: {}", path.as_ref().display(), e))
    })?;

    let mut mark = first_mover;
    let mut moves = Vec::new();
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        moves.push(parse_line(line, mark)?);
        mark = mark.opponent();
    }

    debug!(count = moves.len(), "Move history loaded");
    Ok(moves)
}
