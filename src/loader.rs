//! Reading puzzles and solutions from their text formats.
//!
//! Two puzzle formats are understood, selected by file ending:
//! - `.xy`: one island per line as `x,y,number`; the board is as large as the largest coordinates require.
//! - `.plain`: one board row per line, a digit `1`–`8` per island and a space (or `.` or `0`) per empty cell.
//!
//! Boards are at most [`MAX_DIMENSION`] cells wide and tall.
//!
//! Solutions (`.xy.solution`) list one bridge per line as `x1,y1,x2,y2`; a bridge listed twice is a double bridge.
//! In every format, lines starting with `#` and empty lines are skipped.

use std::fs;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, info, warn};
use unordered_pair::UnorderedPair;

use crate::board::Board;
use crate::bridge::Solution;
use crate::builder::BoardBuilder;
use crate::cell::MAX_ISLAND;
use crate::error::LoadError;
use crate::location::{Coord, Dimension, Location};

const SOLUTION_ENDING: &str = ".xy.solution";

/// The widest and tallest board a puzzle file may describe.
pub const MAX_DIMENSION: usize = 1024;

/// The puzzle file formats.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PuzzleFormat {
    /// `.xy`: coordinate list.
    Xy,
    /// `.plain`: fixed-width rows.
    Plain,
}

impl PuzzleFormat {
    /// Pick the format from the file ending of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".xy") {
            Some(Self::Xy)
        } else if name.ends_with(".plain") {
            Some(Self::Plain)
        } else {
            None
        }
    }

    /// Parse `text` in this format.
    pub fn parse(&self, text: &str) -> Result<BoardBuilder, LoadError> {
        match self {
            Self::Xy => parse_xy(text),
            Self::Plain => parse_plain(text),
        }
    }
}

/// Non-comment, non-empty lines with their 1-based line numbers.
fn content_lines(text: &str) -> impl Iterator<Item=(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn malformed(line: usize, reason: impl Into<String>) -> LoadError {
    LoadError::Malformed { line, reason: reason.into() }
}

/// Parse a line of exactly `N` comma separated numbers.
fn numbers<const N: usize>(line_number: usize, line: &str) -> Result<[Coord; N], LoadError> {
    let fields = line.split(',')
        .map(|field| field.trim().parse::<Coord>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| malformed(line_number, format!("{err} in {line:?}")))?;

    <[Coord; N]>::try_from(fields)
        .map_err(|fields| malformed(line_number, format!("expected {N} numbers, found {}", fields.len())))
}

fn checked_build(builder: BoardBuilder) -> Result<BoardBuilder, LoadError> {
    match builder.is_valid() {
        None => Ok(builder),
        Some(reasons) => Err(LoadError::Invalid(reasons.clone())),
    }
}

fn within_limit(line: usize, extent: usize, what: &str) -> Result<(), LoadError> {
    if extent > MAX_DIMENSION {
        return Err(malformed(line, format!("board {what} {extent} exceeds {MAX_DIMENSION}")));
    }
    Ok(())
}

fn island_number(line: usize, number: Coord) -> Result<u8, LoadError> {
    u8::try_from(number)
        .ok()
        .filter(|n| (1..=MAX_ISLAND).contains(n))
        .ok_or_else(|| malformed(line, format!("island number {number} is not in 1..={MAX_ISLAND}")))
}

/// Parse the `x,y,number` coordinate list format.
pub fn parse_xy(text: &str) -> Result<BoardBuilder, LoadError> {
    let islands = content_lines(text)
        .map(|(line, content)| {
            let [x, y, number] = numbers::<3>(line, content)?;
            // a coordinate of MAX_DIMENSION would need one more column or row
            within_limit(line, x.saturating_add(1), "width")?;
            within_limit(line, y.saturating_add(1), "height")?;
            Ok((Location(x, y), island_number(line, number)?))
        })
        .collect::<Result<Vec<_>, LoadError>>()?;

    let max_x = islands.iter().map(|(location, _)| location.0).max().ok_or(LoadError::Empty)?;
    let max_y = islands.iter().map(|(location, _)| location.1).max().ok_or(LoadError::Empty)?;

    let mut builder = BoardBuilder::with_dims((Dimension::MIN.saturating_add(max_x), Dimension::MIN.saturating_add(max_y)));
    for (location, number) in islands {
        builder.add_island(location, number);
    }

    checked_build(builder)
}

/// Parse the fixed-width format, one board row per line.
pub fn parse_plain(text: &str) -> Result<BoardBuilder, LoadError> {
    let rows = content_lines(text)
        .map(|(line, content)| (line, content.chars().collect_vec()))
        .collect_vec();

    let (first_line, width) = rows.first().map(|(line, row)| (*line, row.len())).ok_or(LoadError::Empty)?;
    within_limit(first_line, width, "width")?;
    if let Some((line, _)) = rows.iter().find(|(_, row)| row.len() != width) {
        return Err(malformed(*line, "rows differ in length; check for trailing spaces"));
    }
    if let Some((line, _)) = rows.get(MAX_DIMENSION) {
        within_limit(*line, rows.len(), "height")?;
    }

    // rows are never empty, so neither dimension can be zero
    let dims = (Dimension::MIN.saturating_add(width - 1), Dimension::MIN.saturating_add(rows.len() - 1));
    let mut builder = BoardBuilder::with_dims(dims);
    for (y, (line, row)) in rows.iter().enumerate() {
        for (x, symbol) in row.iter().enumerate() {
            match symbol {
                ' ' | '.' | '0' => {}
                digit @ '1'..='8' => {
                    builder.add_island(Location(x, y), *digit as u8 - b'0');
                }
                other => return Err(malformed(*line, format!("unexpected character {other:?}"))),
            }
        }
    }

    checked_build(builder)
}

/// Parse the `x1,y1,x2,y2` solution format.
pub fn parse_solution(text: &str) -> Result<Solution, LoadError> {
    content_lines(text)
        .map(|(line, content)| {
            let [x1, y1, x2, y2] = numbers::<4>(line, content)?;
            Ok(UnorderedPair(Location(x1, y1), Location(x2, y2)))
        })
        .collect()
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

/// Read a puzzle file, choosing the format from its ending.
pub fn read_puzzle(path: &Path) -> Result<BoardBuilder, LoadError> {
    let format = PuzzleFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let builder = format.parse(&read(path)?)?;
    info!(path = %path.display(), ?format, "loaded puzzle");

    Ok(builder)
}

/// Read a solution file.
///
/// A solution is optional: files without the `.xy.solution` ending, unreadable files and malformed files all yield [`None`].
pub fn read_solution(path: &Path) -> Option<Solution> {
    if !path.to_string_lossy().ends_with(SOLUTION_ENDING) {
        debug!(path = %path.display(), "not a {SOLUTION_ENDING} file, ignoring");
        return None;
    }

    match read(path).and_then(|text| parse_solution(&text)) {
        Ok(solution) => {
            info!(path = %path.display(), bridges = solution.len(), "loaded solution");
            Some(solution)
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "continuing without solution");
            None
        }
    }
}

/// Load a puzzle and its optional solution into a ready [`Board`].
pub fn load_board(input: &Path, solution: Option<&Path>, undo_limit: usize) -> Result<Board, LoadError> {
    let mut builder = read_puzzle(input)?;
    if let Some(solution) = solution.and_then(read_solution) {
        builder.with_solution(solution);
    }
    builder.undo_limit(undo_limit);

    builder.build().map_err(|reasons| LoadError::Invalid(reasons.clone()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use unordered_pair::UnorderedPair;

    use crate::cell::Cell;
    use crate::error::LoadError;
    use crate::location::Location;

    use super::{load_board, parse_plain, parse_solution, parse_xy, read_solution, PuzzleFormat, MAX_DIMENSION};

    #[test]
    fn xy_sizes_board_from_largest_coordinates() {
        let board = parse_xy("# 5:5 (xy)\n0,0,1\n0,4,3\n4,4,2\n").unwrap().build().unwrap();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
        assert_eq!(board.cell(Location(0, 4)), Some(Cell::Island(3)));
        assert_eq!(board.cell(Location(4, 4)), Some(Cell::Island(2)));
        assert_eq!(board.cell(Location(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn xy_rejects_garbage() {
        assert!(matches!(parse_xy("0,0,1\n1,x,2\n"), Err(LoadError::Malformed { line: 2, .. })));
        assert!(matches!(parse_xy("0,0\n"), Err(LoadError::Malformed { line: 1, .. })));
        assert!(matches!(parse_xy("0,0,9\n"), Err(LoadError::Malformed { line: 1, .. })));
        assert!(matches!(parse_xy("# nothing here\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn xy_rejects_oversized_boards() {
        let huge = format!("0,0,1\n{},0,1\n", usize::MAX);
        assert!(matches!(parse_xy(&huge), Err(LoadError::Malformed { line: 2, .. })));

        let too_tall = format!("0,0,1\n0,{MAX_DIMENSION},1\n");
        assert!(matches!(parse_xy(&too_tall), Err(LoadError::Malformed { line: 2, .. })));

        let largest = format!("0,0,1\n{},{},1\n", MAX_DIMENSION - 1, MAX_DIMENSION - 1);
        let builder = parse_xy(&largest).unwrap();
        assert!(builder.is_valid().is_none());
    }

    #[test]
    fn plain_rejects_oversized_boards() {
        let wide = "1".repeat(MAX_DIMENSION + 1);
        assert!(matches!(parse_plain(&wide), Err(LoadError::Malformed { line: 1, .. })));

        let tall = "1\n".repeat(MAX_DIMENSION + 1);
        assert!(matches!(parse_plain(&tall), Err(LoadError::Malformed { line, .. }) if line == MAX_DIMENSION + 1));
    }

    #[test]
    fn plain_reads_rows() {
        let board = parse_plain("# 5:5 (plain)\n1    \n     \n     \n     \n3   2").unwrap().build().unwrap();

        assert_eq!(board.width(), 5);
        assert_eq!(board.height(), 5);
        assert_eq!(board.cell(Location(0, 0)), Some(Cell::Island(1)));
        assert_eq!(board.cell(Location(0, 4)), Some(Cell::Island(3)));
        assert_eq!(board.cell(Location(4, 4)), Some(Cell::Island(2)));
    }

    #[test]
    fn plain_accepts_printed_boards() {
        let text = "2..3\n....\n1..2\n";
        let board = parse_plain(text).unwrap().build().unwrap();
        assert_eq!(board.to_string(), text);
    }

    #[test]
    fn plain_reads_zero_as_water() {
        let board = parse_plain("2003\n0000\n1002\n").unwrap().build().unwrap();

        assert_eq!(board.cell(Location(1, 0)), Some(Cell::Empty));
        assert_eq!(board.cell(Location(3, 0)), Some(Cell::Island(3)));
        assert_eq!(board.cell(Location(0, 2)), Some(Cell::Island(1)));
        assert_eq!(board.islands().count(), 4);
    }

    #[test]
    fn plain_rejects_ragged_rows_and_bad_symbols() {
        assert!(matches!(parse_plain("1  \n1 \n"), Err(LoadError::Malformed { line: 2, .. })));
        assert!(matches!(parse_plain("1 9\n"), Err(LoadError::Malformed { line: 1, .. })));
        assert!(matches!(parse_plain("1 -\n"), Err(LoadError::Malformed { line: 1, .. })));
    }

    #[test]
    fn solution_reads_padded_numbers() {
        let solution = parse_solution(" 1,  2,  3,  4\n 5,  6,  7,  8\n 9, 10, 11, 12\n13, 14, 15, 16").unwrap();

        assert_eq!(solution.len(), 4);
        assert_eq!(solution.iter().nth(1), Some(&UnorderedPair(Location(5, 6), Location(7, 8))));
        assert!(parse_solution("1,2,3\n").is_err());
        assert!(parse_solution("-1,0,3,0\n").is_err());
    }

    #[test]
    fn format_follows_file_ending() {
        assert_eq!(PuzzleFormat::from_path("a/b.xy".as_ref()), Some(PuzzleFormat::Xy));
        assert_eq!(PuzzleFormat::from_path("b.plain".as_ref()), Some(PuzzleFormat::Plain));
        assert_eq!(PuzzleFormat::from_path("b.xy.solution".as_ref()), None);
        assert_eq!(PuzzleFormat::from_path("myInputFile".as_ref()), None);
    }

    #[test]
    fn loads_puzzle_and_solution_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("small.xy");
        let solution = dir.path().join("small.xy.solution");
        writeln!(std::fs::File::create(&input).unwrap(), "0,0,2\n3,0,2").unwrap();
        writeln!(std::fs::File::create(&solution).unwrap(), "0,0,3,0\n0,0,3,0").unwrap();

        let mut board = load_board(&input, Some(&solution), 7).unwrap();
        assert_eq!(board.history().capacity(), 7);
        assert_eq!(board.solution().map(|s| s.len()), Some(2));
        assert!(board.replay_solution().is_ok());
        assert!(board.is_solved());
    }

    #[test]
    fn unusable_solutions_are_absent() {
        let dir = tempfile::tempdir().unwrap();
        let wrong_ending = dir.path().join("small.txt");
        let malformed = dir.path().join("small.xy.solution");
        std::fs::write(&wrong_ending, "0,0,3,0\n").unwrap();
        std::fs::write(&malformed, "0,0,three,0\n").unwrap();

        assert_eq!(read_solution(&wrong_ending), None);
        assert_eq!(read_solution(&malformed), None);
        assert_eq!(read_solution(&dir.path().join("missing.xy.solution")), None);
    }

    #[test]
    fn missing_or_unsupported_puzzles_fail() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_board(&dir.path().join("missing.xy"), None, 5), Err(LoadError::Io { .. })));
        assert!(matches!(load_board("myInputFile".as_ref(), None, 5), Err(LoadError::UnsupportedFormat(_))));
    }
}
