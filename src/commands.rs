use crate::cli::{Commands, LadderArgs, PathsArgs};
use anyhow::{bail, Context, Result};
use pathladder::{
    format_ladder, format_shortest_paths, shortest_ladder, shortest_paths, Dictionary, Graph,
    VertexId,
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::error;

const SUCCESS: u8 = 0;
const FAILURE: u8 = 1;

pub(crate) fn run(command: &Commands) -> Result<ExitCode> {
    let status = match command {
        Commands::Paths(args) => run_paths(args, &mut io::stdout().lock())?,
        Commands::Ladder(args) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_ladder(args, &mut stdin.lock(), &mut stdout.lock())?
        }
    };
    Ok(ExitCode::from(status))
}

fn run_paths<W: Write>(args: &PathsArgs, out: &mut W) -> Result<u8> {
    let graph = Graph::read_text(&args.graph).context("failed to load graph")?;

    writeln!(
        out,
        "Graph loaded from {} with {} vertices.",
        args.graph.display(),
        graph.num_vertices()
    )?;

    let source = VertexId(args.source);
    let result = shortest_paths(&graph, source);

    writeln!(out)?;
    write!(out, "{}", format_shortest_paths(source, &result))?;
    out.flush()?;

    Ok(SUCCESS)
}

fn run_ladder<R: BufRead, W: Write>(
    args: &LadderArgs,
    input: &mut R,
    out: &mut W,
) -> Result<u8> {
    // An unreadable dictionary degrades to an empty one: every search reports no ladder
    let dictionary = Dictionary::load(&args.dictionary).unwrap_or_else(|err| {
        error!(%err, "could not load dictionary");
        Dictionary::new()
    });

    if args.start.is_none() || args.end.is_none() {
        writeln!(out, "Word Ladder Program")?;
        writeln!(out, "-------------------")?;
    }

    // Words typed on one line feed later prompts
    let mut pending = VecDeque::new();
    let start = match &args.start {
        Some(word) => word.clone(),
        None => prompt_word(input, out, &mut pending, "Enter start word: ")?,
    };
    let end = match &args.end {
        Some(word) => word.clone(),
        None => prompt_word(input, out, &mut pending, "Enter end word: ")?,
    };

    if start.to_lowercase() == end.to_lowercase() {
        writeln!(out, "Error: Start and end words are the same!")?;
        return Ok(FAILURE);
    }

    let ladder = shortest_ladder(&start, &end, &dictionary);
    writeln!(out, "{}", format_ladder(&ladder))?;

    Ok(SUCCESS)
}

/// Print `label` and take the next whitespace-separated word from `input`
///
/// Words left over from a line are kept in `pending` for the next call.
fn prompt_word<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    pending: &mut VecDeque<String>,
    label: &str,
) -> Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    while pending.is_empty() {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before a word was entered");
        }
        pending.extend(line.split_whitespace().map(str::to_string));
    }

    pending
        .pop_front()
        .context("input closed before a word was entered")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dictionary_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat cot cog dog dot").unwrap();
        file
    }

    fn ladder_args(dictionary: PathBuf, start: Option<&str>, end: Option<&str>) -> LadderArgs {
        LadderArgs {
            dictionary,
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    #[test]
    fn test_prompt_word_skips_blank_lines() {
        let mut input = "\n   \n  Cat dog\n".as_bytes();
        let mut out = Vec::new();
        let mut pending = VecDeque::new();

        let word = prompt_word(&mut input, &mut out, &mut pending, "Enter start word: ").unwrap();
        assert_eq!(word, "Cat");
        assert_eq!(pending, ["dog"]);
        assert_eq!(String::from_utf8(out).unwrap(), "Enter start word: ");
    }

    #[test]
    fn test_prompt_word_uses_pending_before_reading() {
        let mut input = "later\n".as_bytes();
        let mut out = Vec::new();
        let mut pending = VecDeque::from(["dog".to_string()]);

        let word = prompt_word(&mut input, &mut out, &mut pending, "> ").unwrap();
        assert_eq!(word, "dog");
        assert!(pending.is_empty());
        assert_eq!(input, b"later\n");
    }

    #[test]
    fn test_prompt_word_eof() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        assert!(prompt_word(&mut input, &mut out, &mut VecDeque::new(), "> ").is_err());
    }

    #[test]
    fn test_ladder_interactive() {
        let file = dictionary_file();
        let args = ladder_args(file.path().to_path_buf(), None, None);
        let mut input = "cat\ndog\n".as_bytes();
        let mut out = Vec::new();

        let code = run_ladder(&args, &mut input, &mut out).unwrap();
        assert_eq!(code, SUCCESS);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Word Ladder Program\n"));
        assert!(text.ends_with("Word ladder found: cat cot cog dog\n"));
    }

    #[test]
    fn test_ladder_both_words_on_one_line() {
        let file = dictionary_file();
        let args = ladder_args(file.path().to_path_buf(), None, None);
        let mut input = "cat dog\n".as_bytes();
        let mut out = Vec::new();

        let code = run_ladder(&args, &mut input, &mut out).unwrap();
        assert_eq!(code, SUCCESS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Word Ladder Program\n\
             -------------------\n\
             Enter start word: Enter end word: Word ladder found: cat cot cog dog\n"
        );
    }

    #[test]
    fn test_ladder_same_word_fails() {
        let file = dictionary_file();
        let args = ladder_args(file.path().to_path_buf(), Some("cat"), Some("CAT"));
        let mut out = Vec::new();

        let code = run_ladder(&args, &mut "".as_bytes(), &mut out).unwrap();
        assert_eq!(code, FAILURE);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: Start and end words are the same!\n"
        );
    }

    #[test]
    fn test_ladder_missing_dictionary_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let args = ladder_args(dir.path().join("missing.txt"), Some("cat"), Some("dog"));
        let mut out = Vec::new();

        let code = run_ladder(&args, &mut "".as_bytes(), &mut out).unwrap();
        assert_eq!(code, SUCCESS);
        assert_eq!(String::from_utf8(out).unwrap(), "No word ladder found.\n");
    }

    #[test]
    fn test_paths_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = PathsArgs {
            graph: dir.path().join("missing.txt"),
            source: 0,
        };
        let mut out = Vec::new();

        let err = run_paths(&args, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert_eq!(err.to_string(), "failed to load graph");
        assert!(format!("{err:#}").contains("missing.txt"));
    }

    #[test]
    fn test_paths_report_for_fixture() {
        let graph = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("graph.txt");
        let args = PathsArgs {
            graph: graph.clone(),
            source: 0,
        };
        let mut out = Vec::new();

        let code = run_paths(&args, &mut out).unwrap();
        assert_eq!(code, SUCCESS);

        let expected = format!(
            "Graph loaded from {} with 6 vertices.\n\
             \n\
             Shortest paths from vertex 0:\n\
             =====================================\n\
             To vertex 0: 0 \nTotal cost is 0\n\
             To vertex 1: 0 2 1 \nTotal cost is 2\n\
             To vertex 2: 0 2 \nTotal cost is 1\n\
             To vertex 3: 0 2 1 3 \nTotal cost is 8\n\
             To vertex 4: No path exists.\n\
             To vertex 5: No path exists.\n",
            graph.display()
        );
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
