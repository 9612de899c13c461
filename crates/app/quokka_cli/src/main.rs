// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::io::{self, BufRead, Write};

use clap::Parser;
use cli::{Cli, Commands};

mod cli;
mod logging;

/// Lines that end a `chat` session.
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

fn main() -> Result<()> {
    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<()> {
    logging::init()?;

    let args = Cli::parse();

    match &args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Ask {
            question,
            explain,
            json,
        } => {
            let question = question.join(" ");
            let format = if *json {
                AskFormat::Json
            } else if *explain {
                AskFormat::Explain
            } else {
                AskFormat::Plain
            };
            let mut stdout = io::stdout().lock();
            ask(&question, format, &mut stdout)?;
        }
        Commands::Chat => {
            let stdin = io::stdin().lock();
            let mut stdout = io::stdout().lock();
            chat(stdin, &mut stdout)?;
        }
    }

    Ok(())
}

/// How `ask` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AskFormat {
    Plain,
    /// Matched rule on its own line, then the answer.
    Explain,
    /// `{"answer": ..., "matched": {"kind": ..., "name": ...}}`
    Json,
}

fn ask(question: &str, format: AskFormat, out: &mut impl Write) -> Result<()> {
    let resolution = quokka_core::resolve_detailed(question);
    log::debug!("matched {}", resolution.matched);

    match format {
        AskFormat::Plain => writeln!(out, "{}", resolution.answer)?,
        AskFormat::Explain => {
            writeln!(out, "[{}]", resolution.matched)?;
            writeln!(out, "{}", resolution.answer)?;
        }
        AskFormat::Json => {
            serde_json::to_writer(&mut *out, &resolution)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Answers each non-blank input line until EOF or an exit word.
fn chat(input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut answered = 0usize;

    for line in input.lines() {
        let line = line?;
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if EXIT_WORDS.contains(&question.to_lowercase().as_str()) {
            break;
        }

        // The original line is resolved, not the trimmed one.
        writeln!(out, "{}\n", quokka_core::resolve(&line))?;
        out.flush()?;
        answered += 1;
    }

    log::debug!("chat session ended after {answered} answer(s)");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat_output(input: &str) -> String {
        let mut out = Vec::new();
        chat(input.as_bytes(), &mut out).expect("chat");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn ask_prints_answer() {
        let mut out = Vec::new();
        ask("thank you", AskFormat::Plain, &mut out).expect("ask");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(
            text,
            "You're welcome! I'm always here to help. Feel free to ask more questions anytime!\n"
        );
    }

    #[test]
    fn ask_explain_prefixes_matched_rule() {
        let mut out = Vec::new();
        ask("hello", AskFormat::Explain, &mut out).expect("ask");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("[phrase 'hello']\n"));
    }

    #[test]
    fn ask_json_reports_answer_and_matched_rule() {
        let mut out = Vec::new();
        ask("why learn programming", AskFormat::Json, &mut out).expect("ask");
        let json: serde_json::Value = serde_json::from_slice(&out).expect("parse JSON");

        assert_eq!(json["matched"]["kind"], "pattern");
        assert_eq!(json["matched"]["name"], "why");
        assert_eq!(
            json["answer"].as_str().expect("answer is string"),
            quokka_core::resolve("why learn programming")
        );
    }

    #[test]
    fn chat_answers_each_line_and_skips_blanks() {
        let text = chat_output("hello\n\n   \nthanks\n");
        assert_eq!(text.matches("\n\n").count(), 2);
        assert!(text.starts_with("Hello! I'm your autonomous QA assistant."));
        assert!(text.contains("You're welcome!"));
    }

    #[test]
    fn chat_stops_at_exit_word() {
        let text = chat_output("thanks\nQUIT\nhello\n");
        assert!(text.contains("You're welcome!"));
        assert!(!text.contains("Hello!"));
    }

    #[test]
    fn chat_with_empty_input_prints_nothing() {
        assert_eq!(chat_output(""), "");
    }
}
