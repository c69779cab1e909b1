//! # Interactive Session
//!
//! `kudos session` keeps one page open: the comment input survives between
//! lines and notices expire on the real clock, exactly as in a browser tab.
//!
//! One click per line:
//!
//! | Line | Click |
//! |------|-------|
//! | `type <text>` | replace the comment input with `<text>` |
//! | `like`, `dislike` | vote |
//! | `submit` | submit the input as a comment |
//! | `clear` | clear the input |
//! | `reset` | reset vote and comments |
//! | `show` | redraw without clicking |
//! | `help` | list these commands |
//! | `quit` | leave (end of input works too) |

use super::render::Renderer;
use kudosapp::api::KudosApi;
use kudosapp::clock::Clock;
use kudosapp::error::Result;
use kudosapp::store::CookieJar;
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "kudos> ";

const HELP: &str = "\
type <text>   set the comment input
like          vote like
dislike       vote dislike
submit        submit the comment input
clear         clear the comment input
reset         reset vote and comments
show          redraw the widget
quit          leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionLine {
    Type(String),
    Like,
    Dislike,
    Submit,
    Clear,
    Reset,
    Show,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl SessionLine {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches('\r');
        let trimmed = line.trim_start();
        // Text after `type ` is kept verbatim, including surrounding spaces.
        if let Some(text) = trimmed.strip_prefix("type ") {
            return SessionLine::Type(text.to_string());
        }
        match trimmed.trim_end() {
            "" => SessionLine::Blank,
            "type" => SessionLine::Type(String::new()),
            "like" => SessionLine::Like,
            "dislike" => SessionLine::Dislike,
            "submit" => SessionLine::Submit,
            "clear" => SessionLine::Clear,
            "reset" => SessionLine::Reset,
            "show" => SessionLine::Show,
            "help" | "?" => SessionLine::Help,
            "quit" | "exit" => SessionLine::Quit,
            other => SessionLine::Unknown(other.to_string()),
        }
    }
}

pub fn run<J, C, R, W>(
    api: &mut KudosApi<J, C>,
    renderer: &Renderer,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    J: CookieJar,
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}\n", renderer.view(&api.render())?)?;
    show_prompt(out, prompt)?;

    for line in input.lines() {
        let line = line?;
        let parsed = SessionLine::parse(&line);
        debug!(line = ?parsed, "session input");

        let result = match parsed {
            SessionLine::Type(text) => {
                api.set_input(text);
                None
            }
            SessionLine::Like => Some(api.like()),
            SessionLine::Dislike => Some(api.dislike()),
            SessionLine::Submit => Some(api.submit_comment()),
            SessionLine::Clear => Some(api.clear_input()),
            SessionLine::Reset => Some(api.reset()),
            SessionLine::Show => {
                writeln!(out, "{}\n", renderer.view(&api.render())?)?;
                None
            }
            SessionLine::Help => {
                writeln!(out, "{}\n", HELP)?;
                None
            }
            SessionLine::Quit => break,
            SessionLine::Blank => None,
            SessionLine::Unknown(word) => {
                writeln!(out, "Unknown command: {} (try help)\n", word)?;
                None
            }
        };

        if let Some(result) = result {
            writeln!(out, "{}\n", renderer.click(&result, &api.render())?)?;
        }
        show_prompt(out, prompt)?;
    }
    Ok(())
}

/// The prompt goes out before the read it asks for.
fn show_prompt<W: Write>(out: &mut W, prompt: bool) -> Result<()> {
    if prompt {
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::setup::OutputMode;
    use chrono::Duration;
    use kudosapp::clock::ManualClock;
    use kudosapp::config::KudosConfig;
    use kudosapp::store::memory::MemoryJar;

    type TestApi = KudosApi<MemoryJar<ManualClock>, ManualClock>;

    fn api() -> (ManualClock, TestApi) {
        let clock = ManualClock::new();
        let mut api = KudosApi::new(
            MemoryJar::new(clock.clone()),
            clock.clone(),
            &KudosConfig::default(),
        );
        api.init();
        (clock, api)
    }

    fn drive(api: &mut TestApi, script: &str) -> String {
        let renderer = Renderer::new(OutputMode::Plain, false).unwrap();
        let mut out = Vec::new();
        run(api, &renderer, script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prompt_precedes_each_read() {
        let (_clock, mut api) = api();
        let renderer = Renderer::new(OutputMode::Plain, false).unwrap();
        let mut out = Vec::new();
        run(&mut api, &renderer, "like\nquit\n".as_bytes(), &mut out, true).unwrap();
        let out = String::from_utf8(out).unwrap();

        // One prompt before `like`, one before `quit`, none after it.
        assert_eq!(out.matches(PROMPT).count(), 2);
        let first = out.find(PROMPT).unwrap();
        let thanks = out.find("Thanks for your like!").unwrap();
        assert!(first < thanks);
        assert!(out.ends_with(PROMPT));
    }

    #[test]
    fn parse_lines() {
        assert_eq!(SessionLine::parse("like"), SessionLine::Like);
        assert_eq!(SessionLine::parse("  reset  "), SessionLine::Reset);
        assert_eq!(SessionLine::parse("exit\r"), SessionLine::Quit);
        assert_eq!(SessionLine::parse(""), SessionLine::Blank);
        assert_eq!(
            SessionLine::parse("type nice job"),
            SessionLine::Type("nice job".into())
        );
        assert_eq!(SessionLine::parse("type"), SessionLine::Type(String::new()));
        assert_eq!(
            SessionLine::parse("type    "),
            SessionLine::Type("   ".into())
        );
        assert_eq!(
            SessionLine::parse("dance"),
            SessionLine::Unknown("dance".into())
        );
    }

    #[test]
    fn input_survives_between_lines() {
        let (_clock, mut api) = api();
        let out = drive(&mut api, "type nice job\nsubmit\n");
        assert!(out.contains("Comment submitted!"));
        assert!(out.contains("  - nice job"));
        assert_eq!(api.input(), "");
        assert_eq!(api.render().comments, vec!["nice job"]);
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let (_clock, mut api) = api();
        let out = drive(&mut api, "type    \nsubmit\n");
        assert!(out.contains("Write something first"));
        assert!(api.render().comments.is_empty());
    }

    #[test]
    fn clear_drops_the_draft() {
        let (_clock, mut api) = api();
        let out = drive(&mut api, "type draft\nshow\nclear\n");
        assert!(out.contains("Draft: draft"));
        assert_eq!(api.input(), "");
        assert!(out.trim_end().ends_with("(none yet)"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_clock, mut api) = api();
        drive(&mut api, "like\nquit\ndislike\nreset\n");
        let v = api.render();
        assert_eq!((v.likes, v.dislikes), (1, 0));
    }

    #[test]
    fn second_vote_shows_already_voted() {
        let (_clock, mut api) = api();
        let out = drive(&mut api, "like\ndislike\n");
        assert!(out.contains("You already voted. Use Reset to change your vote."));
    }

    #[test]
    fn expired_notice_is_not_redrawn() {
        let (clock, mut api) = api();
        api.like();
        clock.advance(Duration::milliseconds(1500));
        let out = drive(&mut api, "show\n");
        assert!(!out.contains("Thanks for your like!"));
    }

    #[test]
    fn unknown_line_is_reported() {
        let (_clock, mut api) = api();
        let out = drive(&mut api, "dance\n");
        assert!(out.contains("Unknown command: dance"));
    }
}
