//! The interactive loop: show a round, read a pick, show the article, repeat.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, info};

use newsrec_core::RecommendationSet;
use newsrec_session::RecommendationSession;

use crate::display::{display_article, display_recommendations};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The user entered something other than a listed number.
    InvalidChoice,
    /// Input closed.
    EndOfInput,
}

/// Run the loop until an invalid choice or end of input.
///
/// The first round is a random, title-unique set of `count` articles; every
/// later round follows from the previous pick.
pub fn run<R: BufRead, W: Write>(
    session: &mut RecommendationSession,
    count: usize,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<LoopExit> {
    let mut set = session
        .initial(count)
        .context("building the initial recommendations")?;

    loop {
        display_recommendations(output, &set, session.corpus())?;
        write!(output, "\nYour choice? ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(LoopExit::EndOfInput);
        };
        let Some(index) = parse_choice(&line, &set) else {
            writeln!(output, "Invalid Choice. Goodbye!")?;
            info!(rounds = session.rounds(), "session ended");
            return Ok(LoopExit::InvalidChoice);
        };
        debug!(choice = index, "user pick");

        let article = session.corpus().article(index)?;
        display_article(output, index, article)?;
        write!(output, "Press Enter")?;
        output.flush()?;
        if read_line(input)?.is_none() {
            return Ok(LoopExit::EndOfInput);
        }

        set = session
            .next(index, count)
            .with_context(|| format!("recommending after article {index}"))?;
    }
}

/// Map a 1-based choice to an article index.
fn parse_choice(line: &str, set: &RecommendationSet) -> Option<usize> {
    let position = line.trim().parse::<usize>().ok()?.checked_sub(1)?;
    set.pick(position)
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
