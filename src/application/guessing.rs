//! Interactive guessing loop over line-oriented input and output

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Game;

pub const BANNER: &str = "Guess the number!";
pub const PROMPT: &str = "Please input your guess:";

/// Play `game` to completion, reading guesses line by line from `input`.
///
/// Lines that do not parse as an integer, including lines that are not valid
/// UTF-8, are skipped and the prompt is repeated.
/// Returns the number of compared guesses once the target is hit, or
/// [`ApplicationError::InputClosed`] if input ends first.
#[instrument(level = "debug", skip_all)]
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut output: W,
) -> ApplicationResult<u32> {
    writeln!(output, "{}", BANNER).io_context("write banner")?;

    let mut buf = Vec::new();
    while !game.is_won() {
        writeln!(output, "{}", PROMPT).io_context("write prompt")?;
        output.flush().io_context("flush prompt")?;

        // bytes, so a line that is not UTF-8 is just another non-numeric guess
        buf.clear();
        let read = input.read_until(b'\n', &mut buf).io_context("read guess")?;
        if read == 0 {
            debug!("play: input closed after {} attempts", game.attempts());
            return Err(ApplicationError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);

        let Some(guess) = Game::parse_guess(&line) else {
            debug!("play: ignoring non-numeric input {:?}", line.trim_end());
            continue;
        };

        writeln!(output, "You guessed: {}", guess).io_context("write guess")?;
        let feedback = game.submit(guess)?;
        writeln!(output, "{}", feedback).io_context("write feedback")?;
    }
    output.flush().io_context("flush output")?;

    info!("won after {} attempts", game.attempts());
    Ok(game.attempts())
}
