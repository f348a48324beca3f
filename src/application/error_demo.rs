//! Error-handling demonstration: a failing division recovered at the call site

use tracing::debug;

use crate::application::transcript::{Stream, Transcript};
use crate::domain::divide;

pub const NORMAL_OUTPUT: &str = "This is normal output information";
pub const CONTINUES_OUTPUT: &str = "The program continues to execute...";

/// Run the demo and return its output in emission order.
///
/// The division failure is reported on stderr; the two informational lines
/// always follow on stdout.
pub fn run() -> Transcript {
    let mut transcript = Transcript::new();

    match divide(10, 0) {
        Ok(result) => debug!("run: division unexpectedly succeeded: {}", result),
        Err(e) => transcript.push(Stream::Stderr, format!("Error: {}", e)),
    }

    transcript.push(Stream::Stdout, NORMAL_OUTPUT);
    transcript.push(Stream::Stdout, CONTINUES_OUTPUT);
    transcript
}
