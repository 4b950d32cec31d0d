//! Input handling for the REPL.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

/// Lines waiting to be consumed by the REPL loop.
pub type LineReceiver = mpsc::Receiver<io::Result<String>>;

const LINE_BUFFER: usize = 16;

/// Splits a line into lowercase words, dropping surrounding and repeated
/// whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

// == Line Reader ==
/// Reads `reader` line by line on a dedicated OS thread.
///
/// The thread is not part of the tokio runtime, so a read blocked on a
/// terminal never holds up runtime shutdown. It exits at end of input, after
/// the first read error, or once the receiver is dropped and the next line
/// arrives.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
            debug!("Line reader finished");
        })?;

    Ok(rx)
}
