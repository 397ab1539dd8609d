use std::io::{self, BufRead, Write};

use log::{debug, info};

use expression::evaluate;

use crate::config::Config;

/// Reads one expression per line until a blank line or the end of `input`
///
/// Results and rejections are both written to `output`, a rejected
/// expression does not end the session.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", config.banner)?;

    let mut lines = input.lines();
    loop {
        if !config.prompt.is_empty() {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                debug!("End of input");
                break;
            }
        };

        match evaluate(&line) {
            Ok(Some(value)) => writeln!(output, "{}", value)?,
            Ok(None) => {
                debug!("Blank expression");
                break;
            }
            Err(e) => {
                info!("Rejected expression \"{}\"", e.expression());
                writeln!(output, "{}", e)?
            }
        }
    }

    output.flush()
}
