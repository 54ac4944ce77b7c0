// cdecl: explain a C declaration read from standard input

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::debug;

use cdecl_explain::Explainer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Silent unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut explainer = Explainer::new(stdin.lock(), stdout.lock());

    match explainer.run() {
        Ok(()) => {
            debug!("explanation complete");
            Ok(())
        }
        Err(e) => {
            debug!("translation failed: {:?}", e);
            // Keep whatever was already printed, then report
            let mut out = explainer.into_output();
            let _ = out.flush();
            drop(out);

            let mut stderr = io::stderr();
            if stderr.is_tty() {
                writeln!(stderr, "{} {}", "error:".red().bold(), e)?;
            } else {
                writeln!(stderr, "error: {}", e)?;
            }
            std::process::exit(1);
        }
    }
}
