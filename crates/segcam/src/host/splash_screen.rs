use std::io::{self, Write};

use segcam_core::SplashScreen;
use tracing::debug;

const BRANDING: &str = r"
  ___  ___  __ _  ___ __ _ _ __ ___
 / __|/ _ \/ _` |/ __/ _` | '_ ` _ \
 \__ \  __/ (_| | (_| (_| | | | | | |
 |___/\___|\__, |\___\__,_|_| |_| |_|
            |___/
";

/// Prints the branding banner and clears it when dismissed.
pub(crate) struct TerminalSplash;

impl SplashScreen for TerminalSplash {
    fn show_branding(&mut self) {
        println!("{BRANDING}");
    }

    fn dismiss(&mut self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "Enter/r: record or stop   s: drop preview   p: new preview   q: quit")
            .and_then(|()| stdout.flush())
        {
            debug!(error = ?e, "Failed to print key help");
        }
    }
}
