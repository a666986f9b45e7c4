//! Branding screen shown before the recording screen.

use std::time::Duration;

use tracing::{debug, instrument};

/// How long the branding screen stays up.
pub const SPLASH_DELAY: Duration = Duration::from_secs(3);

/// The branding screen widgets.
pub trait SplashScreen: Send {
    /// Draw the static branding content.
    fn show_branding(&mut self);

    /// Tear the screen down for good.
    fn dismiss(&mut self);
}

/// Shows a [`SplashScreen`] for a fixed delay, then hands over to the next
/// screen.
///
/// `run` consumes the controller, so the transition happens exactly once
/// and nothing can navigate back to it.
pub struct SplashController<S> {
    screen: S,
    delay: Duration,
}

impl<S: SplashScreen> SplashController<S> {
    /// Create a splash controller with the standard [`SPLASH_DELAY`].
    pub fn new(screen: S) -> Self {
        Self::with_delay(screen, SPLASH_DELAY)
    }

    /// Create a splash controller with a custom delay.
    pub fn with_delay(screen: S, delay: Duration) -> Self {
        Self { screen, delay }
    }

    /// Show the branding, wait out the delay, launch the next screen and
    /// dismiss this one.
    ///
    /// Returns whatever `launch` produced.
    #[instrument(skip_all)]
    pub async fn run<T, F>(mut self, launch: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.screen.show_branding();
        debug!(delay_ms = self.delay.as_millis(), "Splash shown");
        tokio::time::sleep(self.delay).await;

        let next = launch();
        self.screen.dismiss();
        debug!("Splash dismissed");

        next
    }
}
