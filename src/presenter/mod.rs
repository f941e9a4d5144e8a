//! Simulated video playback.
//!
//! The presenter holds a cycle for `watch_seconds` ticks and prints progress.
//! It never sees or decides the outcome.

mod opener;
mod ticker;

pub use opener::{ResourceOpener, SystemOpener};
pub use ticker::{SleepTicker, Ticker};

use std::io::Write;
use std::time::Duration;

use colored::*;

use crate::error::Result;
use crate::notify::Notifier;

/// Message sent when a presentation starts
pub const AUTOPLAY_MESSAGE: &str = "Autoplaying a reward video (local simulation)...";

/// Presents one video per cycle.
pub struct VideoPresenter {
    watch_seconds: u32,
    resource_url: Option<String>,
    ticker: Box<dyn Ticker>,
    notifier: Box<dyn Notifier>,
    opener: Box<dyn ResourceOpener>,
}

impl VideoPresenter {
    pub fn new(
        watch_seconds: u32,
        resource_url: Option<String>,
        ticker: Box<dyn Ticker>,
        notifier: Box<dyn Notifier>,
        opener: Box<dyn ResourceOpener>,
    ) -> Self {
        Self {
            watch_seconds,
            resource_url,
            ticker,
            notifier,
            opener,
        }
    }

    pub fn watch_seconds(&self) -> u32 {
        self.watch_seconds
    }

    /// Present the video for one cycle, writing progress to `out`.
    pub fn present(&self, cycle: u32, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "\n{} {}", "[NOTIFICATION]".magenta(), AUTOPLAY_MESSAGE)?;
        self.notifier.notify(AUTOPLAY_MESSAGE);

        if let Some(url) = &self.resource_url {
            writeln!(out, "Open this link to watch: {}", url.underline())?;
            if let Err(e) = self.opener.open(url) {
                log::info!("Could not open {} automatically: {}", url, e);
                writeln!(out, "{} No system opener available, open the link manually.", "[INFO]".blue())?;
            }
        }

        for second in 1..=self.watch_seconds {
            write!(out, "\r  ▶ Video playing... {}/{}s", second, self.watch_seconds)?;
            out.flush()?;
            self.ticker.tick(Duration::from_secs(1));
        }
        writeln!(out)?;

        log::debug!("Cycle {}: presented for {}s", cycle, self.watch_seconds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CountingTicker(Rc<RefCell<Vec<Duration>>>);

    impl Ticker for CountingTicker {
        fn tick(&self, period: Duration) {
            self.0.borrow_mut().push(period);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier(Rc<RefCell<Vec<String>>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Clone)]
    struct FakeOpener {
        opened: Rc<RefCell<Vec<String>>>,
        available: bool,
    }

    impl ResourceOpener for FakeOpener {
        fn open(&self, target: &str) -> io::Result<()> {
            if !self.available {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no opener"));
            }
            self.opened.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    struct Harness {
        ticks: CountingTicker,
        notes: RecordingNotifier,
        opened: Rc<RefCell<Vec<String>>>,
    }

    fn presenter(seconds: u32, url: Option<&str>, opener_available: bool) -> (VideoPresenter, Harness) {
        let ticks = CountingTicker::default();
        let notes = RecordingNotifier::default();
        let opened = Rc::new(RefCell::new(Vec::new()));
        let presenter = VideoPresenter::new(
            seconds,
            url.map(String::from),
            Box::new(ticks.clone()),
            Box::new(notes.clone()),
            Box::new(FakeOpener {
                opened: opened.clone(),
                available: opener_available,
            }),
        );
        (presenter, Harness { ticks, notes, opened })
    }

    #[test]
    fn test_ticks_once_per_second() {
        colored::control::set_override(false);
        let (presenter, harness) = presenter(3, None, true);
        let mut out = Vec::<u8>::new();
        presenter.present(1, &mut out).unwrap();

        assert_eq!(harness.ticks.0.borrow().len(), 3);
        assert!(harness.ticks.0.borrow().iter().all(|d| *d == Duration::from_secs(1)));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1/3s"));
        assert!(text.contains("3/3s"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_notifies_on_start() {
        let (presenter, harness) = presenter(1, None, true);
        presenter.present(1, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(*harness.notes.0.borrow(), vec![AUTOPLAY_MESSAGE.to_string()]);
    }

    #[test]
    fn test_zero_seconds_does_not_tick() {
        let (presenter, harness) = presenter(0, None, true);
        presenter.present(1, &mut Vec::<u8>::new()).unwrap();
        assert!(harness.ticks.0.borrow().is_empty());
    }

    #[test]
    fn test_opens_configured_resource() {
        let (presenter, harness) = presenter(1, Some("https://example.com/video"), true);
        presenter.present(1, &mut Vec::<u8>::new()).unwrap();
        assert_eq!(*harness.opened.borrow(), vec!["https://example.com/video".to_string()]);
    }

    #[test]
    fn test_missing_opener_is_not_fatal() {
        colored::control::set_override(false);
        let (presenter, harness) = presenter(2, Some("https://example.com/video"), false);
        let mut out = Vec::<u8>::new();
        presenter.present(1, &mut out).unwrap();

        assert!(harness.opened.borrow().is_empty());
        assert_eq!(harness.ticks.0.borrow().len(), 2);
        assert!(String::from_utf8(out).unwrap().contains("[INFO]"));
    }
}
