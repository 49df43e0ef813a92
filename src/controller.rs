use crate::{
    dialog::Prompt,
    event::AppStatus,
    format::format_elapsed,
    i18n::LANGUAGE_LOADER,
    stopwatch::{Clock, Stopwatch, SystemClock},
};
use i18n_embed_fl::fl;
use std::time::Duration;

/// What the window needs to draw one frame.
#[derive(Debug, PartialEq)]
pub struct ControlState {
    pub elapsed_text: String,
    pub running: bool,
    pub reset_enabled: bool,
    pub save_enabled: bool,
}

#[derive(Debug, PartialEq)]
pub enum SaveOutcome {
    Running,
    Empty,
    Saved(Duration),
}

pub struct Controller<C = SystemClock> {
    stopwatch: Stopwatch<C>,
}

impl Controller<SystemClock> {
    pub fn new() -> Self {
        Self::with_stopwatch(Stopwatch::new())
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_stopwatch(stopwatch: Stopwatch<C>) -> Self {
        Self { stopwatch }
    }

    pub fn confirm_close(&self, prompt: &impl Prompt) -> bool {
        if !self.stopwatch.is_running() {
            return true;
        }

        let confirmed = prompt.confirm(
            &fl!(LANGUAGE_LOADER, "dialog-confirm-title"),
            &fl!(LANGUAGE_LOADER, "dialog-close-running"),
        );

        log::info!("Close while running confirmed: {}", confirmed);

        confirmed
    }

    /// Resets unless the stopwatch is running. Returns whether anything
    /// changed.
    pub fn reset(&mut self) -> bool {
        if self.stopwatch.is_running() {
            log::debug!("Ignoring reset while running");
            return false;
        }

        if !self.stopwatch.has_started() {
            return false;
        }

        self.stopwatch.reset();
        log::debug!("Stopwatch reset");

        true
    }

    /// Placeholder save: reports the elapsed time but stores nothing.
    pub fn save(&self, prompt: &impl Prompt) -> SaveOutcome {
        if self.stopwatch.is_running() {
            prompt.notify(
                AppStatus::Warning,
                &fl!(LANGUAGE_LOADER, "dialog-save-blocked-title"),
                &fl!(LANGUAGE_LOADER, "dialog-save-blocked"),
            );
            return SaveOutcome::Running;
        }

        let elapsed = self.stopwatch.elapsed();
        if elapsed.is_zero() {
            prompt.notify(
                AppStatus::Info,
                &fl!(LANGUAGE_LOADER, "dialog-save-title"),
                &fl!(LANGUAGE_LOADER, "dialog-save-empty"),
            );
            return SaveOutcome::Empty;
        }

        let elapsed_text = format_elapsed(elapsed);
        log::info!("Saving {} (no backing store)", elapsed_text);

        prompt.notify(
            AppStatus::Info,
            &fl!(LANGUAGE_LOADER, "dialog-save-title"),
            &fl!(LANGUAGE_LOADER, "dialog-save-done", elapsed = elapsed_text),
        );

        SaveOutcome::Saved(elapsed)
    }

    pub fn state(&self) -> ControlState {
        let elapsed = self.stopwatch.elapsed();
        let running = self.stopwatch.is_running();
        let idle_with_time = !running && !elapsed.is_zero();

        ControlState {
            elapsed_text: format_elapsed(elapsed),
            running,
            reset_enabled: idle_with_time,
            save_enabled: idle_with_time,
        }
    }

    /// Starts or pauses. Returns whether the stopwatch is now running.
    pub fn toggle_play(&mut self) -> bool {
        if self.stopwatch.is_running() {
            self.stopwatch.pause();
            log::debug!("Stopwatch paused at {}", format_elapsed(self.stopwatch.elapsed()));
        } else {
            self.stopwatch.start();
            log::debug!("Stopwatch started");
        }

        self.stopwatch.is_running()
    }
}
