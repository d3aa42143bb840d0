//! Progress reporting for video generation

use belajar_application::AnimationProgressNotifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::debug;

/// Spinner showing the rotating status message
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationProgressNotifier for SpinnerProgress {
    fn on_generation_start(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Animasi");
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(120));
        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_status_message(&self, message: &str) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.set_message(message.to_string());
        }
    }

    fn on_poll(&self, attempt: u32, done: bool) {
        debug!("Video status check {} (done: {})", attempt, done);
    }

    fn on_generation_end(&self, success: bool) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            if success {
                pb.finish_with_message(format!("{}", "Selesai!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Gagal".red()));
            }
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress;

impl AnimationProgressNotifier for SimpleProgress {
    fn on_generation_start(&self, message: &str) {
        println!("{} {}", "->".cyan(), message);
    }

    fn on_status_message(&self, message: &str) {
        println!("   {}", message.dimmed());
    }

    fn on_generation_end(&self, success: bool) {
        if success {
            println!("  {} video selesai", "v".green());
        } else {
            println!("  {} video gagal", "x".red());
        }
    }
}
