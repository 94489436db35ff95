use super::steps::{OnboardingStep, steps_for};
use config_loader::ConfigError;
use logging::Logger;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Tracks which tours were seen and which one is on screen.
pub struct OnboardingController {
    enabled: bool,
    completed: BTreeSet<String>,
    active: Option<(String, usize)>,
    state_path: Option<PathBuf>,
    logger: Logger,
}

/// The step currently highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveStep<'a> {
    pub section: &'a str,
    pub index: usize,
    pub total: usize,
    pub step: &'static OnboardingStep,
}

impl ActiveStep<'_> {
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

impl OnboardingController {
    /// Creates a controller, reading completed sections from `state_path`.
    pub fn new(enabled: bool, state_path: Option<PathBuf>, logger: Logger) -> Self {
        let completed = state_path
            .as_ref()
            .map(|path| Self::load_completed(path, &logger))
            .unwrap_or_default();

        Self {
            enabled,
            completed,
            active: None,
            state_path,
            logger,
        }
    }

    fn load_completed(path: &Path, logger: &Logger) -> BTreeSet<String> {
        match config_loader::load_config_file(path) {
            Ok(content) => content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(ConfigError::FileNotFound(_)) => BTreeSet::new(),
            Err(e) => {
                logger.warn(&format!("[ONBOARDING] Could not read state: {}", e));
                BTreeSet::new()
            }
        }
    }

    /// Activates `section`'s tour. Returns whether a tour is now showing for it.
    ///
    /// Safe to call on every mount: disabled onboarding, finished or unknown
    /// sections and an already running tour all make this a no-op.
    pub fn start(&mut self, section: &str) -> bool {
        if let Some((active, _)) = &self.active {
            return active == section;
        }

        let completed = self.is_completed(section);
        if !self.enabled || completed || steps_for(section).is_empty() {
            self.logger.debug(&format!(
                "[ONBOARDING] Not starting '{}' (enabled: {}, completed: {})",
                section, self.enabled, completed
            ));
            return false;
        }

        self.logger
            .info(&format!("[ONBOARDING] Starting tour '{}'", section));
        self.active = Some((section.to_string(), 0));
        true
    }

    /// Next step, completing the tour after the last one.
    pub fn advance(&mut self) {
        let Some((section, index)) = self.active.take() else {
            return;
        };

        if index + 1 < steps_for(&section).len() {
            self.active = Some((section, index + 1));
        } else {
            self.complete(section);
        }
    }

    /// Ends the active tour without showing the remaining steps.
    pub fn skip(&mut self) {
        if let Some((section, index)) = self.active.take() {
            self.logger.info(&format!(
                "[ONBOARDING] Tour '{}' skipped at step {}",
                section,
                index + 1
            ));
            self.complete(section);
        }
    }

    pub fn active_step(&self) -> Option<ActiveStep<'_>> {
        let (section, index) = self.active.as_ref()?;
        let steps = steps_for(section);
        Some(ActiveStep {
            section,
            index: *index,
            total: steps.len(),
            step: steps.get(*index)?,
        })
    }

    pub fn is_completed(&self, section: &str) -> bool {
        self.completed.contains(section)
    }

    fn complete(&mut self, section: String) {
        self.logger
            .info(&format!("[ONBOARDING] Tour '{}' completed", section));
        self.completed.insert(section);
        self.persist();
    }

    fn persist(&self) {
        let Some(path) = &self.state_path else {
            return;
        };

        let mut content = String::new();
        for section in &self.completed {
            content.push_str(section);
            content.push('\n');
        }

        if let Err(e) = std::fs::write(path, content) {
            self.logger.warn(&format!(
                "[ONBOARDING] Could not save state to {:?}: {}",
                path, e
            ));
        }
    }
}
