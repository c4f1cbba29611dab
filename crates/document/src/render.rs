//! Render entry point. Rendering is a pure function of the plan and the
//! gym settings; the two-stage state machine retries with the plain layout
//! when the styled layout cannot be constructed, and fails only when both
//! stages fail.

use liftplan_domain::{GymSettings, WorkoutPlan};
use log::{debug, error};

use crate::{
    model::{Document, LayoutError},
    pdf::{self, PdfError},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Idle,
    RenderingPrimary,
    RenderingFallback,
    Done,
    Failed,
}

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("invalid plan: {0}")]
    Validation(String),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Serialization(#[from] PdfError),
}

impl RenderError {
    /// A single human-readable message for the shell, with a more specific
    /// hint when the underlying error points at a font or network problem.
    #[must_use]
    pub fn user_message(&self) -> String {
        let detail = self.to_string();
        let lower = detail.to_lowercase();
        if lower.contains("font") {
            format!("The PDF could not be created because of a font problem: {detail}")
        } else if lower.contains("network") {
            format!("The PDF could not be created because a resource was unreachable: {detail}")
        } else {
            format!("The PDF could not be created: {detail}")
        }
    }
}

#[derive(Default)]
pub struct Renderer {
    state: RenderState,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        self.state
    }

    pub async fn render(
        &mut self,
        plan: &WorkoutPlan,
        settings: &GymSettings,
    ) -> Result<Vec<u8>, RenderError> {
        let result = self.run(plan, settings);
        match &result {
            Ok(_) => self.state = RenderState::Done,
            Err(err) => {
                self.state = RenderState::Failed;
                log_failure(err, plan, settings);
            }
        }
        result
    }

    fn run(
        &mut self,
        plan: &WorkoutPlan,
        settings: &GymSettings,
    ) -> Result<Vec<u8>, RenderError> {
        validate(plan)?;
        self.state = RenderState::RenderingPrimary;
        let document = match Document::styled(plan, settings) {
            Ok(document) => document,
            Err(err) => {
                debug!("styled layout failed, falling back to plain layout: {err}");
                self.state = RenderState::RenderingFallback;
                Document::plain(plan, settings)
            }
        };
        Ok(pdf::serialize(&document)?)
    }
}

/// Renders the plan in a fresh single-use renderer.
pub async fn render(
    plan: &WorkoutPlan,
    settings: &GymSettings,
) -> Result<Vec<u8>, RenderError> {
    Renderer::new().render(plan, settings).await
}

fn validate(plan: &WorkoutPlan) -> Result<(), RenderError> {
    if plan.categories.is_empty() {
        return Err(RenderError::Validation(
            "the plan has no category groups".to_string(),
        ));
    }
    if plan.player_name.as_ref().trim().is_empty() {
        return Err(RenderError::Validation(
            "the plan has no player name".to_string(),
        ));
    }
    Ok(())
}

fn log_failure(err: &RenderError, plan: &WorkoutPlan, settings: &GymSettings) {
    error!(
        "rendering plan {} for {} failed: {err} \
         (gym: {:?}, language: {}, theme: {}, logo: {} bytes, custom font: {})",
        *plan.id,
        plan.player_name,
        settings.name,
        settings.language,
        settings.theme_color,
        settings.logo.as_ref().map_or(0, String::len),
        settings.custom_font.as_deref().unwrap_or("none"),
    );
}

/// The suggested name of the exported file.
#[must_use]
pub fn file_name(plan: &WorkoutPlan) -> String {
    format!(
        "{}-workout-plan-{}.pdf",
        plan.player_name,
        plan.date.format("%Y-%m-%d")
    )
}
