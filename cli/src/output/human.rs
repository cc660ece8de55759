//! Human-readable terminal renderer.

use crate::application::services::project_init::InitOutcome;
use crate::output::OutputContext;

/// Renders use-case outcomes as human-readable terminal output.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the summary printed after a successful run.
    pub fn render_outcome(&self, outcome: &InitOutcome) {
        if self.ctx.quiet {
            return;
        }
        println!();
        self.ctx.kv("Project: ", &outcome.project_name);
        self.ctx.kv("Template:", &outcome.template_url);
        self.ctx.kv("Location:", &outcome.project_dir.display().to_string());
        self.ctx.kv("Env file:", &outcome.env_file.display().to_string());
        println!();
        self.ctx.header("Next steps:");
        self.ctx.info(&format!("cd {}", outcome.project_name));
        self.ctx
            .info("fill in DJANGO_SUPERUSER_EMAIL and DJANGO_SUPERUSER_PASSWORD in .env");
    }
}
