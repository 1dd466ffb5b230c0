use crate::handlers::HandlerContext;
use crate::presentation::renderers::tui::TuiBrowser;
use anyhow::{bail, Result};
use is_terminal::IsTerminal;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `rolodex list` to print the gallery");
    }

    TuiBrowser::run(ctx.source()?)
}
