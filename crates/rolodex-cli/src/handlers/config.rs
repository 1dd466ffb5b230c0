use crate::handlers::HandlerContext;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, config_path: &Path) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ctx.config)?),
        OutputFormat::Plain => {
            println!("# {}", config_path.display());
            if !config_path.exists() {
                println!("# (file not found, showing defaults)");
            }
            print!("{}", toml::to_string_pretty(&ctx.config)?);
        }
    }
    Ok(())
}
