use super::traits::Renderer;
use crate::presentation::view_models::{CreateView, DisplayOptions};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        let json_mode = format == OutputFormat::Json;
        Self {
            json_mode,
            options: DisplayOptions {
                enable_color: !json_mode && std::io::stdout().is_terminal(),
            },
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, view_model: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(view_model)?);
            return Ok(());
        }

        print!("{}", view_model.create_view(self.options));
        Ok(())
    }
}
