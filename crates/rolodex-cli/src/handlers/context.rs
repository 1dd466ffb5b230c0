use crate::presentation::view_models::CreateView;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use rolodex_engine::Directory;
use rolodex_providers::DataSource;
use rolodex_runtime::{load_directory, Config};
use serde::Serialize;
use std::path::PathBuf;

/// Everything a handler needs: where the batch comes from and how to print.
pub struct HandlerContext {
    pub config: Config,
    pub source_file: Option<PathBuf>,
    pub format: OutputFormat,
}

impl HandlerContext {
    pub fn new(config: Config, source_file: Option<PathBuf>, format: OutputFormat) -> Self {
        Self {
            config,
            source_file,
            format,
        }
    }

    pub fn source(&self) -> Result<Box<dyn DataSource>> {
        Ok(self.config.build_source(self.source_file.as_deref())?)
    }

    /// Fetch the batch and block until the directory is populated.
    ///
    /// A failed fetch is logged and yields an empty directory.
    pub fn load(&self) -> Result<Directory> {
        let source = self.source()?;
        Ok(load_directory(source.as_ref()))
    }

    pub fn render<T>(&self, view_model: &T) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        ConsoleRenderer::new(self.format).render(view_model)
    }
}
