use crate::presentation::view_models::CreateView;
use anyhow::Result;
use serde::Serialize;

pub trait Renderer {
    fn render<T>(&self, view_model: &T) -> Result<()>
    where
        T: Serialize + CreateView;
}
