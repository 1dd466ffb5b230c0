use crate::binding::{self, Intent, Outcome};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use rolodex_engine::IndexError;

pub fn handle(ctx: &HandlerContext, index: usize, query: Option<&str>) -> Result<()> {
    let mut directory = ctx.load()?;

    if let Some(query) = query {
        binding::dispatch(&mut directory, Intent::SubmitQuery(query.to_string()));
    }

    if let Outcome::Rejected(err) = binding::dispatch(&mut directory, Intent::SelectCard(index)) {
        return Err(err.into());
    }

    let view_model = presenters::present_modal(&directory).ok_or(IndexError::NotOpen)?;
    ctx.render(&view_model)
}
