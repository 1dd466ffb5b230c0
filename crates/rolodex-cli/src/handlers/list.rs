use crate::binding::{self, Intent};
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext, query: Option<&str>) -> Result<()> {
    let mut directory = ctx.load()?;

    if let Some(query) = query {
        binding::dispatch(&mut directory, Intent::SubmitQuery(query.to_string()));
    }

    ctx.render(&presenters::present_gallery(&directory))
}
