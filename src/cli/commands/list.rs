use crate::cli::context::{AppContext, criteria_from};
use crate::cli::parser::Commands;
use crate::cli::views::print_listing;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters, json } = cmd {
        let criteria = criteria_from(filters)?;
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;
        print_listing(&ctx.session, &criteria, *json)?;
    }
    Ok(())
}
