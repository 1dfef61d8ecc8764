use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::cli::views::print_analytics;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analytics { json } = cmd {
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;
        print_analytics(&ctx.session, *json)?;
    }
    Ok(())
}
