use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::cli::views::print_detail;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, tab, json } = cmd {
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;
        print_detail(&ctx.session, *id, *tab, *json)?;
    }
    Ok(())
}
