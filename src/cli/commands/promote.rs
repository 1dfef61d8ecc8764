use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::colorize_performance;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Promote { id } = cmd {
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;
        promote(&mut ctx, *id)?;
        info("Promotions last for the current session only; use `hrdash shell` to keep them.");
    }
    Ok(())
}

pub(crate) fn promote(ctx: &mut AppContext, id: i64) -> AppResult<()> {
    let before = ctx.session.employee(id)?.performance;
    let after = ctx.session.promote(id)?;
    let name = ctx.session.employee(id)?.full_name();

    if after > before {
        success(format!(
            "Promoted #{id} {name}: {:.1} → {}",
            before,
            colorize_performance(after)
        ));
    } else {
        info(format!("#{id} {name} already has the maximum rating."));
    }
    Ok(())
}
