use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::cli::views::print_bookmarks;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bookmarks { prune, json } = cmd {
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;

        if *prune {
            prune_orphans(&mut ctx)?;
        }

        print_bookmarks(&ctx.session, *json)?;
    }
    Ok(())
}

pub(crate) fn prune_orphans(ctx: &mut AppContext) -> AppResult<()> {
    let dropped = ctx.session.prune_orphans()?;
    if dropped > 0 {
        ctx.audit(
            "prune",
            "",
            &format!("Removed {dropped} bookmark(s) not in the directory"),
        );
        success(format!("Removed {dropped} bookmark(s) not in the directory."));
    } else {
        info("No orphaned bookmarks.");
    }
    Ok(())
}
