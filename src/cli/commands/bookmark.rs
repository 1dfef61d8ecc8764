use crate::cli::context::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Bookmark { id } => {
            let mut ctx = AppContext::new(cfg);
            ctx.load()?;
            add(&mut ctx, *id)
        }
        Commands::Unbookmark { id } => {
            // Removing needs no directory: orphaned bookmarks can be removed too.
            let mut ctx = AppContext::new(cfg);
            remove(&mut ctx, *id);
            Ok(())
        }
        Commands::Toggle { id } => {
            let mut ctx = AppContext::new(cfg);
            if ctx.session.is_bookmarked(*id) {
                remove(&mut ctx, *id);
                Ok(())
            } else {
                ctx.load()?;
                add(&mut ctx, *id)
            }
        }
        _ => Ok(()),
    }
}

pub(crate) fn add(ctx: &mut AppContext, id: i64) -> AppResult<()> {
    let name = ctx.session.employee(id)?.full_name();
    if ctx.session.add_bookmark(id)? {
        ctx.audit("bookmark", &id.to_string(), &format!("Bookmarked {name}"));
        success(format!("Bookmarked #{id} {name}."));
    } else {
        info(format!("#{id} {name} is already bookmarked."));
    }
    Ok(())
}

pub(crate) fn remove(ctx: &mut AppContext, id: i64) {
    if ctx.session.remove_bookmark(id) {
        ctx.audit("unbookmark", &id.to_string(), "Bookmark removed");
        success(format!("Bookmark for #{id} removed."));
    } else {
        info(format!("#{id} was not bookmarked."));
    }
}
