use crate::cli::context::{AppContext, criteria_from};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let criteria = criteria_from(filters)?;
        let mut ctx = AppContext::new(cfg);
        ctx.load()?;

        let session = &ctx.session;
        let rows = session.filter(&criteria);
        ExportLogic::export(&rows, |id| session.is_bookmarked(id), *format, file, *force)?;
    }
    Ok(())
}
