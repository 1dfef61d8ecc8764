//! Interactive session. The directory is fetched once; filters and
//! promotions live until the loop ends, bookmarks are saved as usual.

use crate::cli::commands::{bookmark, bookmarks, promote};
use crate::cli::context::AppContext;
use crate::cli::parser::{Commands, DetailTab};
use crate::cli::views::{print_analytics, print_bookmarks, print_detail, print_listing};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::criteria::{Criteria, parse_departments, parse_range};
use crate::ui::messages::{error, info, success, warning};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

const PROMPT: &str = "hrdash> ";

/// One line typed at the prompt.
#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Show the listing with the current filters
    List,
    /// Set the search text (no text clears it)
    Search { text: Vec<String> },
    /// Set the department filter (no names clears it)
    Dept { names: Vec<String> },
    /// Set the performance range, e.g. `range 4-5` (no value clears it)
    Range { range: Option<String> },
    /// Clear all filters
    Clear,
    /// Show one employee
    Show {
        id: i64,
        #[arg(value_enum, default_value_t = DetailTab::Overview)]
        tab: DetailTab,
    },
    /// Bookmark an employee
    Bookmark { id: i64 },
    /// Remove a bookmark
    Unbookmark { id: i64 },
    /// Toggle a bookmark
    Toggle { id: i64 },
    /// Show bookmarked employees
    Bookmarks,
    /// Remove bookmarks whose employee is not in the directory
    Prune,
    /// Promote an employee (+0.5, capped at 5.0)
    Promote { id: i64 },
    /// Department averages and performance distribution
    Analytics,
    /// Fetch the directory again
    Refresh,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Stop,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shell = cmd {
        let mut ctx = AppContext::new(cfg);
        let stdin = io::stdin();
        run(&mut ctx, stdin.lock())?;
    }
    Ok(())
}

/// Drive a session from `input` until `quit` or end of input.
pub fn run<R: BufRead>(ctx: &mut AppContext, input: R) -> AppResult<()> {
    if let Err(e) = ctx.load() {
        error(format!("Error loading data: {e}"));
        info("Type `refresh` to try again.");
    } else {
        info(format!(
            "{} employees loaded. Type `help` for commands.",
            ctx.session.employees().len()
        ));
    }

    let mut criteria = Criteria::default();
    prompt();

    for line in input.lines() {
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            prompt();
            continue;
        }

        match ShellLine::try_parse_from(tokens) {
            Ok(parsed) => match execute(ctx, &mut criteria, parsed.command) {
                Ok(Flow::Stop) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            },
            Err(e) => {
                // Help and usage errors are printed by clap itself.
                let _ = e.print();
            }
        }
        prompt();
    }

    println!();
    Ok(())
}

fn prompt() {
    print!("{PROMPT}");
    io::stdout().flush().ok();
}

fn execute(ctx: &mut AppContext, criteria: &mut Criteria, cmd: ShellCommand) -> AppResult<Flow> {
    match cmd {
        ShellCommand::List => print_listing(&ctx.session, criteria, false)?,
        ShellCommand::Search { text } => {
            criteria.search = text.join(" ");
            print_listing(&ctx.session, criteria, false)?;
        }
        ShellCommand::Dept { names } => {
            criteria.departments = parse_departments(&names)?;
            print_listing(&ctx.session, criteria, false)?;
        }
        ShellCommand::Range { range } => {
            let bounds = match range {
                Some(r) => parse_range(&r)?,
                None => Vec::new(),
            };
            if !bounds.is_empty() && bounds.len() != 2 {
                warning("Range needs two bounds (MIN-MAX); no performance filter applied.");
            }
            criteria.performance_range = bounds;
            print_listing(&ctx.session, criteria, false)?;
        }
        ShellCommand::Clear => {
            criteria.clear();
            print_listing(&ctx.session, criteria, false)?;
        }
        ShellCommand::Show { id, tab } => print_detail(&ctx.session, id, tab, false)?,
        ShellCommand::Bookmark { id } => bookmark::add(ctx, id)?,
        ShellCommand::Unbookmark { id } => bookmark::remove(ctx, id),
        ShellCommand::Toggle { id } => {
            if ctx.session.is_bookmarked(id) {
                bookmark::remove(ctx, id);
            } else {
                bookmark::add(ctx, id)?;
            }
        }
        ShellCommand::Bookmarks => print_bookmarks(&ctx.session, false)?,
        ShellCommand::Prune => bookmarks::prune_orphans(ctx)?,
        ShellCommand::Promote { id } => promote::promote(ctx, id)?,
        ShellCommand::Analytics => print_analytics(&ctx.session, false)?,
        ShellCommand::Refresh => {
            ctx.reload()?;
            success(format!(
                "{} employees loaded.",
                ctx.session.employees().len()
            ));
        }
        ShellCommand::Quit => return Ok(Flow::Stop),
    }
    Ok(Flow::Continue)
}
