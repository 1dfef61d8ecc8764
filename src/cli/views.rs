//! Terminal renderings of the dashboard, detail, bookmarks and analytics views.
//! Only presentation lives here; every number comes from `core`.

use crate::cli::parser::DetailTab;
use crate::core::analytics::{
    self, BandCount, BookmarkStats, DashboardStats, DepartmentAverage, MonthCount,
};
use crate::core::session::Session;
use crate::core::storage::Storage;
use crate::errors::AppResult;
use crate::models::bookmark::Bookmark;
use crate::models::criteria::Criteria;
use crate::models::detail::{self, Feedback, PerformanceReview, Project};
use crate::models::employee::Employee;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{
    GREY, RESET, color_for_feedback, color_for_project_status, colorize_performance,
};
use crate::utils::formatting::{bar, bold, pad_left, stars};
use crate::utils::table::Table;
use serde::Serialize;

const BAR_WIDTH: usize = 30;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingView<'a> {
    stats: DashboardStats,
    criteria: &'a Criteria,
    total: usize,
    employees: Vec<&'a Employee>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailView<'a> {
    employee: &'a Employee,
    bookmarked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    performance_history: Option<Vec<PerformanceReview>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    projects: Option<Vec<Project>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<Vec<Feedback>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookmarksView<'a> {
    stats: BookmarkStats,
    employees: Vec<&'a Employee>,
    orphaned: Vec<&'a Bookmark>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyticsView {
    department_averages: Vec<DepartmentAverage>,
    performance_distribution: Vec<BandCount>,
    bookmark_trend: Vec<MonthCount>,
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn employee_table<S: Storage>(session: &Session<S>, employees: &[&Employee]) -> Table {
    let mut table = Table::with_headers(&["ID", "Name", "Email", "Department", "Rating", "", "🔖"]);
    for e in employees {
        table.add_row(vec![
            e.id.to_string(),
            e.full_name(),
            e.email.clone(),
            e.department.to_string(),
            colorize_performance(e.performance),
            stars(e.performance),
            if session.is_bookmarked(e.id) { "★" } else { "" }.to_string(),
        ]);
    }
    table
}

/// Dashboard: headline stats plus the filtered listing.
pub fn print_listing<S: Storage>(
    session: &Session<S>,
    criteria: &Criteria,
    json: bool,
) -> AppResult<()> {
    let all = session.employees();
    let filtered = session.filter(criteria);
    let stats = analytics::dashboard_stats(all);

    if json {
        return print_json(&ListingView {
            stats,
            criteria,
            total: all.len(),
            employees: filtered,
        });
    }

    header("Employee Dashboard");
    println!(
        "Employees: {}   Departments: {}   Avg rating: {:.1}   High performers: {}",
        stats.total_employees, stats.departments, stats.average_performance, stats.high_performers
    );

    let top: Vec<String> = stats
        .top_performers
        .iter()
        .filter_map(|id| session.directory().get(*id))
        .map(|e| format!("{} ({:.1})", e.full_name(), e.performance))
        .collect();
    if !top.is_empty() {
        println!("Top performers: {}", top.join(", "));
    }

    println!("Filters: {}\n", criteria.describe());

    if filtered.is_empty() {
        info("No employees match the current filters.");
        return Ok(());
    }

    print!("{}", employee_table(session, &filtered).render());
    println!("\nShowing {} of {} employees", filtered.len(), all.len());
    Ok(())
}

/// Detail view. An unknown id falls back to the full listing.
pub fn print_detail<S: Storage>(
    session: &Session<S>,
    id: i64,
    tab: DetailTab,
    json: bool,
) -> AppResult<()> {
    let Some(employee) = session.directory().get(id) else {
        warning(format!(
            "Employee #{id} not found, showing the listing instead."
        ));
        return print_listing(session, &Criteria::default(), json);
    };

    let wants = |t: DetailTab| tab == t || tab == DetailTab::All;
    let bookmarked = session.is_bookmarked(id);

    if json {
        return print_json(&DetailView {
            employee,
            bookmarked,
            performance_history: wants(DetailTab::Performance).then(detail::performance_history),
            projects: wants(DetailTab::Projects).then(detail::projects),
            feedback: wants(DetailTab::Feedback).then(detail::feedback),
        });
    }

    header(format!("{} (#{})", employee.full_name(), employee.id));
    println!("{}", employee.email);
    println!(
        "Bookmarked: {}\n",
        if bookmarked { "yes" } else { "no" }
    );

    if wants(DetailTab::Overview) {
        print_overview(employee);
    }
    if wants(DetailTab::Performance) {
        print_history(&detail::performance_history());
    }
    if wants(DetailTab::Projects) {
        print_projects(&detail::projects());
    }
    if wants(DetailTab::Feedback) {
        print_feedback(&detail::feedback());
    }
    Ok(())
}

fn print_overview(e: &Employee) {
    println!("{}", bold("Overview"));
    println!("  Department : {}", e.department);
    println!(
        "  Rating     : {} {}",
        colorize_performance(e.performance),
        stars(e.performance)
    );
    println!("  Age        : {}", e.age);
    println!("  Phone      : {}", e.phone);
    println!(
        "  Address    : {}, {}, {} {}",
        e.address.street, e.address.city, e.address.state, e.address.postal_code
    );
    println!("  Avatar     : {GREY}{}{RESET}", e.image);
    println!();
    for line in textwrap::wrap(&e.bio, 72) {
        println!("  {line}");
    }
    println!();
}

fn print_history(history: &[PerformanceReview]) {
    println!("{}", bold("Performance history"));
    for r in history {
        println!(
            "  {}  {} {}  {} - {}",
            r.date,
            colorize_performance(r.rating),
            stars(r.rating),
            r.feedback,
            r.reviewer
        );
    }
    println!();
}

fn print_projects(projects: &[Project]) {
    println!("{}", bold("Projects"));
    for p in projects {
        let status = p.status.as_str();
        println!(
            "  {} [{}{status}{RESET}] {} → {}  ({})",
            p.name,
            color_for_project_status(status),
            p.start_date,
            p.end_date,
            p.role
        );
        for line in textwrap::wrap(p.description, 68) {
            println!("      {line}");
        }
    }
    println!();
}

fn print_feedback(feedback: &[Feedback]) {
    println!("{}", bold("Feedback"));
    for f in feedback {
        let kind = f.kind.as_str();
        println!(
            "  {} [{}{kind}{RESET}] {} - {}",
            f.date,
            color_for_feedback(kind),
            f.message,
            f.from
        );
    }
    println!();
}

pub fn print_bookmarks<S: Storage>(session: &Session<S>, json: bool) -> AppResult<()> {
    let employees = session.bookmarked_employees();
    let orphaned = session.orphaned_bookmarks();
    let stats = analytics::bookmark_stats(session.employees(), session.bookmarks());

    if json {
        return print_json(&BookmarksView {
            stats,
            employees,
            orphaned,
        });
    }

    header("Bookmarked Employees");
    println!(
        "Bookmarked: {}   Avg rating: {:.1}   High performers: {}",
        stats.bookmarked, stats.average_performance, stats.high_performers
    );
    println!();

    if employees.is_empty() && orphaned.is_empty() {
        info("No bookmarked employees. Bookmark someone from the listing to see them here.");
        return Ok(());
    }

    if !employees.is_empty() {
        print!("{}", employee_table(session, &employees).render());
    }

    if !orphaned.is_empty() {
        println!();
        for b in &orphaned {
            println!(
                "{GREY}#{} (not in directory, added {}){RESET}",
                b.employee_id,
                b.added_at.format("%Y-%m-%d")
            );
        }
        info("Run `hrdash bookmarks --prune` to remove bookmarks not in the directory.");
    }
    Ok(())
}

pub fn print_analytics<S: Storage>(session: &Session<S>, json: bool) -> AppResult<()> {
    let employees = session.employees();
    let view = AnalyticsView {
        department_averages: analytics::department_averages(employees),
        performance_distribution: analytics::performance_bands(employees),
        bookmark_trend: analytics::bookmark_trend(session.bookmarks()),
    };

    if json {
        return print_json(&view);
    }

    header("Analytics");

    println!("{}", bold("Average rating by department"));
    let mut table = Table::with_headers(&["Department", "Employees", "Avg", ""]);
    for d in &view.department_averages {
        table.add_row(vec![
            d.department.to_string(),
            pad_left(&d.employees.to_string(), 9),
            colorize_performance(d.average_rating),
            bar(
                (d.average_rating * 10.0).round() as usize,
                50,
                BAR_WIDTH,
            ),
        ]);
    }
    print!("{}", table.render());
    println!();

    println!("{}", bold("Performance distribution"));
    let max = view
        .performance_distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for b in &view.performance_distribution {
        println!(
            "  {:<4} {:>3}  {}",
            b.range,
            b.count,
            bar(b.count, max, BAR_WIDTH)
        );
    }
    println!();

    println!("{}", bold("Bookmarks added per month"));
    if view.bookmark_trend.is_empty() {
        println!("  {GREY}no bookmarks yet{RESET}");
    }
    let max = view.bookmark_trend.iter().map(|m| m.count).max().unwrap_or(0);
    for m in &view.bookmark_trend {
        println!("  {} {:>3}  {}", m.month, m.count, bar(m.count, max, BAR_WIDTH));
    }
    Ok(())
}
