use super::ui;
use crate::core::group::CategoryCount;
use crate::core::platform::PlatformMetrics;
use comfy_table::Cell;

/// Prints the administrator dashboard: totals, the three distributions,
/// growth windows, and the recent-activity feed.
pub fn render(metrics: &PlatformMetrics) {
    println!(
        "Platform: {}\n",
        ui::style_text("All Activity", ui::StyleType::Title)
    );

    println!(
        "{} {}   {} {}   {} {}   {} {}",
        ui::style_text("Users:", ui::StyleType::TotalLabel),
        metrics.total_users,
        ui::style_text("Businesses:", ui::StyleType::TotalLabel),
        metrics.total_businesses,
        ui::style_text("Investments:", ui::StyleType::TotalLabel),
        metrics.total_investments,
        ui::style_text("Total Volume:", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_money(metrics.total_volume), ui::StyleType::TotalValue),
    );

    print_distribution("Users by Role", &metrics.users_by_role);
    print_distribution("Businesses by Industry", &metrics.businesses_by_industry);
    print_distribution("Investments by Status", &metrics.investments_by_status);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Growth"),
        ui::header_cell("Since Last Month"),
        ui::header_cell("Since Last Year"),
    ]);
    for (entity, window) in [
        ("Users", metrics.growth.users),
        ("Businesses", metrics.growth.businesses),
        ("Investments", metrics.growth.investments),
    ] {
        table.add_row(vec![
            Cell::new(entity),
            ui::count_cell(window.since_last_month),
            ui::count_cell(window.since_last_year),
        ]);
    }
    println!("\n{table}");

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Recent"),
        ui::header_cell("Id"),
        ui::header_cell("Detail"),
        ui::header_cell("Created"),
    ]);
    for user in &metrics.recent.users {
        table.add_row(vec![
            Cell::new("User"),
            Cell::new(&user.id),
            Cell::new(&user.name),
            Cell::new(user.created_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    for business in &metrics.recent.businesses {
        table.add_row(vec![
            Cell::new("Business"),
            Cell::new(&business.id),
            Cell::new(&business.title),
            Cell::new(business.created_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    for investment in &metrics.recent.investments {
        table.add_row(vec![
            Cell::new("Investment"),
            Cell::new(&investment.id),
            Cell::new(ui::format_money(investment.amount)),
            Cell::new(investment.invested_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    println!("\n{table}");
}

fn print_distribution(title: &str, counts: &[CategoryCount]) {
    if counts.is_empty() {
        return;
    }
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell(title), ui::header_cell("Count")]);
    for bucket in counts {
        table.add_row(vec![Cell::new(&bucket.label), ui::count_cell(bucket.count)]);
    }
    println!("\n{table}");
}
