use super::ui;
use crate::core::dashboard::OwnerDashboard;
use comfy_table::Cell;

/// Prints the owner dashboard: per-opportunity raise progress, the rollup
/// summary, and the monthly fundraising trend.
pub fn render(owner_name: &str, view: &OwnerDashboard) {
    println!(
        "Business Owner: {}\n",
        ui::style_text(owner_name, ui::StyleType::Title)
    );

    if view.opportunities.is_empty() {
        println!("{}", ui::style_text("No opportunities listed.", ui::StyleType::Subtle));
    } else {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Opportunity"),
            ui::header_cell("Status"),
            ui::header_cell("Target"),
            ui::header_cell("Raised"),
            ui::header_cell("Progress (%)"),
            ui::header_cell("Investors"),
            ui::header_cell("Investment Statuses"),
        ]);
        for opportunity in &view.opportunities {
            let breakdown = opportunity
                .status_breakdown
                .iter()
                .map(|c| format!("{} {}", c.count, c.label))
                .collect::<Vec<_>>()
                .join(", ");
            table.add_row(vec![
                Cell::new(&opportunity.title),
                Cell::new(opportunity.status.as_str()),
                ui::money_cell(opportunity.target_capital),
                ui::money_cell(opportunity.current_raised),
                ui::percent_cell(opportunity.funding_progress_pct),
                ui::count_cell(opportunity.investor_count),
                Cell::new(breakdown),
            ]);
        }
        println!("{table}");
    }

    println!(
        "\n{} {} of {}   {} {}   {} {}   {} {}",
        ui::style_text("Raised:", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_money(view.summary.total_raised), ui::StyleType::TotalValue),
        ui::format_money(view.summary.total_target),
        ui::style_text("Investors:", ui::StyleType::TotalLabel),
        view.summary.total_investors,
        ui::style_text("Open:", ui::StyleType::TotalLabel),
        view.summary.open_opportunities,
        ui::style_text("Pending Investments:", ui::StyleType::TotalLabel),
        view.summary.pending_investments,
    );

    if !view.trend.is_empty() {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Month"),
            ui::header_cell("New Investments"),
            ui::header_cell("Amount"),
            ui::header_cell("Investors"),
        ]);
        for bucket in &view.trend {
            table.add_row(vec![
                Cell::new(bucket.month.to_string()),
                ui::count_cell(bucket.new_investments),
                ui::money_cell(bucket.total_amount),
                ui::count_cell(bucket.new_investors),
            ]);
        }
        println!("\n{table}");
    }
}
