use super::ui;
use crate::core::dashboard::InvestorDashboard;
use comfy_table::Cell;

/// Prints the investor dashboard: headline totals, sector allocation, and
/// the trailing performance series.
pub fn render(investor_name: &str, view: &InvestorDashboard) {
    println!(
        "Investor: {}\n",
        ui::style_text(investor_name, ui::StyleType::Title)
    );

    println!(
        "{} {}   {} {}   {} {}   {} {}%",
        ui::style_text("Invested:", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_money(view.metrics.total_invested), ui::StyleType::TotalValue),
        ui::style_text("Current Value:", ui::StyleType::TotalLabel),
        ui::style_text(
            &ui::format_money(view.metrics.total_current_value),
            ui::StyleType::TotalValue
        ),
        ui::style_text("Returns:", ui::StyleType::TotalLabel),
        ui::style_text(&ui::format_money(view.metrics.total_returns), ui::StyleType::TotalValue),
        ui::style_text("Overall Return:", ui::StyleType::TotalLabel),
        view.metrics.overall_return_pct.round_dp(2),
    );

    if !view.sectors.is_empty() {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Sector"),
            ui::header_cell("Invested"),
            ui::header_cell("Current Value"),
            ui::header_cell("Investments"),
            ui::header_cell("Share (%)"),
        ]);
        for sector in &view.sectors {
            table.add_row(vec![
                Cell::new(&sector.sector),
                ui::money_cell(sector.invested),
                ui::money_cell(sector.current_value),
                ui::count_cell(sector.investments),
                ui::percent_cell(sector.share_pct),
            ]);
        }
        println!("\n{table}");
    }

    let with_returns = view.series.iter().any(|b| b.returns_to_date.is_some());
    let mut table = ui::new_styled_table();
    let mut header = vec![
        ui::header_cell("Month"),
        ui::header_cell("Invested (cum.)"),
        ui::header_cell("Value (cum.)"),
        ui::header_cell("New"),
    ];
    if with_returns {
        header.push(ui::header_cell("Returns (cum.)"));
    }
    table.set_header(header);

    for bucket in &view.series {
        let mut row = vec![
            Cell::new(bucket.month.to_string()),
            ui::money_cell(bucket.invested_to_date),
            ui::money_cell(bucket.value_to_date),
            ui::count_cell(bucket.new_investments),
        ];
        if let Some(returns) = bucket.returns_to_date {
            row.push(ui::money_cell(returns));
        }
        table.add_row(row);
    }
    println!("\n{table}");
}
