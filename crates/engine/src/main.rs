use std::path::Path;

use contracts::shared::list::ListRecord;
use engine::domain::{a001_employee, a002_payroll};
use engine::shared::config::{load_config, load_config_from};
use engine::shared::list::RecordTable;
use engine::shared::logger::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    // Необязательный аргумент: путь к config.toml
    let config = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!("Loading config from: {}", path);
            load_config_from(Path::new(&path))?
        }
        None => load_config()?,
    };

    let employees = a001_employee::service::load_table(&config)
        .map_err(|e| anyhow::anyhow!("employee seed load failed: {e}"))?;
    let payroll = a002_payroll::service::load_table(&config)
        .map_err(|e| anyhow::anyhow!("payroll seed load failed: {e}"))?;

    let summary = a001_employee::service::summary(employees.store());
    tracing::info!(
        "Employees: {} total, {} positions, {} departments",
        summary.total_employees,
        summary.position_count,
        summary.department_count
    );

    let summary = a002_payroll::service::summary(payroll.store());
    tracing::info!(
        "Payroll: {} total, {} pending, {} paid",
        summary.total_amount_label(),
        summary.pending_count,
        summary.paid_count
    );

    print_first_page(&employees, "display_name");
    print_first_page(&payroll, "name");

    Ok(())
}

fn print_first_page<T: ListRecord>(table: &RecordTable<T>, name_field: &str) {
    let page = table.current_page();
    println!("{} ({}, sort: {})", T::list_name(), page.range_label(), table.sort());
    for record in &page.items {
        println!(
            "  {:>38} | {:<28} | {}",
            record.id().as_str(),
            record.field_value(name_field).unwrap_or_default(),
            record.department()
        );
    }
}
