use contracts::domain::a002_payroll::{PaymentStatus, PayrollEntry, PayrollSummary};
use contracts::shared::list::SortKey;

use crate::shared::config::{resolve_data_path, Config, ListConfig};
use crate::shared::data::{seed, RecordStore};
use crate::shared::error::EngineResult;
use crate::shared::list::RecordTable;

pub type PayrollTable = RecordTable<PayrollEntry>;

/// Таблица ведомости; по умолчанию по имени A-Z
pub fn new_table(store: RecordStore<PayrollEntry>, list: &ListConfig) -> PayrollTable {
    RecordTable::new(store, list.page_size)
        .with_page_size_options(list.page_size_options.clone())
        .with_sort(SortKey::NameAsc)
}

pub fn load_table(config: &Config) -> EngineResult<PayrollTable> {
    let path = resolve_data_path(&config.seed.payroll_path);
    let store = seed::load_file::<PayrollEntry>(&path)?;
    Ok(new_table(store, &config.list))
}

/// Summary cards: total amount, pending, paid
///
/// Salaries that do not parse are left out of the total.
pub fn summary(store: &RecordStore<PayrollEntry>) -> PayrollSummary {
    let mut total_amount = 0.0;
    let mut pending_count = 0;
    let mut paid_count = 0;

    for entry in store.all() {
        match entry.salary_amount() {
            Some(amount) => total_amount += amount,
            None => tracing::warn!("Unparseable salary '{}' for {}", entry.salary, entry.id),
        }
        if entry.is_paid() {
            paid_count += 1;
        } else {
            pending_count += 1;
        }
    }

    PayrollSummary {
        total_amount,
        pending_count,
        paid_count,
    }
}

pub fn status_options() -> &'static [&'static str] {
    PaymentStatus::VALUES
}

pub fn department_options(store: &RecordStore<PayrollEntry>) -> Vec<String> {
    store.distinct_values("department").into_iter().collect()
}
