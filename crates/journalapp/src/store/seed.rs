use crate::model::{Amount, JournalEntry};

const SAMPLE: [(&str, &str, &str, Option<f64>, Option<f64>); 10] = [
    ("2025-01-01", "Cash", "Initial balance", Some(1000.0), None),
    ("2025-01-02", "Bank", "Deposit", Some(500.0), None),
    ("2025-01-03", "Cash", "Office Supplies", None, Some(200.0)),
    ("2025-01-04", "Revenue", "Service income", None, Some(300.0)),
    ("2025-01-05", "Expense", "Electricity", Some(100.0), None),
    ("2025-01-06", "Cash", "Snacks", Some(50.0), None),
    ("2025-01-07", "Bank", "Withdraw", None, Some(100.0)),
    ("2025-01-08", "Cash", "Client Payment", Some(1000.0), None),
    ("2025-01-09", "Expense", "Internet", Some(200.0), None),
    ("2025-01-10", "Revenue", "Extra Service", None, Some(500.0)),
];

/// The sample journal every report session starts from. Each call mints fresh ids.
pub fn sample_entries() -> Vec<JournalEntry> {
    SAMPLE
        .iter()
        .map(|&(date, account, description, debit, credit)| {
            JournalEntry::new(
                date,
                account,
                description,
                debit.and_then(Amount::new),
                credit.and_then(Amount::new),
            )
        })
        .collect()
}
