use super::Transaction;

/// Sum the amounts of a list of transactions. Empty list -> 0.0.
pub fn total_amount(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|t| t.amount).sum()
}

/// Merge incomes and expenses into a single list ordered by date,
/// most recent first, truncated to `limit` entries.
///
/// The sort is stable, so on equal dates incomes come before expenses and
/// records keep the order the service returned them in.
pub fn recent_history(
    incomes: &[Transaction],
    expenses: &[Transaction],
    limit: usize,
) -> Vec<Transaction> {
    let mut history: Vec<Transaction> = incomes.iter().chain(expenses.iter()).cloned().collect();
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history.truncate(limit);
    history
}
