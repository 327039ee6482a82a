use crate::simulation::deck::Deck;
use crate::simulation::sampler::FrequencyTable;
use serde::Serialize;

pub const HEADER: &str = "Lands | Count     | Percent | Cumulative %";
const SEPARATOR_WIDTH: usize = 46;

/// One line of the frequency table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub lands: usize,
    pub count: u64,
    pub percent: f64,
    pub cumulative: f64,
}

/// Machine-readable form of a simulation run, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub deck: Deck,
    pub hand_size: usize,
    pub trials: u64,
    pub seed: u64,
    pub rows: Vec<Row>,
    pub generated_at: String,
}

impl Report {
    pub fn new(table: &FrequencyTable) -> Self {
        Report {
            deck: table.deck(),
            hand_size: table.hand_size(),
            trials: table.trials(),
            seed: table.seed(),
            rows: rows(table, table.trials(), table.hand_size()),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

fn percent_of(count: u64, trials: u64) -> f64 {
    if trials == 0 {
        0.0
    } else {
        100.0 * count as f64 / trials as f64
    }
}

/// Percent and running cumulative percent for every outcome `0..=hand_size`
pub fn rows(table: &FrequencyTable, trials: u64, hand_size: usize) -> Vec<Row> {
    let mut cumulative = 0.0;
    (0..=hand_size)
        .map(|lands| {
            let count = table.count(lands);
            let percent = percent_of(count, trials);
            cumulative += percent;
            Row {
                lands,
                count,
                percent,
                cumulative,
            }
        })
        .collect()
}

/// Format an integer with `,` between groups of three digits
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render the table as plain text, one row per outcome in ascending order
pub fn format_table(table: &FrequencyTable, trials: u64, hand_size: usize) -> String {
    let mut out = format!("Trials: {}\n\n", thousands(trials));
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for row in rows(table, trials, hand_size) {
        out.push_str(&format!(
            "{:>5} | {:>9} | {:>7.2}% | {:>11.2}%\n",
            row.lands,
            thousands(row.count),
            row.percent,
            row.cumulative
        ));
    }
    out
}

/// Side-by-side Monte Carlo estimate and exact probability per outcome
pub fn format_comparison(table: &FrequencyTable, exact: &[f64]) -> String {
    let mut out = String::from("Lands | Simulated % | Exact %  | Diff\n");
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for row in rows(table, table.trials(), table.hand_size()) {
        let expected = exact.get(row.lands).copied().unwrap_or(0.0) * 100.0;
        out.push_str(&format!(
            "{:>5} | {:>10.2}% | {:>7.2}% | {:>+6.2}\n",
            row.lands,
            row.percent,
            expected,
            row.percent - expected
        ));
    }
    out
}
