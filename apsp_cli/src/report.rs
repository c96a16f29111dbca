use apsp_core::{harness::StrategyReport, strategy::apsp_strategy::RoundOrdering};
use comfy_table::{Cell, Table};

pub fn print_lines(reports: &[StrategyReport]) {
    for report in reports {
        println!("{report}");
    }
}

pub fn print_json(reports: &[StrategyReport]) -> Result<(), anyhow::Error> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

pub fn print_table(reports: &[StrategyReport]) {
    let mut table = Table::new();
    table.set_header(vec!["Strategy", "Rounds", "Time (ms)", "Matches sequential"]);

    for report in reports {
        let rounds = match report.round_ordering {
            RoundOrdering::Ordered => "ordered",
            RoundOrdering::Unordered => "unordered",
        };
        let matches = match report.mismatched_cells {
            Some(0) => "yes".to_owned(),
            Some(count) => format!("no ({count} cells)"),
            None => "-".to_owned(),
        };

        table.add_row(vec![
            Cell::new(report.name),
            Cell::new(rounds),
            Cell::new(format!("{:.3}", report.elapsed_millis())),
            Cell::new(matches),
        ]);
    }

    println!("{table}");
}
