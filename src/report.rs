use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::pipeline::{Analysis, PredictionKind};

pub fn display_report(analysis: &Analysis) {
    match analysis.date_range {
        Some((first, last)) => println!(
            "\n🎯 Loto6 predictions from {} draws ({} to {})\n",
            analysis.draw_count, first, last
        ),
        None => println!("\n🎯 Loto6 predictions from {} draws\n", analysis.draw_count),
    }

    println!("{}", predictions_table(analysis));

    println!("\n📊 Frequency (last {} draws)\n", analysis.stats.window);
    println!("{}", frequency_table(&analysis.stats.counts));

    println!("\n⏳ Coldest numbers\n");
    println!("{}", coldest_table(analysis));
}

fn predictions_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Prediction", "Numbers"]);

    for prediction in &analysis.predictions {
        let numbers = prediction
            .numbers
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");
        table.add_row(vec![
            Cell::new(prediction.kind.label()).fg(cell_color(prediction.kind)),
            Cell::new(numbers),
        ]);
    }
    table
}

fn frequency_table(counts: &[u32]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Number", "Occurrences", "Number", "Occurrences"]);

    let half = counts.len().div_ceil(2);
    for i in 0..half {
        let mut row = vec![format!("{:2}", i + 1), counts[i].to_string()];
        if let Some(c) = counts.get(i + half) {
            row.push(format!("{:2}", i + half + 1));
            row.push(c.to_string());
        }
        table.add_row(row);
    }
    table
}

fn coldest_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rank", "Number", "Draws since last seen"]);

    for (rank, cold) in analysis.coldest.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            format!("{:2}", cold.number),
            cold.gap.to_string(),
        ]);
    }
    table
}

fn cell_color(kind: PredictionKind) -> Color {
    let [r, g, b] = kind.color();
    Color::Rgb { r, g, b }
}
