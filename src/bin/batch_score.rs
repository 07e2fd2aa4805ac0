//! Batch scoring: reads borrower rows from a CSV file, scores each one, and
//! writes a results CSV. Column headers must match the schema field names;
//! `loan_types` holds the selections separated by `|` in selection order.

use anyhow::{bail, Context};
use clap::Parser;
use credit_scoring::domain::ports::ConfigProvider;
use credit_scoring::domain::schema::{self, FieldKind};
use credit_scoring::utils::logger;
use credit_scoring::{ModelLoader, ScoreRequest, ScoringEngine};
use std::collections::HashMap;

#[derive(Debug, Parser)]
#[command(name = "batch_score")]
#[command(about = "Scores a CSV of borrower records against the credit score model")]
struct BatchArgs {
    #[arg(long, default_value = "model/credit_model.json")]
    model_path: String,

    /// Input CSV with one borrower per row
    #[arg(long)]
    input: String,

    /// Output CSV of name,label rows
    #[arg(long, default_value = "scores.csv")]
    output: String,

    #[arg(long)]
    verbose: bool,
}

impl ConfigProvider for BatchArgs {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

fn main() -> anyhow::Result<()> {
    let args = BatchArgs::parse();
    logger::init_cli_logger(args.verbose);

    let loader = ModelLoader::from_config(&args);
    let engine = ScoringEngine::from_handle(loader.load());
    if !engine.is_ready() {
        bail!(
            "model artifact at {} is unavailable; batch scoring disabled",
            args.model_path
        );
    }

    let mut reader = csv::Reader::from_path(&args.input)
        .with_context(|| format!("cannot open input CSV {}", args.input))?;
    let headers = reader.headers()?.clone();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("cannot create output CSV {}", args.output))?;
    writer.write_record(["name", "label"])?;

    let mut scored = 0usize;
    let mut failed = 0usize;

    for (row_index, row) in reader.records().enumerate() {
        let row = row?;
        let request = match request_from_row(&headers, &row) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Row {}: cannot parse: {}", row_index + 1, e);
                failed += 1;
                continue;
            }
        };

        match engine.score(&request) {
            Ok(report) => {
                writer.write_record([report.name.as_str(), report.label.as_str()])?;
                scored += 1;
            }
            Err(e) => {
                tracing::warn!("Row {} ({}): {}", row_index + 1, request.name, e);
                failed += 1;
            }
        }
    }

    writer.flush()?;
    tracing::info!("Batch complete: {} scored, {} failed", scored, failed);
    println!("Scored {} records ({} failed) -> {}", scored, failed, args.output);

    Ok(())
}

fn request_from_row(headers: &csv::StringRecord, row: &csv::StringRecord) -> anyhow::Result<ScoreRequest> {
    let mut name = String::new();
    let mut loan_types = Vec::new();
    let mut fields: HashMap<String, serde_json::Value> = HashMap::new();

    for (header, cell) in headers.iter().zip(row.iter()) {
        match header {
            "name" => name = cell.to_string(),
            "loan_types" => {
                loan_types = cell
                    .split('|')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => {
                let value = cell_value(header, cell)?;
                fields.insert(header.to_string(), value);
            }
        }
    }

    Ok(ScoreRequest {
        name,
        loan_types,
        fields,
    })
}

fn cell_value(header: &str, cell: &str) -> anyhow::Result<serde_json::Value> {
    let spec = schema::field_spec(header)
        .with_context(|| format!("unknown column '{}'", header))?;
    let value = match spec.kind {
        FieldKind::IntRange { .. } => {
            let v: i64 = cell
                .trim()
                .parse()
                .with_context(|| format!("column '{}': '{}' is not an integer", header, cell))?;
            serde_json::json!(v)
        }
        FieldKind::FloatRange { .. } | FieldKind::MinFloat { .. } | FieldKind::AnyFloat => {
            let v: f64 = cell
                .trim()
                .parse()
                .with_context(|| format!("column '{}': '{}' is not a number", header, cell))?;
            serde_json::json!(v)
        }
        FieldKind::OneOf(_) => serde_json::json!(cell.trim()),
        FieldKind::JoinedLoanTypes => {
            bail!("column '{}' is derived; provide 'loan_types' instead", header)
        }
    };
    Ok(value)
}
