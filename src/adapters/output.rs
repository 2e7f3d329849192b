use crate::domain::model::{ProductRecord, SearchReport};
use crate::utils::error::{Result, ScoutError};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

pub fn render(report: &SearchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(&report.products)),
        OutputFormat::Csv => render_csv(&report.products),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

pub fn render_table(products: &[ProductRecord]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let headers = ["NAME", "PRICE", "SITE", "URL"];
    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.name.clone(),
                p.price.to_string(),
                p.site.clone(),
                p.source_url.clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        let line = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                // 價格欄靠右對齊
                if i == 1 {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}\n", line.trim_end())
    };

    let mut out = format_row(headers);
    for row in &rows {
        out.push_str(&format_row([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    out
}

pub fn render_csv(products: &[ProductRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["name", "price", "site", "source_url"])?;
    for product in products {
        writer.serialize(product)?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ScoutError::IoError(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 寫到指定檔案，未指定時輸出到 stdout
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, content)?;
            tracing::info!("📁 Results saved to: {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}
