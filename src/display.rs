//! Presentation of search results

use crate::{catalog::Restaurant, Result};
use csv_async::AsyncWriterBuilder;
use std::fmt::Write as _;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Header of the CSV output, matching the fields of [`Restaurant`]
const CSV_HEADER: [&str; 5] = ["name", "customer_rating", "distance", "price", "cuisine"];

/// How search results should be printed
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OutputFormat {
    /// Aligned, human-readable table
    #[default]
    Table,

    /// CSV with a header line
    Csv,
}

/// Write search results out in the requested format
pub async fn write_results<W: AsyncWrite + Unpin + Send>(
    output: W,
    format: OutputFormat,
    results: &[&Restaurant],
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(output, results).await,
        OutputFormat::Csv => write_csv(output, results).await,
    }
}

/// Write results as an aligned table
async fn write_table<W: AsyncWrite + Unpin>(mut output: W, results: &[&Restaurant]) -> Result<()> {
    output.write_all(format_table(results).as_bytes()).await?;
    output.flush().await?;
    Ok(())
}

/// Write results as CSV
async fn write_csv<W: AsyncWrite + Unpin + Send>(output: W, results: &[&Restaurant]) -> Result<()> {
    // The serializer derives its header from the first record, if any
    if results.is_empty() {
        let mut writer = AsyncWriterBuilder::new().create_writer(output);
        writer.write_record(CSV_HEADER).await?;
        writer.flush().await?;
        return Ok(());
    }
    let mut serializer = AsyncWriterBuilder::new().create_serializer(output);
    for restaurant in results {
        serializer.serialize(restaurant).await?;
    }
    serializer.flush().await?;
    Ok(())
}

/// Render results as an aligned table
fn format_table(results: &[&Restaurant]) -> String {
    if results.is_empty() {
        return "No restaurant matches your criteria.\n".to_owned();
    }
    const HEADERS: [&str; 5] = ["Name", "Rating", "Distance", "Price", "Cuisine"];
    let rows = (results.iter())
        .map(|r| {
            [
                r.name.to_string(),
                format!("{}/5", r.customer_rating),
                format!("{} mi", r.distance),
                format!("${}", r.price),
                r.cuisine.to_string(),
            ]
        })
        .collect::<Vec<_>>();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    let mut push_line = |cells: &mut dyn Iterator<Item = &str>| {
        let line = cells
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(table, "{}", line.trim_end()).expect("writing to a String can't fail");
    };
    push_line(&mut HEADERS.into_iter());
    for row in &rows {
        push_line(&mut row.iter().map(String::as_str));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pasta_house() -> Restaurant {
        Restaurant {
            name: "Pasta House".into(),
            customer_rating: 5,
            distance: 3,
            price: 15,
            cuisine: "Italian".into(),
        }
    }

    fn wok_inn() -> Restaurant {
        Restaurant {
            name: "Wok Inn".into(),
            customer_rating: 4,
            distance: 3,
            price: 20,
            cuisine: "Chinese".into(),
        }
    }

    #[test]
    fn formats_aligned_table() {
        let (pasta_house, wok_inn) = (pasta_house(), wok_inn());
        assert_eq!(
            format_table(&[&pasta_house, &wok_inn]),
            "Name         Rating  Distance  Price  Cuisine\n\
             Pasta House  5/5     3 mi      $15    Italian\n\
             Wok Inn      4/5     3 mi      $20    Chinese\n"
        );
    }

    #[test]
    fn reports_empty_results() {
        assert_eq!(format_table(&[]), "No restaurant matches your criteria.\n");
    }

    #[tokio::test]
    async fn writes_csv_with_header() {
        let (pasta_house, wok_inn) = (pasta_house(), wok_inn());
        let mut output = Vec::new();
        write_results(&mut output, OutputFormat::Csv, &[&pasta_house, &wok_inn])
            .await
            .expect("writing to memory can't fail");
        assert_eq!(
            String::from_utf8(output).expect("CSV output is UTF-8"),
            "name,customer_rating,distance,price,cuisine\n\
             Pasta House,5,3,15,Italian\n\
             Wok Inn,4,3,20,Chinese\n"
        );
    }

    #[tokio::test]
    async fn writes_csv_header_without_results() {
        let mut output = Vec::new();
        write_results(&mut output, OutputFormat::Csv, &[])
            .await
            .expect("writing to memory can't fail");
        assert_eq!(
            String::from_utf8(output).expect("CSV output is UTF-8"),
            "name,customer_rating,distance,price,cuisine\n"
        );
    }

    #[tokio::test]
    async fn writes_table() {
        let wok_inn = wok_inn();
        let mut output = Vec::new();
        write_results(&mut output, OutputFormat::Table, &[&wok_inn])
            .await
            .expect("writing to memory can't fail");
        assert_eq!(
            String::from_utf8(output).expect("table output is UTF-8"),
            "Name     Rating  Distance  Price  Cuisine\n\
             Wok Inn  4/5     3 mi      $20    Chinese\n"
        );
    }
}
