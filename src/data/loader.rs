use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
    UInt16Array,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::model::{Car, Category};
use super::pool::CarPool;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a car pool from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json`    – `[{ "id": "...", "brand": "...", "cylinder": 8, ... }, ...]`
/// * `.csv`     – header row with the same field names; empty cells are missing values
/// * `.parquet` – flat columns with the same names; numeric columns may be nullable
pub fn load_file(path: &Path) -> Result<CarPool> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let cars = match ext.as_str() {
        "parquet" | "pq" => load_parquet(path)?,
        "json" => load_json(path)?,
        "csv" => load_csv(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    CarPool::from_cars(cars).with_context(|| format!("validating {}", path.display()))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<Vec<Car>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON car records")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with the `Car` field names, in any order.
/// Empty numeric cells deserialize to `None`.
fn load_csv(path: &Path) -> Result<Vec<Car>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    reader
        .deserialize::<Car>()
        .enumerate()
        .map(|(row_no, record)| record.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one row per car.
///
/// Expected schema:
/// - `id`, `brand`, `model`, `origin`: Utf8 / LargeUtf8
/// - `year`: any integer type
/// - the six attribute columns: Float64 / Float32 / Int64 / Int32, nullable
///
/// A missing attribute column is treated as all-missing.
fn load_parquet(path: &Path) -> Result<Vec<Car>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut cars = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut cars)?;
    }
    Ok(cars)
}

fn read_batch(batch: &RecordBatch, cars: &mut Vec<Car>) -> Result<()> {
    let schema = batch.schema();
    let id_col = required_column(batch, "id")?;
    let brand_col = required_column(batch, "brand")?;
    let model_col = required_column(batch, "model")?;
    let origin_col = required_column(batch, "origin")?;
    let year_col = required_column(batch, "year")?;
    let attr_cols: Vec<Option<&Arc<dyn Array>>> = Category::ALL
        .iter()
        .map(|c| {
            let name = c.label().to_ascii_lowercase();
            schema.index_of(&name).ok().map(|idx| batch.column(idx))
        })
        .collect();

    for row in 0..batch.num_rows() {
        let attr = |c: Category| -> Result<Option<f64>> {
            match attr_cols[c.index()] {
                Some(col) => extract_f64(col, row)
                    .with_context(|| format!("Row {row}: failed to read '{}'", c.label())),
                None => Ok(None),
            }
        };

        cars.push(Car {
            id: extract_string(id_col, row).with_context(|| format!("Row {row}: 'id'"))?,
            brand: extract_string(brand_col, row)
                .with_context(|| format!("Row {row}: 'brand'"))?,
            model: extract_string(model_col, row)
                .with_context(|| format!("Row {row}: 'model'"))?,
            origin: extract_string(origin_col, row)
                .with_context(|| format!("Row {row}: 'origin'"))?,
            year: extract_year(year_col, row).with_context(|| format!("Row {row}: 'year'"))?,
            cylinder: attr(Category::Cylinder)?,
            consumption: attr(Category::Consumption)?,
            acceleration: attr(Category::Acceleration)?,
            displacement: attr(Category::Displacement)?,
            horsepower: attr(Category::Horsepower)?,
            weight: attr(Category::Weight)?,
        });
    }
    Ok(())
}

// -- Arrow helpers --

fn required_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a Arc<dyn Array>> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in text column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_year(col: &Arc<dyn Array>, row: usize) -> Result<u16> {
    let value = extract_f64(col, row)?.context("null model year")?;
    if !(0.0..=99.0).contains(&value) {
        bail!("model year {value} is not a two-digit year");
    }
    Ok(value as u16)
}

/// Read a nullable numeric cell.  Null becomes `None`.
fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<Option<f64>> {
    if col.is_null(row) {
        return Ok(None);
    }
    let value = match col.data_type() {
        DataType::Float64 => downcast::<Float64Array>(col)?.value(row),
        DataType::Float32 => downcast::<Float32Array>(col)?.value(row) as f64,
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row) as f64,
        DataType::Int32 => downcast::<Int32Array>(col)?.value(row) as f64,
        DataType::UInt16 => downcast::<UInt16Array>(col)?.value(row) as f64,
        other => bail!("Expected numeric column, got {other:?}"),
    };
    Ok(if value.is_nan() { None } else { Some(value) })
}

fn downcast<T: Array + 'static>(col: &Arc<dyn Array>) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array type {:?}", col.data_type()))
}
