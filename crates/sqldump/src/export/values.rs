use crate::{Error, Query, Result, Source, ValueEncoder};

/// Reads every row of the table and folds them into a `VALUES` list.
///
/// The cursor lives for the duration of this call and is dropped on every
/// return path.
pub(super) async fn values_clause<S>(
    source: &mut S,
    name: &str,
    encoder: &ValueEncoder,
) -> Result<String>
where
    S: Source + ?Sized,
{
    let sql = Query::SelectAll(name).to_string();
    let mut cursor = source.query(&sql).await?;

    let width = cursor.columns().len();
    if width == 0 {
        return Err(Error::no_columns(name));
    }

    let mut dst = String::new();
    let mut count = 0usize;

    while let Some(row) = cursor.next().await? {
        if row.len() != width {
            return Err(Error::invalid_result(format!(
                "row {count} has {} value(s), expected {width}",
                row.len()
            )));
        }

        if count > 0 {
            dst.push(',');
        }
        encoder.encode_row(&row, &mut dst);
        count += 1;
    }

    tracing::debug!(table = name, rows = count, "materialized table rows");

    Ok(dst)
}
